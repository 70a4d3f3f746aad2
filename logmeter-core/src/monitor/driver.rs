use crate::ingest::LogRecord;
use crate::monitor::alert::Alert;
use crate::monitor::error::ConfigError;
use crate::monitor::segment::Segment;
use crate::monitor::span::TrailingSpan;
use crate::report::{ReportSink, SegmentReport};
use chrono::{DateTime, Duration, Utc};

/// One normalized hit ready for windowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub section: String,
}

impl From<LogRecord> for Event {
    fn from(record: LogRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            section: record.section,
        }
    }
}

/// Construction-time knobs; read once, never re-read during a run.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub segment_secs: u64,
    pub span_secs: u64,
    /// Average hits per segment over the span above which the alert trips.
    pub threshold: f64,
    pub top_sections: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            segment_secs: 10,
            span_secs: 120,
            threshold: 100.0,
            top_sections: 3,
        }
    }
}

/// Streaming driver over the event stream.
///
/// Owns exactly one in-flight [`Segment`], one [`TrailingSpan`] and one
/// [`Alert`]. Events are assumed to arrive with non-decreasing timestamps; an
/// event more than one segment duration past the current segment's start
/// closes it (push total, report, evaluate alert) and opens a new segment at
/// the arriving timestamp. A gap spanning many segment durations still closes
/// exactly once: no empty segments are synthesized for the skipped interval,
/// so under sparse input the span covers the last K *observed* segments.
#[derive(Debug)]
pub struct Monitor<S> {
    segment_duration: Duration,
    window_secs: u64,
    top_sections: usize,
    current: Option<Segment>,
    last_seen: Option<DateTime<Utc>>,
    span: TrailingSpan,
    alert: Alert,
    sink: S,
}

impl<S: ReportSink> Monitor<S> {
    pub fn new(config: &MonitorConfig, sink: S) -> Result<Self, ConfigError> {
        let span = TrailingSpan::new(config.segment_secs, config.span_secs)?;

        Ok(Self {
            segment_duration: Duration::seconds(config.segment_secs as i64),
            window_secs: config.segment_secs,
            top_sections: config.top_sections,
            current: None,
            last_seen: None,
            span,
            alert: Alert::new(config.threshold),
            sink,
        })
    }

    /// Feed one event in arrival order.
    ///
    /// An event belongs to the current segment iff its timestamp is at most
    /// one segment duration past the segment start (inclusive boundary).
    pub fn observe(&mut self, event: Event) {
        let out_of_window = self
            .current
            .as_ref()
            .is_some_and(|segment| event.timestamp - segment.start() > self.segment_duration);

        if out_of_window {
            self.close_current(event.timestamp);
        }

        self.current
            .get_or_insert_with(|| Segment::new(event.timestamp))
            .add_hit(&event.section);
        self.last_seen = Some(event.timestamp);
    }

    /// End of stream: close and report the in-flight segment, if any.
    pub fn finish(&mut self) {
        if let Some(at) = self.last_seen {
            self.close_current(at);
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn close_current(&mut self, at: DateTime<Utc>) {
        let Some(segment) = self.current.take() else {
            return;
        };

        self.span.push(segment.total());

        self.sink.segment(&SegmentReport {
            window_secs: self.window_secs,
            top_sections: segment.top_sections(self.top_sections),
            trailing_total: self.span.trailing_total(),
        });

        // Denominator is always the configured K, never segments observed so
        // far: early-stream averages deflate toward zero.
        let average = self.span.trailing_total() as f64 / self.span.segments_in_span() as f64;
        if let Some(transition) = self.alert.evaluate(average, at) {
            self.sink.alert(&transition);
        }
    }
}
