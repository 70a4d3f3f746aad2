mod render;

pub use render::{render_alert, render_segment};

use crate::monitor::{AlertTransition, SectionCount};

/// Where closed-segment reports and alert transitions go.
///
/// The monitor core never prints. The binary wires in a [`ConsoleSink`];
/// tests use a [`MemorySink`].
pub trait ReportSink {
    fn segment(&mut self, report: &SegmentReport);
    fn alert(&mut self, transition: &AlertTransition);
}

/// Per-closed-segment summary. Emitted once, never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentReport {
    pub window_secs: u64,
    pub top_sections: Vec<SectionCount>,
    pub trailing_total: u64,
}

/// Prints rendered report lines to stdout, one line per report or transition.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn segment(&mut self, report: &SegmentReport) {
        println!("{}", render_segment(report));
    }

    fn alert(&mut self, transition: &AlertTransition) {
        println!("{}", render_alert(transition));
    }
}

/// Collects everything emitted, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub segments: Vec<SegmentReport>,
    pub alerts: Vec<AlertTransition>,
}

impl ReportSink for MemorySink {
    fn segment(&mut self, report: &SegmentReport) {
        self.segments.push(report.clone());
    }

    fn alert(&mut self, transition: &AlertTransition) {
        self.alerts.push(transition.clone());
    }
}
