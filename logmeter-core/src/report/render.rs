use crate::monitor::{AlertKind, AlertTransition};
use crate::report::SegmentReport;
use chrono::SecondsFormat;
use std::fmt::Write;

/// One line per closed segment: window length, top sections, trailing total.
pub fn render_segment(report: &SegmentReport) -> String {
    let mut line = format!("{}s stats:", report.window_secs);

    if report.top_sections.is_empty() {
        line.push_str(" <no hits>");
    } else {
        for entry in &report.top_sections {
            let _ = write!(line, " {}={}", entry.section, entry.count);
        }
    }

    let _ = write!(line, " | trailing total: {}", report.trailing_total);

    line
}

/// One line per alert state change, stamped with the event time that caused it.
pub fn render_alert(transition: &AlertTransition) -> String {
    let label = match transition.kind {
        AlertKind::Triggered => "triggered",
        AlertKind::Reset => "reset",
    };

    format!(
        "Alert {} - average hits: {:.2}, at: {}",
        label,
        transition.average,
        transition.at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}
