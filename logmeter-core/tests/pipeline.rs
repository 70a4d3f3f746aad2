use logmeter_core::ingest::{self, MalformedPolicy, PipelineError};
use logmeter_core::monitor::{AlertKind, Monitor, MonitorConfig};
use logmeter_core::report::{MemorySink, render_alert, render_segment};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const HEADER: &str = r#""remotehost","rfc931","authuser","date","request","status","bytes""#;

fn data_line(ts: i64, path: &str) -> String {
    format!(r#""10.0.0.2","-","apache",{ts},"GET {path} HTTP/1.0",200,1234"#)
}

fn run(
    input: &str,
    config: &MonitorConfig,
    policy: MalformedPolicy,
) -> (Result<(), PipelineError>, MemorySink) {
    let mut monitor = Monitor::new(config, MemorySink::default()).unwrap();
    let result = ingest::process(Cursor::new(input.to_string()), &mut monitor, policy);
    (result, monitor.into_sink())
}

fn sample_stream() -> String {
    // Six requests across two adjacent timestamps, all inside one 10s window.
    let mut lines = vec![HEADER.to_string()];
    lines.push(data_line(1_549_573_859, "/api/user"));
    lines.push(data_line(1_549_573_860, "/api/user"));
    lines.push(data_line(1_549_573_860, "/api/user"));
    lines.push(data_line(1_549_573_860, "/api/user"));
    lines.push(data_line(1_549_573_860, "/help/faq"));
    lines.push(data_line(1_549_573_860, "/help/faq"));
    lines.join("\n") + "\n"
}

#[test]
fn test_sample_stream_single_report() {
    let (result, sink) = run(
        &sample_stream(),
        &MonitorConfig::default(),
        MalformedPolicy::Abort,
    );

    assert!(result.is_ok());
    assert_eq!(sink.segments.len(), 1);
    assert_eq!(sink.alerts.len(), 0);

    assert_eq!(
        render_segment(&sink.segments[0]),
        "10s stats: api=4 help=2 | trailing total: 6"
    );
}

#[test]
fn test_header_only_stream_is_clean() {
    let (result, sink) = run(
        &format!("{HEADER}\n"),
        &MonitorConfig::default(),
        MalformedPolicy::Abort,
    );

    assert!(result.is_ok());
    assert_eq!(sink.segments.len(), 0);
    assert_eq!(sink.alerts.len(), 0);
}

#[test]
fn test_completely_empty_input_is_clean() {
    let (result, sink) = run("", &MonitorConfig::default(), MalformedPolicy::Abort);

    assert!(result.is_ok());
    assert_eq!(sink.segments.len(), 0);
}

#[test]
fn test_malformed_record_aborts_stream() {
    let mut lines = vec![HEADER.to_string()];
    lines.push(data_line(100, "/api/user"));
    // Missing HTTP version token.
    lines.push(r#""10.0.0.2","-","apache",101,"GET /api/user",200,1234"#.to_string());
    // Would close the first window if it were ever reached.
    lines.push(data_line(500, "/api/user"));
    let input = lines.join("\n") + "\n";

    let (result, sink) = run(&input, &MonitorConfig::default(), MalformedPolicy::Abort);

    match result {
        Err(PipelineError::Record { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected record error, got {other:?}"),
    }
    // Nothing past the bad record was processed.
    assert_eq!(sink.segments.len(), 0);
}

#[test]
fn test_malformed_record_skipped_under_skip_policy() {
    let mut lines = vec![HEADER.to_string()];
    lines.push(data_line(100, "/api/user"));
    lines.push(r#""10.0.0.2","-","apache",101,"GET /api/user",200,1234"#.to_string());
    lines.push(data_line(105, "/api/user"));
    let input = lines.join("\n") + "\n";

    let (result, sink) = run(&input, &MonitorConfig::default(), MalformedPolicy::Skip);

    assert!(result.is_ok());
    assert_eq!(sink.segments.len(), 1);
    assert_eq!(sink.segments[0].trailing_total, 2);
}

#[test]
fn test_alert_lines_render_trigger_and_reset() {
    let config = MonitorConfig {
        segment_secs: 10,
        span_secs: 10, // K = 1
        threshold: 2.0,
        ..MonitorConfig::default()
    };

    let mut lines = vec![HEADER.to_string()];
    for _ in 0..3 {
        lines.push(data_line(0, "/api/user"));
    }
    lines.push(data_line(11, "/api/user")); // closes window 1: average 3.0 -> triggered
    lines.push(data_line(22, "/api/user")); // closes window 2: average 1.0 -> reset
    let input = lines.join("\n") + "\n";

    let (result, sink) = run(&input, &config, MalformedPolicy::Abort);

    assert!(result.is_ok());
    assert_eq!(sink.alerts.len(), 2);
    assert_eq!(sink.alerts[0].kind, AlertKind::Triggered);
    assert_eq!(sink.alerts[1].kind, AlertKind::Reset);

    assert_eq!(
        render_alert(&sink.alerts[0]),
        "Alert triggered - average hits: 3.00, at: 1970-01-01T00:00:11Z"
    );
    assert_eq!(
        render_alert(&sink.alerts[1]),
        "Alert reset - average hits: 1.00, at: 1970-01-01T00:00:22Z"
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let config = MonitorConfig {
        segment_secs: 10,
        span_secs: 20,
        threshold: 1.0,
        ..MonitorConfig::default()
    };

    let mut lines = vec![HEADER.to_string()];
    for ts in [0, 1, 2, 11, 12, 40, 41, 90] {
        lines.push(data_line(ts, "/api/user"));
        lines.push(data_line(ts, "/report/daily"));
    }
    let input = lines.join("\n") + "\n";

    let render_all = |sink: &MemorySink| -> Vec<String> {
        let mut out: Vec<String> = sink.segments.iter().map(render_segment).collect();
        out.extend(sink.alerts.iter().map(render_alert));
        out
    };

    let (first_result, first) = run(&input, &config, MalformedPolicy::Abort);
    let (second_result, second) = run(&input, &config, MalformedPolicy::Abort);

    assert!(first_result.is_ok());
    assert!(second_result.is_ok());
    assert_eq!(render_all(&first), render_all(&second));
}
