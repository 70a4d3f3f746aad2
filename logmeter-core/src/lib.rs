//! Streaming access-log monitor.
//!
//! The overall data processing architecture is:
//!
//! stdin (quoted CSV)
//! parse_record
//! Event
//! Monitor (segment windows, trailing-sum ring, alert)
//! ReportSink

pub mod ingest;
pub mod logging;
pub mod monitor;
pub mod report;
