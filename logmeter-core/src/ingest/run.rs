use crate::ingest::record::{ParseError, parse_record};
use crate::monitor::Monitor;
use crate::report::ReportSink;
use std::io::BufRead;
use thiserror::Error;
use tracing::warn;

/// What to do with a record that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort the whole stream on the first bad record (default).
    Abort,
    /// Log the bad record and keep going.
    Skip,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Drive a whole log stream through a monitor.
///
/// The first line is a header and is skipped unconditionally. Every following
/// line is parsed and fed to the monitor in arrival order; end of stream
/// closes the in-flight segment. Reports already emitted before an error are
/// never retracted.
pub fn process<R: BufRead, S: ReportSink>(
    reader: R,
    monitor: &mut Monitor<S>,
    policy: MalformedPolicy,
) -> Result<(), PipelineError> {
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if number == 0 {
            // header
            continue;
        }

        match parse_record(&line) {
            Ok(record) => monitor.observe(record.into()),
            Err(source) => match policy {
                MalformedPolicy::Abort => {
                    return Err(PipelineError::Record {
                        line: number + 1,
                        source,
                    });
                }
                MalformedPolicy::Skip => {
                    warn!(event = "record_skipped", line = number + 1, error = %source);
                }
            },
        }
    }

    monitor.finish();

    Ok(())
}
