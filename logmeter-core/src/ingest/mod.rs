mod record;
mod run;


pub use record::{LogRecord, ParseError, parse_record};
pub use run::{MalformedPolicy, PipelineError, process};
