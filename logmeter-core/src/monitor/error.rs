use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("span of {span_secs}s must cover at least one {segment_secs}s segment")]
    InvalidSpan { segment_secs: u64, span_secs: u64 },
}
