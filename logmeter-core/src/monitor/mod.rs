mod alert;
mod driver;
mod error;
mod segment;
mod span;

#[cfg(test)]
mod tests;

pub use alert::{Alert, AlertKind, AlertTransition};
pub use driver::{Event, Monitor, MonitorConfig};
pub use error::ConfigError;
pub use segment::{SectionCount, Segment};
pub use span::TrailingSpan;
