use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

/// One parsed access-log record.
///
/// Input lines are 7-field quoted CSV:
///
/// ```text
/// "remotehost","rfc931","authuser","date","request","status","bytes"
/// "10.0.0.2","-","apache",1549573860,"GET /api/user HTTP/1.0",200,1234
/// ```
///
/// Only the timestamp and request fields feed the monitor; host, ident, user,
/// status and size are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
    /// First path component, e.g. `/api/user` -> `api`.
    pub section: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 7 fields, got {got}")]
    FieldCount { got: usize },

    #[error("invalid timestamp: {value}")]
    Timestamp { value: String },

    #[error("malformed request line: {value}")]
    RequestLine { value: String },

    #[error("malformed request path: {path}")]
    RequestPath { path: String },
}

fn unquote(field: &str) -> &str {
    field.trim_matches('"')
}

/// Parse one data line into a [`LogRecord`].
///
/// Extra trailing fields are tolerated; the first seven are positional.
pub fn parse_record(line: &str) -> Result<LogRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 7 {
        return Err(ParseError::FieldCount { got: fields.len() });
    }

    let raw_ts = unquote(fields[3]);
    let secs: i64 = raw_ts.parse().map_err(|_| ParseError::Timestamp {
        value: raw_ts.to_string(),
    })?;
    let timestamp = Utc
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| ParseError::Timestamp {
            value: raw_ts.to_string(),
        })?;

    // "METHOD path HTTP/version"
    let request = unquote(fields[4]);
    let tokens: Vec<&str> = request.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::RequestLine {
            value: request.to_string(),
        });
    }

    let path = tokens[1];
    let mut components = path.split('/');
    components.next();
    let section = match components.next() {
        Some(section) => section.to_string(),
        None => {
            return Err(ParseError::RequestPath {
                path: path.to_string(),
            });
        }
    };

    Ok(LogRecord {
        timestamp,
        method: tokens[0].to_string(),
        path: path.to_string(),
        section,
    })
}
