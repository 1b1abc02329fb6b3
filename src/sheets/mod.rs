//! Spreadsheet data source.
//!
//! Every table the bot works with (books, movies, activities and daily reports)
//! lives in its own sheet with a fixed column layout, see [`Table`]. The rest of
//! the bot only talks to the data source through the [`Requester`] trait which
//! exposes three operations on A1 ranges:
//!
//! - `read(range)` returns the rows of the range as strings
//! - `append(range, row)` adds a row after the last one of the table
//! - `update(range, row)` overwrites a single row
//!
//! Two implementations exist:
//!
//! - [`SheetsRequester`] talks to the Google Sheets v4 REST API
//! - [`LocalSheets`] keeps the same tables in memory and persists them as JSON,
//!   it is used when no spreadsheet is configured
//!
//! [`SheetsBackend`] picks one of them at startup.

use std::fmt;

mod backend;
mod local;
mod requester;
mod response_structs;
mod schema;

pub use crate::sheets::backend::SheetsBackend;
pub use crate::sheets::local::LocalSheets;
#[cfg(test)]
pub use crate::sheets::requester::MockRequester;
pub use crate::sheets::requester::{Requester, SheetsRequester};
pub use crate::sheets::schema::Table;

/// Errors returned by the data source.
#[derive(Debug)]
pub enum SheetsError {
    /// The HTTP request could not be sent or its body could not be read.
    Http(reqwest::Error),
    /// The request exceeded the configured timeout.
    Timeout,
    /// The API answered with a non success status code.
    Status(u16),
    /// The range or the payload does not have the expected shape.
    Malformed(String),
    /// The local sheets file could not be read or written.
    Io(std::io::Error),
}

impl fmt::Display for SheetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetsError::Http(e) => write!(f, "spreadsheet request failed: {}", e),
            SheetsError::Timeout => write!(f, "spreadsheet request timed out"),
            SheetsError::Status(code) => write!(f, "spreadsheet api answered with status {}", code),
            SheetsError::Malformed(msg) => write!(f, "malformed spreadsheet data: {}", msg),
            SheetsError::Io(e) => write!(f, "local sheets file error: {}", e),
        }
    }
}

impl std::error::Error for SheetsError {}

impl From<reqwest::Error> for SheetsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return SheetsError::Timeout;
        }
        SheetsError::Http(e)
    }
}

impl From<std::io::Error> for SheetsError {
    fn from(e: std::io::Error) -> Self {
        SheetsError::Io(e)
    }
}
