//! Error types for the state-history backends.

use crate::types::Time;
use thiserror::Error;

/// Main error type for backend operations.
///
/// Both variants indicate caller misuse of the API (inserting or querying
/// outside the history's bounds) and are never retried internally. The
/// absence of a matching interval is not an error; queries report it through
/// `Option` or an empty result instead.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error(
        "[{ssid}] cannot insert interval [{start}, {end}]: \
         start must be <= end and >= history start {history_start}"
    )]
    IntervalOutOfRange {
        ssid: String,
        start: Time,
        end: Time,
        history_start: Time,
    },

    #[error("[{ssid}] query time {time} is outside the history range [{start}, {end}]")]
    TimeOutOfRange {
        ssid: String,
        time: Time,
        start: Time,
        end: Time,
    },
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
