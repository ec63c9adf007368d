//! Error types for the strict validation boundary.
//!
//! The conflict-detection path itself is total: it never returns an error,
//! it degrades to "no conflict" for anything it cannot interpret. Errors
//! only arise when a caller opts into strict construction via
//! [`Schedule::validated`](crate::Schedule::validated).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Empty time range: {start} is not before {end}")]
    EmptyRange { start: String, end: String },

    #[error("Invalid weekday: {0} (expected 0-6, Sunday-Saturday)")]
    InvalidWeekday(u8),

    #[error("No days of week given")]
    NoDays,

    #[error("Empty school year")]
    EmptySchoolYear,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
