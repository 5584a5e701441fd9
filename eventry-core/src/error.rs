//! Error types for the eventry crates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in registry operations.
#[derive(Error, Debug)]
pub enum EventryError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record file does not exist yet. Callers treat this as an empty
    /// collection, never as a fatal condition.
    #[error("No records yet at {}", .0.display())]
    StoreMissing(PathBuf),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Attendee {attendee_id} not found for event {event_id}")]
    AttendeeNotFound { attendee_id: u64, event_id: u64 },

    #[error("Unknown event kind: {0}")]
    UnknownKind(String),

    #[error("Invalid attribute '{0}'. You can only amend name, date, time or location")]
    InvalidAttribute(String),

    #[error("Invalid date '{0}'. Please use DD/MM/YYYY format")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Please use HH:MM format")]
    InvalidTime(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record format error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for registry operations.
pub type EventryResult<T> = Result<T, EventryError>;
