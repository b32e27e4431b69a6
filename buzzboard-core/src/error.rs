//! Error types for the BuzzBoard core.

use std::path::PathBuf;

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in BuzzBoard operations.
#[derive(Error, Debug)]
pub enum BuzzboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No event found with id {0}")]
    EventNotFound(EventId),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("No deletion is staged")]
    NoStagedDeletion,

    #[error("Event store at {path} is corrupted: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Event store version {found} is newer than this build supports (up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for BuzzBoard operations.
pub type BuzzboardResult<T> = Result<T, BuzzboardError>;
