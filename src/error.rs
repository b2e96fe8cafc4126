//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Invalid student: {0}")]
    Validation(String),

    #[error("Roster is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    // -------------------------------------------------------------------------
    // Precondition Errors
    // -------------------------------------------------------------------------
    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Need at least {required} students, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt data at line {line}: {content:?}")]
    CorruptData { line: usize, content: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
