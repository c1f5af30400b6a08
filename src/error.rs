//! Error handling for inspectfs
//!
//! Only root validation is fatal; everything encountered mid-walk degrades
//! to placeholder output instead of surfacing here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for inspectfs operations
#[derive(Error, Debug)]
pub enum InspectError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Inspection root does not exist
    #[error("The directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// Inspection root exists but is not a directory
    #[error("The path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Specialized Result type for inspectfs operations
pub type Result<T> = std::result::Result<T, InspectError>;
