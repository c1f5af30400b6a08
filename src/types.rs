/*!
 * Core types for the InspectFS application
 */

use std::path::PathBuf;

/// Outcome of reading one file during the contents pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// File read to completion as UTF-8 text
    Text(String),
    /// File could not be read; holds a description of the failure
    Unreadable(String),
}

/// One non-ignored file encountered by the contents pass
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// File name (final path component)
    pub name: String,
    /// Absolute path of the file
    pub path: PathBuf,
    /// File content, or the reason it could not be read
    pub content: FileContent,
}
