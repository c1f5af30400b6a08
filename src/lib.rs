/*!
 * InspectFS - Print a directory tree and dump file contents, honoring
 * ignore patterns loaded from a `.projectinspector.ignore` file in the
 * inspected root.
 */

pub mod config;
pub mod error;
pub mod patterns;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config, IGNORE_FILE_NAME};
pub use error::{InspectError, Result};
pub use patterns::{IgnorePattern, PatternSet};
pub use scanner::Inspector;
pub use types::{FileContent, FileRecord};
pub use writer::ReportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
