/*!
 * Configuration handling for InspectFS
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{InspectError, Result};

/// Name of the ignore file looked up directly inside the inspected root.
pub const IGNORE_FILE_NAME: &str = ".projectinspector.ignore";

/// Command-line arguments for InspectFS
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "inspectfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Project folder inspector with ignore functionality",
    long_about = "Prints an indented tree of a project directory and then dumps every \
                  non-ignored file's contents, honoring glob patterns read from a \
                  .projectinspector.ignore file in the inspected root."
)]
pub struct Args {
    /// Path to the project directory (default: current directory)
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to inspect, as given on the command line
    pub root: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            root: PathBuf::from(&args.directory_path),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(InspectError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(InspectError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    /// Resolve the inspection root to an absolute, canonical path.
    ///
    /// Call after [`validate`](Self::validate); all relative-path and ignore
    /// computations are anchored to the returned path.
    pub fn canonical_root(&self) -> io::Result<PathBuf> {
        fs::canonicalize(&self.root)
    }
}

/// Path of the ignore file for a given (canonical) inspection root.
pub fn ignore_file_path(root: &Path) -> PathBuf {
    root.join(IGNORE_FILE_NAME)
}
