/*!
 * Directory traversal: the tree pass and the contents pass
 *
 * Both passes consult the same [`PatternSet`] and prune ignored directories
 * before descending, so nothing inside an ignored subtree is ever statted
 * or read and the two output sections agree on what exists.
 */

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::patterns::PatternSet;
use crate::types::{FileContent, FileRecord};

/// Placeholder leaf emitted when a directory cannot be listed.
const PERMISSION_DENIED_LEAF: &str = "└── [Permission Denied]";

/// Walks the inspection root for both output passes
pub struct Inspector {
    /// Canonical inspection root
    root: PathBuf,
    /// Compiled ignore rules
    patterns: PatternSet,
}

impl Inspector {
    /// Create an inspector anchored at a canonical `root`.
    pub fn new(root: PathBuf, patterns: PatternSet) -> Self {
        Self { root, patterns }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Render the directory tree as indented, connector-prefixed lines.
    ///
    /// Each invocation re-walks the live filesystem; no state is kept
    /// between calls or shared with the contents pass.
    pub fn render_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_dir(&self.root, "", out)
    }

    fn render_dir<W: Write>(&self, dir: &Path, prefix: &str, out: &mut W) -> io::Result<()> {
        let mut entries = match read_dir_sorted(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                writeln!(out, "{}{}", prefix, PERMISSION_DENIED_LEAF)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // Drop ignored entries before choosing connectors, so an ignored
        // sibling never affects which glyph a later visible entry gets.
        entries.retain(|path| !self.patterns.is_ignored(path, &self.root));

        let count = entries.len();
        for (index, path) in entries.iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            if path.is_dir() {
                writeln!(out, "{}{}{}/", prefix, connector, name)?;
                let extension = if is_last { "    " } else { "│   " };
                self.render_dir(path, &format!("{}{}", prefix, extension), out)?;
            } else {
                writeln!(out, "{}{}{}", prefix, connector, name)?;
            }
        }

        Ok(())
    }

    /// Enumerate every non-ignored file under the root, top-down, reading
    /// each one's contents as it is reached.
    ///
    /// Ignored directories are pruned before descent, so their contents are
    /// never visited. Directories that fail to list mid-walk are skipped.
    /// A file that fails to read yields an [`FileContent::Unreadable`]
    /// record instead of ending the walk.
    pub fn files(&self) -> impl Iterator<Item = FileRecord> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0 || !self.patterns.is_ignored(entry.path(), &self.root)
            })
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| read_record(entry.path()))
    }
}

/// List the immediate children of `dir`, sorted by name in byte order so
/// the output is deterministic and platform-independent.
fn read_dir_sorted(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Read one file into a record, capturing any failure as content.
fn read_record(path: &Path) -> FileRecord {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let content = match fs::read_to_string(path) {
        Ok(text) => FileContent::Text(text),
        Err(e) => FileContent::Unreadable(format!("Could not read file: {}", e)),
    };
    FileRecord {
        name,
        path: path.to_path_buf(),
        content,
    }
}
