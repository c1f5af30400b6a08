/*!
 * Ignore-pattern loading and matching
 *
 * Patterns come from the `.projectinspector.ignore` file in the inspected
 * root, one glob per line. A trailing `/` scopes a pattern to directories
 * only; every other pattern applies to files and directories alike. A path
 * is ignored when any pattern matches its root-relative path or its base
 * name, whole-string, with shell-glob semantics.
 */

use std::fs;
use std::path::{Component, Path};

use glob_match::glob_match;

/// A single parsed ignore rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    /// The trimmed config line as loaded, kept for display
    raw: String,
    /// Glob text to match with (trailing `/` stripped for dir-only rules)
    glob: String,
    /// Whether the rule only applies to directories
    dir_only: bool,
}

impl IgnorePattern {
    /// Parse one trimmed, non-comment config line.
    fn parse(line: &str) -> Self {
        let dir_only = line.ends_with('/');
        let glob = if dir_only {
            line.trim_end_matches('/').to_string()
        } else {
            line.to_string()
        };
        Self {
            raw: line.to_string(),
            glob,
            dir_only,
        }
    }

    /// The pattern text as it appeared in the config file.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the rule only applies to directories.
    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Match against a relative path and base name for an entry of known kind.
    ///
    /// `glob_match` never panics on malformed globs; it simply fails to
    /// match, which gives this rule the required fail-open behavior.
    fn matches(&self, rel: &str, base: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        glob_match(&self.glob, rel) || glob_match(&self.glob, base)
    }
}

/// An ordered list of ignore rules
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<IgnorePattern>,
}

impl PatternSet {
    /// Parse rules from ignore-file text.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#`
    /// are skipped; everything else is trimmed and used verbatim. Load
    /// order is preserved (it only affects display; any match ignores).
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(IgnorePattern::parse)
            .collect();
        Self { patterns }
    }

    /// Load rules from the ignore file at `path`.
    ///
    /// A missing file yields the empty set; an unreadable one degrades to
    /// the empty set with a warning on stderr. Neither aborts the run.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterate rules in load order.
    pub fn iter(&self) -> impl Iterator<Item = &IgnorePattern> {
        self.patterns.iter()
    }

    /// Check whether the entry at `path` is suppressed under `root`.
    ///
    /// First matching rule wins; no rule matching means not ignored. The
    /// directory/file kind comes from a live stat, so the answer is
    /// identical for both traversal passes given unchanged filesystem state.
    pub fn is_ignored(&self, path: &Path, root: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let rel = relative_to(path, root);
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let is_dir = path.is_dir();

        self.patterns
            .iter()
            .any(|p| p.matches(&rel, &base, is_dir))
    }
}

/// Path of `path` relative to `root`, with components joined by `/`
/// regardless of the host separator.
fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => {
            let parts: Vec<String> = rel
                .components()
                .filter_map(|c| match c {
                    Component::Normal(name) => Some(name.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect();
            parts.join("/")
        }
        // Entries outside the root only arise from misuse; match on the
        // full path rather than guessing at a relative form.
        Err(_) => path.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/"),
    }
}
