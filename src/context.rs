//! Per-file facts available to rules during a lint pass.
//!
//! A [`RuleContext`] is read-only: rules can look at the file path, slice the
//! original source text, and ask the [`Filesystem`] collaborator whether a
//! path exists, but nothing here lets a rule mutate the tree or the buffer.

use std::path::Path;

use crate::span::SourceRange;

/// Synchronous, read-only filesystem collaborator.
///
/// The only operation rules perform against the filesystem is an existence
/// check; an inaccessible path is indistinguishable from a missing one.
pub trait Filesystem: Send + Sync {
    /// Whether anything exists at the given path.
    fn exists(&self, path: &Path) -> bool;
}

/// [`Filesystem`] backed by the real OS filesystem.
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

/// Read-only facts about the file under analysis.
pub struct RuleContext<'a> {
    path: &'a Path,
    source: &'a str,
    fs: &'a dyn Filesystem,
}

impl<'a> RuleContext<'a> {
    /// Create a context for one file.
    pub fn new(path: &'a Path, source: &'a str, fs: &'a dyn Filesystem) -> Self {
        Self { path, source, fs }
    }

    /// Path of the file under analysis.
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Full original source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The filesystem collaborator.
    pub fn fs(&self) -> &'a dyn Filesystem {
        self.fs
    }

    /// Source text covered by a range, or `None` when the range falls
    /// outside the buffer or off a character boundary.
    pub fn snippet(&self, range: SourceRange) -> Option<&'a str> {
        self.source.get(range.start..range.end)
    }

    /// 1-based line and column of a byte offset, for display.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        crate::span::line_col(self.source, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct NoFiles;

    impl Filesystem for NoFiles {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    #[test]
    fn snippet_slices_the_source() {
        let path = PathBuf::from("spec/features/x_spec.rb");
        let ctx = RuleContext::new(&path, "sleep 20\n", &NoFiles);

        assert_eq!(ctx.snippet(SourceRange::new(6, 8)), Some("20"));
        assert_eq!(ctx.snippet(SourceRange::new(0, 5)), Some("sleep"));
    }

    #[test]
    fn snippet_out_of_bounds_is_none() {
        let path = PathBuf::from("x.rb");
        let ctx = RuleContext::new(&path, "sleep", &NoFiles);

        assert!(ctx.snippet(SourceRange::new(3, 99)).is_none());
    }

    #[test]
    fn line_col_is_one_based() {
        let path = PathBuf::from("x.rb");
        let ctx = RuleContext::new(&path, "a\nbcd\nef", &NoFiles);

        assert_eq!(ctx.line_col(0), (1, 1));
        assert_eq!(ctx.line_col(2), (2, 1));
        assert_eq!(ctx.line_col(4), (2, 3));
        assert_eq!(ctx.line_col(6), (3, 1));
    }

    #[test]
    fn os_filesystem_reports_existing_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let existing = dir.path().join("component.rb");
        std::fs::write(&existing, "class Foo; end\n").unwrap();

        assert!(OsFilesystem.exists(&existing));
        assert!(!OsFilesystem.exists(&dir.path().join("missing.rb")));
    }
}
