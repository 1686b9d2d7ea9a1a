use error_set::error_set;
use std::fs;
use std::path::{Path, PathBuf};

pub mod content;
pub mod replace;
pub mod target;

pub use content::{FileContent, Line};
pub use replace::{Patched, patch_content, patch_str};
pub use target::{REPLACEMENT_BLOCK, TARGET_PATH, TARGET_SUBSTRING, contains_target};

error_set! {
    /// Top-level error for template-fix operations
    TemplateFixError := {
        /// The target file could not be read, decoded as UTF-8, or written
        FileAccess(std::io::Error),
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Lines that contained the target and were replaced
    pub replaced: usize,
    /// Lines in the file before patching
    pub lines_read: usize,
    /// Line entries written back
    pub lines_written: usize,
}

/// Rewrites a file, replacing each line that contains the target
pub struct LineReplacer {
    path: PathBuf,
}

impl Default for LineReplacer {
    /// Replacer for the fixed [`TARGET_PATH`]
    fn default() -> Self {
        Self::new(TARGET_PATH)
    }
}

impl LineReplacer {
    /// Create a LineReplacer for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this replacer reads and overwrites
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, patch every matching line and write the result back.
    ///
    /// The file is overwritten even when nothing matched. Nothing is written
    /// if reading fails, so a missing file is never created.
    ///
    /// # Examples
    /// ```no_run
    /// # use template_fix::LineReplacer;
    /// let report = LineReplacer::default().run().unwrap();
    /// println!("replaced {} line(s)", report.replaced);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TemplateFixError::FileAccess`] if the file is missing,
    /// unreadable, not valid UTF-8, or cannot be written.
    pub fn run(&self) -> Result<Report, TemplateFixError> {
        let text = fs::read_to_string(&self.path)?;
        let content = FileContent::parse(&text);
        let patched = patch_content(&content);

        fs::write(&self.path, patched.content.to_string())?;

        Ok(Report {
            replaced: patched.replaced,
            lines_read: content.len(),
            lines_written: patched.content.len(),
        })
    }
}
