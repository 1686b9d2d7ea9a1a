use std::borrow::Cow;
use std::fmt;

/// A single line of file content, including its terminator where present
pub type Line<'a> = Cow<'a, str>;

/// File content held as an ordered sequence of lines.
///
/// Lines keep their terminators, so rendering the content with
/// [`Display`](fmt::Display) reproduces the input byte for byte. A line ends
/// after each `\n`; `\r\n` stays inside the line it terminates. A trailing
/// fragment without a newline is a line of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileContent<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> FileContent<'a> {
    /// Split `text` into terminator-preserving lines.
    ///
    /// Empty text yields no lines.
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(Cow::Borrowed).collect(),
        }
    }

    /// Lines in file order
    #[must_use]
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line to the end of the sequence
    pub fn push(&mut self, line: impl Into<Line<'a>>) {
        self.lines.push(line.into());
    }
}

impl<'a> FromIterator<Line<'a>> for FileContent<'a> {
    fn from_iter<T: IntoIterator<Item = Line<'a>>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FileContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
        }
        Ok(())
    }
}
