//! The fixed target of the patch: file path, search text and replacement.
//!
//! Everything the tool does is pinned by the constants in this module. The
//! path is relative to the working directory the binary is started in.
//!
//! # Examples
//!
//! ```
//! use template_fix::target::{contains_target, find_target};
//!
//! let line = "    return `<details${attributes}${isOpen ? ' open' : ''}>\n";
//! assert!(contains_target(line));
//! assert_eq!(find_target(line), Some(4));
//!
//! assert!(!contains_target("return `<details>\n"));
//! ```

use nom::bytes::complete::{tag, take_until};
use nom::{IResult, Parser};

/// File patched by the `template-fix` binary
pub const TARGET_PATH: &str = "src/theme-manager.ts";

/// Literal text a line must contain to be replaced
pub const TARGET_SUBSTRING: &str = "return `<details${attributes}${isOpen ? ' open' : ''}>";

/// Entries written in place of a matching line, in order.
///
/// Each entry ends with a newline, a lone backtick and another newline.
pub const REPLACEMENT_BLOCK: [&str; 3] = [
    "        return `<details${attributes}${isOpen ? ' open' : ''}>\n`\n",
    "        <summary>${summary}</summary>\n`\n",
    "        <div class=\"details-inner\">\n`\n",
];

/// Split a line around the first occurrence of [`TARGET_SUBSTRING`].
///
/// Yields `(rest, (before, matched))`.
fn split_at_target(line: &str) -> IResult<&str, (&str, &str)> {
    (take_until(TARGET_SUBSTRING), tag(TARGET_SUBSTRING)).parse(line)
}

/// Byte offset of the first occurrence of [`TARGET_SUBSTRING`] in `line`
#[must_use]
pub fn find_target(line: &str) -> Option<usize> {
    split_at_target(line)
        .ok()
        .map(|(_, (before, _))| before.len())
}

/// Check whether `line` contains [`TARGET_SUBSTRING`] anywhere
#[must_use]
pub fn contains_target(line: &str) -> bool {
    find_target(line).is_some()
}
