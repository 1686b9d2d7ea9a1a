use crate::content::{FileContent, Line};
use crate::target::{REPLACEMENT_BLOCK, contains_target};

/// Result of patching file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched<'a> {
    /// The new line sequence
    pub content: FileContent<'a>,
    /// Number of input lines that contained the target
    pub replaced: usize,
}

/// Replace every line containing the target with the replacement block.
///
/// Lines are visited once, in order. A matching line is dropped, terminator
/// included, and the three entries of
/// [`REPLACEMENT_BLOCK`](crate::target::REPLACEMENT_BLOCK) take its place.
/// Other lines are kept as they are.
#[must_use]
pub fn patch_content<'a>(content: &FileContent<'a>) -> Patched<'a> {
    let mut patched = FileContent::default();
    let mut replaced = 0;

    for line in content.lines() {
        if contains_target(line) {
            replaced += 1;
            for entry in REPLACEMENT_BLOCK {
                patched.push(entry);
            }
        } else {
            patched.push(Line::clone(line));
        }
    }

    Patched {
        content: patched,
        replaced,
    }
}

/// Patch `text` and render the result.
///
/// Returns the new text and the number of replaced lines.
///
/// # Examples
///
/// ```
/// use template_fix::replace::patch_str;
///
/// let (text, replaced) = patch_str("let x = 1;\n");
/// assert_eq!(text, "let x = 1;\n");
/// assert_eq!(replaced, 0);
/// ```
#[must_use]
pub fn patch_str(text: &str) -> (String, usize) {
    let patched = patch_content(&FileContent::parse(text));
    (patched.content.to_string(), patched.replaced)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::target::TARGET_SUBSTRING;
    use proptest::prelude::*;

    /// Generate line content without newlines
    fn arb_line_content() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::char::range(' ', '~'), 0..40)
            .prop_map(|chars| chars.into_iter().collect())
    }

    /// Generate a line that may or may not carry the target
    fn arb_line() -> impl Strategy<Value = (String, bool)> {
        (arb_line_content(), arb_line_content(), any::<bool>()).prop_map(
            |(head, tail, with_target)| {
                if with_target {
                    (format!("{head}{TARGET_SUBSTRING}{tail}"), true)
                } else {
                    (format!("{head}{tail}"), false)
                }
            },
        )
    }

    proptest! {
        /// Text without the target is rewritten unchanged
        #[test]
        fn identity_without_target(
            lines in prop::collection::vec(arb_line_content(), 0..30),
            final_newline in any::<bool>()
        ) {
            let mut text = lines.join("\n");
            if final_newline && !text.is_empty() {
                text.push('\n');
            }
            prop_assume!(!text.contains(TARGET_SUBSTRING));

            let (output, replaced) = patch_str(&text);
            prop_assert_eq!(replaced, 0);
            prop_assert_eq!(output, text);
        }

        /// Each matching line grows the sequence by two entries
        #[test]
        fn entry_count_grows_by_two_per_match(
            lines in prop::collection::vec(arb_line(), 0..30)
        ) {
            let text: String = lines
                .iter()
                .map(|(line, _)| format!("{line}\n"))
                .collect();
            let expected = lines.iter().filter(|(_, hit)| *hit).count();

            let content = FileContent::parse(&text);
            let patched = patch_content(&content);

            prop_assert_eq!(patched.replaced, expected);
            prop_assert_eq!(patched.content.len(), content.len() + 2 * expected);
        }

        /// Unmatched lines survive in their original relative order
        #[test]
        fn unmatched_lines_keep_order(
            lines in prop::collection::vec(arb_line(), 0..30)
        ) {
            let text: String = lines
                .iter()
                .map(|(line, _)| format!("{line}\n"))
                .collect();
            let kept: Vec<String> = lines
                .iter()
                .filter(|(_, hit)| !*hit)
                .map(|(line, _)| format!("{line}\n"))
                .collect();

            let patched = patch_content(&FileContent::parse(&text));
            let survivors: Vec<String> = patched
                .content
                .lines()
                .iter()
                .map(|line| line.to_string())
                .filter(|line| !REPLACEMENT_BLOCK.contains(&line.as_str()))
                .collect();

            prop_assert_eq!(survivors, kept);
        }
    }
}
