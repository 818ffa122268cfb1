//! The minifying substitutions
//!
//! Each pattern runs over the output of the one before it, so the order of
//! [`SUBSTITUTIONS`] is part of the behavior: comments go first, and wrapped
//! lines are joined before stray newlines are dropped.

use std::sync::LazyLock;

use regex::Regex;

static SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // HTML comments, except conditional `<!--[if ...]>...<![endif]-->` ones
        (r"(?s)<!--[^\[].*?[^\]]-->", ""),
        (r"<\?php", "<?php "),
        (r"\n([^\t\n\x0B\x0C\r ])", " ${1}"),
        (r"\r", ""),
        (r"\n", ""),
        (r"\t", " "),
        (r" +", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Minifies `value` unconditionally.
///
/// Strips non-conditional HTML comments, puts a space after every `<?php`,
/// joins wrapped lines, drops carriage returns and newlines, and collapses
/// tabs and runs of spaces to a single space.
pub fn minify(value: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(value.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
