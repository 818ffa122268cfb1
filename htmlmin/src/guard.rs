//! Checks that decide whether a template is safe to minify
//!
//! These are text heuristics, not an HTML parser. They err on the side of
//! leaving a template untouched.

use std::sync::LazyLock;

use htmlmin_lexer::Tokenizer;
use regex::Regex;

static WHITESPACE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(code|pre|textarea)").unwrap());

// The body class is a set of characters, not the literal `</script>`.
static INLINE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<script[^?>]*>[^</script>]").unwrap());

static SPACED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"value=("|')(.*)( {2,})(.*)("|')"#).unwrap());

/// True if collapsing whitespace could change how the markup renders.
///
/// That is the case for `<code>`, `<pre>` and `<textarea>` elements, for a
/// `<script>` whose body starts with text, and for a `value="..."`
/// attribute holding two or more consecutive spaces.
pub fn contains_bad_html(value: &str) -> bool {
    WHITESPACE_TAG.is_match(value) || INLINE_SCRIPT.is_match(value) || SPACED_VALUE.is_match(value)
}

/// True if the template's code holds a `//` comment.
///
/// Joining lines would pull the code after such a comment into it.
pub fn contains_bad_comments<T: Tokenizer + ?Sized>(tokenizer: &T, value: &str) -> bool {
    tokenizer
        .tokenize(value)
        .iter()
        .any(|token| token.is_comment() && token.value.starts_with("//"))
}
