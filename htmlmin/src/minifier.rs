//! The template minifier
//!
//! A [`Minifier`] first decides whether its input is safe to touch and only
//! then applies [`minify`]. Unsafe input comes back unchanged, with a warning
//! sent to the minifier's [`Warn`] sink.

use std::{fs, path::Path};

use htmlmin_lexer::{PhpTokenizer, Tokenizer};
use tracing::debug;

use crate::{
    error::{MinifyError, Result},
    guard::{contains_bad_comments, contains_bad_html},
    transform::minify,
    warn::{TracingWarn, Warn},
};

pub(crate) const BAD_HTML: &str = "Contains Bad Html";
pub(crate) const BAD_COMMENTS: &str = "Contains Bad Comments";

/// Options controlling when templates get minified
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Skip the safety checks and always minify
    pub force: bool,
}

/// Minifies templates that pass the safety checks
pub struct Minifier<T = PhpTokenizer, W = TracingWarn> {
    options: Options,
    tokenizer: T,
    warn: W,
}

impl Minifier {
    /// Creates a minifier that lexes PHP and warns through `tracing`
    pub fn new(options: Options) -> Self {
        Self::with_collaborators(options, PhpTokenizer, TracingWarn)
    }
}

impl Default for Minifier {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<T: Tokenizer, W: Warn> Minifier<T, W> {
    /// Creates a minifier with its own tokenizer and warning sink
    pub fn with_collaborators(options: Options, tokenizer: T, warn: W) -> Self {
        Self {
            options,
            tokenizer,
            warn,
        }
    }

    /// Returns the minified template, or `value` unchanged if minifying it
    /// isn't safe.
    pub fn render(&self, value: &str) -> String {
        if !self.should_minify(value) {
            return value.to_string();
        }
        let minified = minify(value);
        debug!(
            before = value.len(),
            after = minified.len(),
            "minified template"
        );
        minified
    }

    /// Reads the template at `path` and renders it.
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let value = fs::read_to_string(path).map_err(|err| MinifyError::read(path, err))?;
        Ok(self.render(&value))
    }

    /// Decides whether `value` may be minified, warning when it may not.
    ///
    /// Markup is checked before comments and the first failing check wins.
    pub fn should_minify(&self, value: &str) -> bool {
        if self.options.force {
            return true;
        }

        if contains_bad_html(value) {
            self.warn.warn(BAD_HTML);
            false
        } else if contains_bad_comments(&self.tokenizer, value) {
            self.warn.warn(BAD_COMMENTS);
            false
        } else {
            true
        }
    }
}
