//! Whitespace and comment minifier for Blade/PHP templates
//!
//! ```rust
//! use htmlmin::{Minifier, Options};
//!
//! let minifier = Minifier::new(Options::default());
//! assert_eq!(minifier.render("<ul>\n    <li>One</li>\n</ul>"), "<ul> <li>One</li> </ul>");
//!
//! // Whitespace inside <pre> matters, so it is left alone.
//! let pre = "<pre>\n  a\n</pre>";
//! assert_eq!(minifier.render(pre), pre);
//! ```

mod error;
mod guard;
mod minifier;
mod transform;
mod warn;

pub use error::{MinifyError, Result};
pub use guard::{contains_bad_comments, contains_bad_html};
pub use htmlmin_lexer::{Lexer, PhpTokenizer, Token, TokenType, Tokenizer};
pub use minifier::{Minifier, Options};
pub use transform::minify;
pub use warn::{TracingWarn, Warn};
