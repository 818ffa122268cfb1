// MIT License
//
// Copyright (c) 2024 Jerome Johnson
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! PHP template tokenizer
//!
//! This crate splits Blade/PHP template source into typed tokens. It is used
//! by the `htmlmin` crate to find comments inside code islands before
//! collapsing a template's newlines.
//!
//! # Example
//!
//! ```rust
//! use htmlmin_lexer::{PhpTokenizer, Tokenizer, TokenType};
//!
//! let tokens = PhpTokenizer.tokenize("<b><?= $name ?></b>");
//! assert_eq!(tokens[1].token_type, TokenType::OpenTagWithEcho);
//! assert_eq!(tokens[3].value, "$name");
//! ```
//!
//! # Module Structure
//!
//! - `token.rs`: Token types
//! - `lexer.rs`: The lexer iterator

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenType};

/// Turns template source into a token stream
///
/// Implementations must be total: malformed input still yields tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, src: &'a str) -> Vec<Token<'a>>;
}

/// Tokenizer for PHP templates, with short open tags disabled
#[derive(Clone, Copy, Debug, Default)]
pub struct PhpTokenizer;

impl Tokenizer for PhpTokenizer {
    fn tokenize<'a>(&self, src: &'a str) -> Vec<Token<'a>> {
        Lexer::new(src).collect()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize<'a>(&self, src: &'a str) -> Vec<Token<'a>> {
        (**self).tokenize(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_matches_lexer() {
        let src = "<ul>\n<?php foreach ($items as $item): ?>\n<li><?= $item ?></li>\n<?php endforeach; ?>\n</ul>";
        assert_eq!(PhpTokenizer.tokenize(src), Lexer::new(src).collect::<Vec<_>>());
    }

    #[test]
    fn tokenizer_by_reference() {
        fn count(tokenizer: impl Tokenizer, src: &str) -> usize {
            tokenizer.tokenize(src).len()
        }
        let tokenizer = PhpTokenizer;
        assert_eq!(count(&tokenizer, "<p>x</p>"), 1);
    }
}
