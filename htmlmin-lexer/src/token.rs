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

//! Token types produced by the template lexer
//!
//! A token is a typed slice of the source. Tokens never own their text, so a
//! token stream is cheap to build and concatenating every `value` gives back
//! the exact input.

/// Types of tokens that can be read from a PHP template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Markup outside of any `<?php ... ?>` island
    InlineHtml,
    /// `<?php` with the single whitespace character that follows it
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` with a directly following newline, if any
    CloseTag,
    Whitespace,
    /// `// ...`, `# ...` or `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,
    /// A `$name` variable
    Variable,
    /// Identifiers and keywords
    Name,
    Number,
    /// Single, double or backtick quoted string
    StringLiteral,
    /// Heredoc or nowdoc, from `<<<` through the closing identifier
    Heredoc,
    /// Any other single character
    Punct,
}

/// A token read from a template
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The type of token
    pub token_type: TokenType,
    /// The token's raw text
    pub value: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType, value: &'a str) -> Self {
        Self { token_type, value }
    }

    /// True for line and block comments, doc comments excluded
    pub fn is_comment(&self) -> bool {
        self.token_type == TokenType::Comment
    }
}
