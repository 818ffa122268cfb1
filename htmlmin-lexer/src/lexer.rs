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

//! PHP template lexing
//!
//! Templates alternate between markup and code islands. Markup is passed
//! through as a single [`TokenType::InlineHtml`] token per run; inside an
//! island the lexer splits out whitespace, comments, strings, heredocs,
//! variables, names, numbers and single punctuation characters.
//!
//! The lexer is total. Unterminated strings, comments and heredocs extend to
//! the end of the input instead of failing, so every input produces a token
//! stream whose values concatenate back to the source.
//!
//! # Examples
//!
//! ```rust
//! use htmlmin_lexer::{Lexer, TokenType};
//!
//! let tokens: Vec<_> = Lexer::new("<p><?php // hi ?></p>").collect();
//! assert_eq!(tokens[0].token_type, TokenType::InlineHtml);
//! assert_eq!(tokens[2].value, "// hi ");
//! assert_eq!(tokens[2].token_type, TokenType::Comment);
//! ```

use crate::token::{Token, TokenType};

/// Iterator over the tokens of a template
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    in_code: bool,
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Length of the newline at the start of `src`, if any
fn newline_len(src: &str) -> Option<usize> {
    if src.starts_with("\r\n") {
        Some(2)
    } else if src.starts_with(['\n', '\r']) {
        Some(1)
    } else {
        None
    }
}

/// Matches an open tag at the start of `src`
fn open_tag(src: &str) -> Option<(TokenType, usize)> {
    if src.starts_with("<?=") {
        return Some((TokenType::OpenTagWithEcho, 3));
    }
    if !src.get(..5)?.eq_ignore_ascii_case("<?php") {
        return None;
    }
    let rest = &src[5..];
    if rest.is_empty() {
        return Some((TokenType::OpenTag, 5));
    }
    if rest.starts_with([' ', '\t']) {
        return Some((TokenType::OpenTag, 6));
    }
    newline_len(rest).map(|len| (TokenType::OpenTag, 5 + len))
}

/// Finds the next open tag, skipping `<?` sequences that don't open code
fn find_open_tag(src: &str) -> Option<usize> {
    src.match_indices("<?")
        .map(|(i, _)| i)
        .find(|&i| open_tag(&src[i..]).is_some())
}

/// Finds the end of a `//` or `#` comment, which stops before a newline or `?>`
fn find_end_of_line_comment(src: &str) -> usize {
    let bytes = src.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' | b'\r' => break,
            b'?' if bytes.get(i + 1) == Some(&b'>') => break,
            _ => i += 1,
        }
    }
    i
}

fn find_end_of_block_comment(src: &str) -> usize {
    src[2..].find("*/").map(|i| i + 4).unwrap_or(src.len())
}

fn find_end_of_string(src: &str, quote: u8) -> usize {
    let bytes = src.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    src.len()
}

fn find_end_of_ident(src: &str) -> usize {
    src.find(|c: char| !is_ident_char(c)).unwrap_or(src.len())
}

fn find_end_of_number(src: &str) -> usize {
    src.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .unwrap_or(src.len())
}

/// Finds the end of a heredoc or nowdoc, or `None` if `src` doesn't open one
fn find_end_of_heredoc(src: &str) -> Option<usize> {
    let label = src.strip_prefix("<<<")?.trim_start_matches([' ', '\t']);
    let quote = label.chars().next().filter(|c| *c == '"' || *c == '\'');
    let label = match quote {
        Some(q) => &label[q.len_utf8()..],
        None => label,
    };
    if !label.starts_with(is_ident_start) {
        return None;
    }
    let ident = &label[..find_end_of_ident(label)];
    let mut tail = &label[ident.len()..];
    if let Some(q) = quote {
        tail = tail.strip_prefix(q)?;
    }
    let body_start = src.len() - tail.len() + newline_len(tail)?;

    let mut line_start = body_start;
    while line_start < src.len() {
        let line = &src[line_start..];
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if let Some(after) = line[indent..].strip_prefix(ident) {
            if !after.starts_with(is_ident_char) {
                return Some(line_start + indent + ident.len());
            }
        }
        match line.find('\n') {
            Some(i) => line_start += i + 1,
            None => break,
        }
    }
    Some(src.len())
}

impl<'a> Lexer<'a> {
    /// Creates a lexer that starts in markup mode
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            in_code: false,
        }
    }

    fn emit(&mut self, token_type: TokenType, len: usize) -> Token<'a> {
        let src = self.src;
        let value = &src[self.pos..self.pos + len];
        self.pos += len;
        Token::new(token_type, value)
    }

    fn markup(&mut self, rest: &'a str) -> Token<'a> {
        if let Some((token_type, len)) = open_tag(rest) {
            self.in_code = true;
            return self.emit(token_type, len);
        }
        let len = find_open_tag(rest).unwrap_or(rest.len());
        self.emit(TokenType::InlineHtml, len)
    }

    fn code(&mut self, rest: &'a str, first: char) -> Token<'a> {
        if let Some(after) = rest.strip_prefix("?>") {
            self.in_code = false;
            let newline = match after.as_bytes() {
                [b'\r', b'\n', ..] => 2,
                [b'\n', ..] => 1,
                _ => 0,
            };
            return self.emit(TokenType::CloseTag, 2 + newline);
        }

        match first {
            c if is_whitespace(c) => {
                let len = rest.find(|c: char| !is_whitespace(c)).unwrap_or(rest.len());
                self.emit(TokenType::Whitespace, len)
            }
            '#' if rest.starts_with("#[") => self.emit(TokenType::Punct, 1),
            '#' => self.emit(TokenType::Comment, find_end_of_line_comment(rest)),
            '/' if rest.starts_with("//") => {
                self.emit(TokenType::Comment, find_end_of_line_comment(rest))
            }
            '/' if rest.starts_with("/*") => {
                let doc = rest.starts_with("/**") && rest[3..].starts_with(is_whitespace);
                let token_type = if doc {
                    TokenType::DocComment
                } else {
                    TokenType::Comment
                };
                self.emit(token_type, find_end_of_block_comment(rest))
            }
            '\'' | '"' | '`' => {
                let len = find_end_of_string(rest, first as u8);
                self.emit(TokenType::StringLiteral, len)
            }
            '$' if rest[1..].starts_with(is_ident_start) => {
                let len = 1 + find_end_of_ident(&rest[1..]);
                self.emit(TokenType::Variable, len)
            }
            '<' if rest.starts_with("<<<") => match find_end_of_heredoc(rest) {
                Some(len) => self.emit(TokenType::Heredoc, len),
                None => self.emit(TokenType::Punct, 1),
            },
            c if is_ident_start(c) => self.emit(TokenType::Name, find_end_of_ident(rest)),
            c if c.is_ascii_digit() => self.emit(TokenType::Number, find_end_of_number(rest)),
            c => self.emit(TokenType::Punct, c.len_utf8()),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let src = self.src;
        let rest = &src[self.pos..];
        let first = rest.chars().next()?;
        Some(if self.in_code {
            self.code(rest, first)
        } else {
            self.markup(rest)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lex(src: &str) -> Vec<(TokenType, &str)> {
        Lexer::new(src).map(|t| (t.token_type, t.value)).collect()
    }

    fn comments(src: &str) -> Vec<&str> {
        Lexer::new(src)
            .filter(|t| t.is_comment())
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn markup_only() {
        assert_eq!(
            lex("<div>\n  <p>Hi</p>\n</div>"),
            vec![(TokenType::InlineHtml, "<div>\n  <p>Hi</p>\n</div>")]
        );
        assert!(lex("").is_empty());
    }

    #[test]
    fn code_island() {
        assert_eq!(
            lex("<p><?php echo $name; ?>\n</p>"),
            vec![
                (TokenType::InlineHtml, "<p>"),
                (TokenType::OpenTag, "<?php "),
                (TokenType::Name, "echo"),
                (TokenType::Whitespace, " "),
                (TokenType::Variable, "$name"),
                (TokenType::Punct, ";"),
                (TokenType::Whitespace, " "),
                (TokenType::CloseTag, "?>\n"),
                (TokenType::InlineHtml, "</p>"),
            ]
        );
    }

    #[test]
    fn open_tags() {
        assert_eq!(lex("<?=$a?>")[0], (TokenType::OpenTagWithEcho, "<?="));
        assert_eq!(lex("<?PHP\r\n1")[0], (TokenType::OpenTag, "<?PHP\r\n"));
        assert_eq!(lex("<?php")[0], (TokenType::OpenTag, "<?php"));
        assert_eq!(
            lex("<?xml version=\"1.0\"?><?phpx"),
            vec![(TokenType::InlineHtml, "<?xml version=\"1.0\"?><?phpx")]
        );
        assert_eq!(
            lex("<?xml?><?php $a")[..2],
            [
                (TokenType::InlineHtml, "<?xml?>"),
                (TokenType::OpenTag, "<?php ")
            ]
        );
    }

    #[test]
    fn line_comments_stop_at_newline_or_close_tag() {
        assert_eq!(comments("<?php // one\n$a; # two ?>"), vec!["// one", "# two "]);
        assert_eq!(
            lex("<?php //x?>y")[2..],
            [(TokenType::CloseTag, "?>"), (TokenType::InlineHtml, "y")]
        );
    }

    #[test]
    fn attributes_are_not_comments() {
        assert!(comments("<?php #[Pure] function f() {}").is_empty());
    }

    #[test]
    fn block_and_doc_comments() {
        let tokens = lex("<?php /* a */ /** b */ /**c*/");
        assert_eq!(tokens[1], (TokenType::Comment, "/* a */"));
        assert_eq!(tokens[3], (TokenType::DocComment, "/** b */"));
        assert_eq!(tokens[5], (TokenType::Comment, "/**c*/"));
        assert_eq!(comments("<?php /* open"), vec!["/* open"]);
    }

    #[test]
    fn comment_markers_inside_strings() {
        assert!(comments(r#"<?php $u = "http://x.y/\"//"; $v = 'a#b'; ?>"#).is_empty());
        assert_eq!(
            lex("<?php 'unterminated // ?>")[1],
            (TokenType::StringLiteral, "'unterminated // ?>")
        );
    }

    #[test]
    fn comment_markers_in_markup() {
        assert!(comments(r#"<a href="//cdn.example.com"># top</a>"#).is_empty());
    }

    #[test]
    fn heredoc_and_nowdoc() {
        let src = "<?php $a = <<<EOT\n// not a comment\n  EOT;\n// real";
        assert_eq!(comments(src), vec!["// real"]);
        assert_eq!(
            lex(src)[5],
            (TokenType::Heredoc, "<<<EOT\n// not a comment\n  EOT")
        );

        let src = "<?php <<<'X'\n# body\nXY\nX\n";
        assert_eq!(lex(src)[1], (TokenType::Heredoc, "<<<'X'\n# body\nXY\nX"));
        assert!(comments(src).is_empty());

        assert_eq!(lex("<?php 1 <<< 2")[3], (TokenType::Punct, "<"));
    }

    #[test]
    fn numbers_and_names() {
        assert_eq!(
            lex("<?php 1_000.5 ünïcode")[1..],
            [
                (TokenType::Number, "1_000.5"),
                (TokenType::Whitespace, " "),
                (TokenType::Name, "ünïcode"),
            ]
        );
    }

    proptest! {
        #[test]
        fn tokens_cover_any_input(src in any::<String>()) {
            let joined: String = Lexer::new(&src).map(|t| t.value).collect();
            prop_assert_eq!(joined, src);
        }

        #[test]
        fn tokens_cover_template_like_input(
            src in "(<\\?php |<\\?=|\\?>|//|/\\*|\\*/|#|\"|'|\\$a|<<<A\n|A;|[a-z \n\r])*"
        ) {
            let tokens: Vec<_> = Lexer::new(&src).collect();
            prop_assert!(tokens.iter().all(|t| !t.value.is_empty()));
            let joined: String = tokens.iter().map(|t| t.value).collect();
            prop_assert_eq!(joined, src);
        }
    }
}
