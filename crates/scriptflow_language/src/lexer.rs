//! Lexer for Scriptflow scripts.
//!
//! The lexer converts script text into a stream of tokens. It never fails:
//! characters it cannot classify become [`TokenKind::Unknown`] tokens, and an
//! unterminated string becomes an `Unknown` token whose text starts with `"`.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Scriptflow source text.
///
/// Produces tokens one at a time through [`next_token`](Self::next_token) or
/// the [`Iterator`] impl. Whitespace is skipped and never produces a token.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let c = self.peek_char()?;
        let (kind, text) = match c {
            '(' => self.single(TokenKind::OpenParen),
            ')' => self.single(TokenKind::CloseParen),
            '{' => self.single(TokenKind::OpenBrace),
            '}' => self.single(TokenKind::CloseBrace),
            ';' => self.single(TokenKind::Semicolon),
            '.' => self.single(TokenKind::Dot),
            ',' => self.single(TokenKind::Comma),
            '"' => self.scan_string(),
            '-' if self.peek_char_n(1) == Some('-') => self.scan_comment(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() => self.scan_word(),
            _ => self.single(TokenKind::Unknown),
        };

        Some(Token::new(
            kind,
            text,
            Span::new(start, self.position, start_line, start_column),
        ))
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        let len = c.len_utf8();
        self.rest = &self.rest[len..];
        self.position += len;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes one character as a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> (TokenKind, String) {
        let text = self.advance().map(String::from).unwrap_or_default();
        (kind, text)
    }

    /// Scans a comment starting with `--` up to the end of the line.
    fn scan_comment(&mut self) -> (TokenKind, String) {
        self.advance();
        self.advance();
        let text = self.take_while(|c| c != '\n' && c != '\r');
        (TokenKind::Comment, text.trim().to_string())
    }

    /// Scans a string literal. There are no escape sequences.
    fn scan_string(&mut self) -> (TokenKind, String) {
        self.advance();
        let content = self.take_while(|c| c != '"');
        if self.advance().is_some() {
            (TokenKind::StringLiteral, content)
        } else {
            (TokenKind::Unknown, format!("\"{content}"))
        }
    }

    /// Scans a run of ASCII digits.
    fn scan_number(&mut self) -> (TokenKind, String) {
        (TokenKind::Number, self.take_while(|c| c.is_ascii_digit()))
    }

    /// Scans an identifier, keyword or label marker.
    fn scan_word(&mut self) -> (TokenKind, String) {
        let text = self.take_while(|c| c.is_alphanumeric() || c == '_');
        let kind = if text.eq_ignore_ascii_case("label") && self.peek_char() == Some('(') {
            TokenKind::Label
        } else if text.eq_ignore_ascii_case("if") {
            TokenKind::KeywordIf
        } else if text.eq_ignore_ascii_case("else") {
            TokenKind::KeywordElse
        } else {
            TokenKind::Identifier
        };
        (kind, text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
