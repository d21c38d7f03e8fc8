//! Block parser for Scriptflow scripts.
//!
//! The parser groups tokens into a flat [`CategorizedTable`]: whole brace
//! blocks for `if`/`else`, and `;`-terminated statements for everything else.
//! Nested control flow is not expanded; an `if` containing other `if`s is a
//! single `If` entry whose value is the complete block text.
//!
//! Parsing is lenient by default. A block whose braces never balance runs to
//! end of input and is still emitted. [`Parser::parse_strict`] reports the
//! same situation as [`ErrorKind::UnbalancedBlock`](scriptflow_foundation::ErrorKind::UnbalancedBlock).

use scriptflow_foundation::{CategorizedTable, Error, Result};

use crate::category;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser over a lexed token slice.
pub struct Parser<'t> {
    /// Tokens being parsed.
    tokens: &'t [Token],
    /// Index of the next unread token.
    position: usize,
    /// First unbalanced delimiter seen, if any.
    unbalanced: Option<Error>,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over the given tokens.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            unbalanced: None,
        }
    }

    /// Parses every token into a categorized table.
    ///
    /// Never fails. Comments are dropped. An empty statement still yields a
    /// `Command` entry whose value is the bare `;`.
    pub fn parse(&mut self) -> CategorizedTable {
        let mut table = CategorizedTable::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::KeywordIf => {
                    let text = self.read_block();
                    table.push(category::IF, text);
                }
                TokenKind::KeywordElse => {
                    let text = self.read_block();
                    table.push(category::ELSE, text);
                }
                TokenKind::Label => {
                    let text = self.read_statement();
                    table.push(category::LABEL, text);
                }
                TokenKind::Comment => {
                    self.position += 1;
                }
                _ => {
                    let text = self.read_statement();
                    table.push(category::COMMAND, text);
                }
            }
        }

        table
    }

    /// Parses like [`parse`](Self::parse) but rejects unbalanced input.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnbalancedBlock`](scriptflow_foundation::ErrorKind::UnbalancedBlock)
    /// naming the first `{` or `(` that was never closed.
    pub fn parse_strict(&mut self) -> Result<CategorizedTable> {
        let table = self.parse();
        match self.unbalanced.take() {
            Some(err) => Err(err),
            None => Ok(table),
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Records the first unbalanced delimiter.
    fn report_unbalanced(&mut self, delimiter: char, span: Span) {
        if self.unbalanced.is_none() {
            self.unbalanced = Some(Error::unbalanced_block(delimiter, span.line, span.column));
        }
    }

    /// Reads an `if` or `else` block up to the brace that closes it.
    ///
    /// Token texts are concatenated with a single space wherever the source
    /// had a gap, so `if (x) { a; }` reads back as written.
    ///
    /// Depth is signed: a `}` before any `{` drives it negative and the block
    /// keeps reading until a later `}` brings it back to zero.
    fn read_block(&mut self) -> String {
        let start = self.peek().map(|t| t.span).unwrap_or_default();
        let mut text = String::new();
        let mut depth: i32 = 0;
        let mut open_braces: Vec<Span> = Vec::new();
        let mut previous: Option<Span> = None;

        while let Some(token) = self.advance() {
            if token.kind.is_trivia() {
                continue;
            }
            if previous.is_some_and(|prev| prev.is_separated_from(&token.span)) {
                text.push(' ');
            }
            text.push_str(&token.text);
            previous = Some(token.span);

            match token.kind {
                TokenKind::OpenBrace => {
                    depth += 1;
                    open_braces.push(token.span);
                }
                TokenKind::CloseBrace => {
                    depth -= 1;
                    open_braces.pop();
                    if depth == 0 {
                        return text;
                    }
                }
                _ => {}
            }
        }

        let span = open_braces.first().copied().unwrap_or(start);
        self.report_unbalanced('{', span);
        text
    }

    /// Reads a statement up to and including its `;`.
    ///
    /// Inside parentheses adjacent word tokens are joined with one space;
    /// elsewhere tokens are concatenated directly.
    fn read_statement(&mut self) -> String {
        let mut text = String::new();
        let mut open_parens: Vec<Span> = Vec::new();
        let mut previous: Option<TokenKind> = None;

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Semicolon {
                break;
            }
            self.position += 1;
            if token.kind.is_trivia() {
                continue;
            }
            if !open_parens.is_empty()
                && previous.is_some_and(TokenKind::is_alphanumeric)
                && token.kind.is_alphanumeric()
            {
                text.push(' ');
            }
            text.push_str(&token.text);
            previous = Some(token.kind);

            match token.kind {
                TokenKind::OpenParen => open_parens.push(token.span),
                TokenKind::CloseParen => {
                    open_parens.pop();
                }
                _ => {}
            }
        }

        if let Some(span) = open_parens.first().copied() {
            self.report_unbalanced('(', span);
        }
        if self.peek().is_some_and(|t| t.kind == TokenKind::Semicolon) {
            self.position += 1;
            text.push(';');
        }
        text
    }
}

/// Lexes and parses `source` leniently.
#[must_use]
pub fn parse(source: &str) -> CategorizedTable {
    let tokens = Lexer::tokenize(source);
    Parser::new(&tokens).parse()
}

/// Lexes and parses `source`, rejecting unbalanced blocks.
///
/// # Errors
/// Returns [`ErrorKind::UnbalancedBlock`](scriptflow_foundation::ErrorKind::UnbalancedBlock)
/// if a `{` or `(` is never closed.
pub fn parse_strict(source: &str) -> Result<CategorizedTable> {
    let tokens = Lexer::tokenize(source);
    Parser::new(&tokens).parse_strict()
}
