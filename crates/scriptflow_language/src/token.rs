//! Token types for Scriptflow scripts.
//!
//! Tokens are the output of the lexer and input to the parser. They are
//! immutable once produced.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The syntactic class of this token.
    pub kind: TokenKind,
    /// The lexeme. String literals hold their content without quotes,
    /// comments hold their trimmed text without the `--` marker.
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns the 1-based line the token starts on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns the 1-based column the token starts at.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns the original source text covered by this token.
    #[must_use]
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}:{}",
            self.kind.name(),
            self.text,
            self.span.line,
            self.span.column
        )
    }
}

/// Token types for Scriptflow scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Word starting with a letter, like `Print` or `com_ext2`
    Identifier,
    /// Run of digits like `42`
    Number,
    /// `"text"`
    StringLiteral,
    /// `label` immediately followed by `(`
    Label,
    /// `if`
    KeywordIf,
    /// `else`
    KeywordElse,
    /// `-- text` up to end of line
    Comment,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// Anything else, including unterminated strings
    Unknown,
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Comment)
    }

    /// Returns true for word-like tokens that need a space between them
    /// when rebuilt inside parentheses.
    #[must_use]
    pub const fn is_alphanumeric(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::KeywordIf | Self::KeywordElse
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::StringLiteral => "string",
            Self::Label => "label",
            Self::KeywordIf => "if",
            Self::KeywordElse => "else",
            Self::Comment => "comment",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Comma => "','",
            Self::Unknown => "unknown",
        }
    }
}
