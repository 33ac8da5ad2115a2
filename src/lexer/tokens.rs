use std::fmt::Display;

use crate::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Symbol,
    Preprocessor,
    String,
    Char,
    Comment,
    Error,

    // `#` line whose directive is not recognised
    Unknown,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Preprocessor => "PREPROCESSOR",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error => "ERROR",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified lexeme and where it starts.
///
/// For `Error` tokens `lexeme` holds the diagnostic message; `span` always
/// covers the source text that was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.position,
            self.kind,
            escape_lexeme(&self.lexeme)
        )
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Tokens holding a literal value: numbers, strings and characters.
    pub fn is_literal(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Number, TokenKind::String, TokenKind::Char])
    }
}

// Keeps multi-line lexemes (comments, strings) on one display line.
fn escape_lexeme(lexeme: &str) -> String {
    let mut result = String::with_capacity(lexeme.len());

    for ch in lexeme.chars() {
        match ch {
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(ch),
        }
    }

    result
}
