use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error found while scanning, with the position of the construct
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The message carried as the lexeme of the matching `Error` token.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnclosedComment => "UnclosedComment",
            ErrorImpl::UnclosedString => "UnclosedString",
            ErrorImpl::UnclosedCharacter => "UnclosedCharacter",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnclosedComment => ErrorTip::Suggestion(String::from(
                "every `/*` needs a matching `*/`, including nested ones",
            )),
            ErrorImpl::UnclosedString => ErrorTip::Suggestion(String::from(
                "add a closing `\"` to the string literal",
            )),
            ErrorImpl::UnclosedCharacter => ErrorTip::Suggestion(String::from(
                "add a closing `'` to the character literal",
            )),
            ErrorImpl::InvalidCharacter { literal } => ErrorTip::Suggestion(format!(
                "`{}` must hold exactly one character or escape sequence, use a string for more",
                literal
            )),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unclosed comment")]
    UnclosedComment,
    #[error("Unclosed string")]
    UnclosedString,
    #[error("Unclosed character")]
    UnclosedCharacter,
    #[error("Invalid character: {literal}")]
    InvalidCharacter { literal: String },
    #[error("Unexpected character: {character}")]
    UnexpectedCharacter { character: char },
}
