//! Lexical analysis for Coeus source text.
//!
//! This module contains the scanner that converts source code into a flat
//! sequence of classified tokens. It handles:
//!
//! - Tokenization through anchored regex patterns tried in priority order
//! - Keywords, identifiers, numbers, strings, characters and symbols
//! - Preprocessor lines and nested block comments
//! - Line/column tracking through tabs and newlines
//! - Recovery from lexical errors, which become `Error` tokens

pub mod lexer;
pub mod tokens;
pub mod vocabulary;
