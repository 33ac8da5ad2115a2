#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::TAB_WIDTH,
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{tokenize, Scanner, DEFAULT_SCANNER};
pub use lexer::tokens::{Token, TokenKind};
pub use lexer::vocabulary::{Vocabulary, DEFAULT_VOCABULARY};

/// A 1-based line/column location in the source text.
///
/// Columns count characters, except that a tab counts as [`TAB_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte range of the source text consumed by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a lexical error as a caret diagram pointing at its position.
pub fn render_error(error: &Error, source: &str, file_name: &str) -> String {
    /*
        Error: UnclosedString (add a closing `"` to the string literal)
        -> main.coeus
          |
        3 | show "hello
          | -----^
    */

    let position = error.get_position();
    let line_text = expand_tabs(get_line(source, position.line).unwrap_or(""));

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    [
        header,
        format!("-> {}", file_name),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line_text_removed.trim_end()),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ]
    .join("\n")
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
