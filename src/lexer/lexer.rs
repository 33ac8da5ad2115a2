use std::fmt;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::{
    tokens::{Token, TokenKind},
    vocabulary::{Vocabulary, DEFAULT_VOCABULARY},
};

/// Columns a tab advances by.
pub const TAB_WIDTH: usize = 4;

lazy_static! {
    pub static ref DEFAULT_SCANNER: Scanner<'static> = Scanner::new(&DEFAULT_VOCABULARY);

    // Hexadecimal, octal, decimal. The longest match wins, ties go to the earlier form.
    static ref NUMBER_FORMS: Vec<Regex> = vec![
        Regex::new("^0[xX][0-9a-fA-F]+").unwrap(),
        Regex::new("^0[0-7]+").unwrap(),
        Regex::new("^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap(),
    ];

    static ref CHAR_LITERAL: Regex =
        Regex::new(r#"^'([^'\\\n]|\\[nrt0\\'"]|\\x[0-9a-fA-F]{2})'$"#).unwrap();
}

type RegexHandler = fn(&mut Lexer<'_>, &Captures<'_>);

#[derive(Clone)]
struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Turns source text into tokens using a fixed set of classification tables.
///
/// A scanner holds no per-scan state, so one instance can serve any number
/// of scans, including concurrent ones.
#[derive(Clone)]
pub struct Scanner<'v> {
    vocabulary: &'v Vocabulary,
    patterns: Vec<RegexPattern>,
}

impl<'v> Scanner<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Scanner<'v> {
        // Order is priority: the first pattern matching at the cursor wins.
        let mut patterns = vec![
            RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
            RegexPattern { regex: Regex::new("^#(\\S*)[^\\n]*").unwrap(), handler: preprocessor_handler },
            RegexPattern { regex: Regex::new("^/\\*").unwrap(), handler: block_comment_handler },
            RegexPattern { regex: Regex::new(r#"^"(?:\\(?s:.)|[^"\\])*(")?"#).unwrap(), handler: string_handler },
            RegexPattern { regex: Regex::new("^'").unwrap(), handler: char_handler },
            RegexPattern { regex: Regex::new("^[0-9]").unwrap(), handler: number_handler },
            RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: word_handler },
        ];

        if !vocabulary.symbols().is_empty() {
            let alternatives = vocabulary
                .symbols()
                .iter()
                .map(|symbol| regex::escape(symbol))
                .collect::<Vec<String>>()
                .join("|");

            patterns.push(RegexPattern {
                regex: Regex::new(&format!("^(?:{})", alternatives))
                    .expect("escaped symbols always form a valid pattern"),
                handler: symbol_handler,
            });
        }

        Scanner { vocabulary, patterns }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    pub fn scan(&self, source: &str) -> Vec<Token> {
        self.scan_with_diagnostics(source).0
    }

    /// Scans `source`, also returning one structured error per `Error` token.
    pub fn scan_with_diagnostics(&self, source: &str) -> (Vec<Token>, Vec<Error>) {
        debug!("scanning {} bytes", source.len());
        let mut lex = Lexer::new(source, self.vocabulary);

        while let Some(character) = lex.at() {
            let remainder = lex.remainder();
            let mut matched = false;

            for pattern in self.patterns.iter() {
                if let Some(captures) = pattern.regex.captures(remainder) {
                    (pattern.handler)(&mut lex, &captures);
                    matched = true;
                    break;
                }
            }

            if !matched {
                lex.emit_error(
                    ErrorImpl::UnexpectedCharacter { character },
                    character.len_utf8(),
                );
            }
        }

        debug!(
            "scanned {} tokens with {} lexical errors",
            lex.tokens.len(),
            lex.errors.len()
        );
        (lex.tokens, lex.errors)
    }
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Scanner::new(&DEFAULT_VOCABULARY)
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("vocabulary", self.vocabulary)
            .field(
                "patterns",
                &self.patterns.iter().map(|pattern| pattern.regex.as_str()).collect::<Vec<&str>>(),
            )
            .finish()
    }
}

/// Cursor state for a single scan.
struct Lexer<'s> {
    source: &'s str,
    vocabulary: &'s Vocabulary,
    pos: usize,
    line: usize,
    column: usize,
    comment_depth: usize,
    tokens: Vec<Token>,
    errors: Vec<Error>,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s str, vocabulary: &'s Vocabulary) -> Lexer<'s> {
        Lexer {
            source,
            vocabulary,
            pos: 0,
            line: 1,
            column: 1,
            comment_depth: 0,
            tokens: vec![],
            errors: vec![],
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    /// Moves past `n` bytes, updating line and column from the skipped text.
    fn advance_n(&mut self, n: usize) {
        for ch in self.source[self.pos..self.pos + n].chars() {
            match ch {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\t' => self.column += TAB_WIDTH,
                _ => self.column += 1,
            }
        }

        self.pos += n;
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let start = self.pos;
        let position = self.position();
        let lexeme = String::from(&self.source[start..start + len]);

        self.advance_n(len);

        trace!("{} {:?} at {}", kind, lexeme, position);
        self.tokens.push(MK_TOKEN!(kind, lexeme, position, Span { start, end: self.pos }));
    }

    /// Emits an `Error` token for the next `len` bytes, which are consumed.
    fn emit_error(&mut self, error: ErrorImpl, len: usize) {
        let start = self.pos;
        let position = self.position();

        self.advance_n(len);

        debug!("lexical error at {}: {}", position, error);
        self.tokens.push(MK_TOKEN!(
            TokenKind::Error,
            error.to_string(),
            position,
            Span { start, end: self.pos }
        ));
        self.errors.push(Error::new(error, position));
    }
}

fn skip_handler(lexer: &mut Lexer, captures: &Captures) {
    lexer.advance_n(captures[0].len());
}

fn preprocessor_handler(lexer: &mut Lexer, captures: &Captures) {
    let kind = if lexer.vocabulary.is_directive(&captures[1]) {
        TokenKind::Preprocessor
    } else {
        TokenKind::Unknown
    };

    lexer.emit(kind, captures[0].len());
}

fn block_comment_handler(lexer: &mut Lexer, _captures: &Captures) {
    let bytes = lexer.remainder().as_bytes();
    let mut end = 2;

    lexer.comment_depth = 1;
    while end < bytes.len() && lexer.comment_depth > 0 {
        match (bytes[end], bytes.get(end + 1)) {
            (b'/', Some(b'*')) => {
                lexer.comment_depth += 1;
                end += 2;
            }
            (b'*', Some(b'/')) => {
                lexer.comment_depth -= 1;
                end += 2;
            }
            _ => end += 1,
        }
    }

    if lexer.comment_depth > 0 {
        lexer.emit_error(ErrorImpl::UnclosedComment, bytes.len());
    } else {
        lexer.emit(TokenKind::Comment, end);
    }

    lexer.comment_depth = 0;
}

fn string_handler(lexer: &mut Lexer, captures: &Captures) {
    let len = captures[0].len();

    if captures.get(1).is_some() {
        lexer.emit(TokenKind::String, len);
    } else {
        lexer.emit_error(ErrorImpl::UnclosedString, len);
    }
}

fn char_handler(lexer: &mut Lexer, _captures: &Captures) {
    let remainder = lexer.remainder();

    match closing_quote(remainder) {
        Some(end) => {
            let literal = &remainder[..end];

            if CHAR_LITERAL.is_match(literal) {
                lexer.emit(TokenKind::Char, end);
            } else {
                lexer.emit_error(
                    ErrorImpl::InvalidCharacter {
                        literal: String::from(literal),
                    },
                    end,
                );
            }
        }
        // Only the opening quote is consumed; scanning resumes right after it.
        None => lexer.emit_error(ErrorImpl::UnclosedCharacter, 1),
    }
}

/// Byte offset just past the `'` closing the literal opened at the start of
/// `text`, skipping quotes escaped by an unescaped backslash.
fn closing_quote(text: &str) -> Option<usize> {
    let mut escaped = false;

    for (offset, ch) in text.char_indices().skip(1) {
        match ch {
            '\\' if !escaped => escaped = true,
            '\'' if !escaped => return Some(offset + 1),
            _ => escaped = false,
        }
    }

    None
}

fn number_handler(lexer: &mut Lexer, _captures: &Captures) {
    let remainder = lexer.remainder();
    let mut longest = 0;

    for form in NUMBER_FORMS.iter() {
        if let Some(matched) = form.find(remainder) {
            if matched.end() > longest {
                longest = matched.end();
            }
        }
    }

    lexer.emit(TokenKind::Number, longest);
}

fn word_handler(lexer: &mut Lexer, captures: &Captures) {
    let word = &captures[0];

    if lexer.vocabulary.is_keyword(word) {
        lexer.emit(TokenKind::Keyword, word.len());
    } else {
        lexer.emit(TokenKind::Identifier, word.len());
    }
}

fn symbol_handler(lexer: &mut Lexer, captures: &Captures) {
    lexer.emit(TokenKind::Symbol, captures[0].len());
}

/// Scans `source` with the default vocabulary.
pub fn tokenize(source: &str) -> Vec<Token> {
    DEFAULT_SCANNER.scan(source)
}
