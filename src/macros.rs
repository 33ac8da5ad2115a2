//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's lexeme (or diagnostic message for errors)
/// * `$position` - Line/column of the token's first character
/// * `$span` - The consumed byte range
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), position, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
            span: $span,
        }
    };
}
