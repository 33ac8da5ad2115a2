//! Lexical error types.
//!
//! Scanning never fails as a whole. Each malformed construct is reported as
//! an `Error` token in the token stream and, in structured form, as an
//! [`errors::Error`] carrying:
//!
//! - the kind of malformation (`ErrorImpl`)
//! - the position where the offending construct starts
//! - a human-readable tip for display

pub mod errors;
