//! Lexical analysis for Lox.
//!
//! ```
//! use lox_scanner::{scan, TokenKind};
//!
//! let (tokens, errors) = scan("print 1 != 2;");
//! assert!(errors.is_empty());
//! assert_eq!(&TokenKind::BangEqual, tokens[2].kind());
//! assert_eq!(&TokenKind::EndOfFile, tokens.last().unwrap().kind());
//! ```

pub mod error;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{Error, Reporter, Result},
    scanner::Scanner,
    token::{Literal, Token, TokenKind},
};

/// Scans `source` to completion, returning every token (ending with
/// `EndOfFile`) alongside every lexical error found on the way.
pub fn scan(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut errors: Vec<Error> = Vec::new();
    let tokens = Scanner::new(source).scan_tokens(&mut errors);
    (tokens, errors)
}
