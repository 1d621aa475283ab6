//! Lexer for the KPL teaching language.
//!
//! Converts raw source text into a sequence of classified tokens
//! (keywords, identifiers, numbers, character literals, symbols) with
//! line/column positions, for a downstream parser. Comments `(* ... *)`
//! are skipped; lexical faults carry an error code and the position of
//! the offending input.
//!
//! # Quick start
//!
//! ## Tokenize a source string
//!
//! ```
//! use kpl_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("aaa:=1").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Eof
//!     ]
//! );
//! assert_eq!(tokens[0].lexeme, "aaa");
//! ```
//!
//! ## Pull tokens one at a time
//!
//! ```
//! use kpl_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("BEGIN END.");
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::KwBegin);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::KwEnd);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Period);
//! assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! The first fault ends a [`tokenize`] scan. To keep scanning past
//! faults and collect them instead, use [`tokenize_lenient`].

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod charclass;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use charclass::{CharClass, classify};
pub use cursor::Cursor;
pub use scanner::{LexError, LexErrorKind, Scanner, tokenize, tokenize_lenient};
pub use token::{MAX_IDENT_LEN, Span, Token, TokenKind};
