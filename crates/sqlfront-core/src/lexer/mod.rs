//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for the SQLite dialect that
//! produces a stream of tokens, trivia included.

mod cursor;
mod error;
mod span;
mod token;
mod tokenizer;

pub use error::{LexError, SourceError};
pub use span::Span;
pub use token::{needs_space, ExtensionKind, Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
