//! # sqlfront-core
//!
//! An error-tolerant front end for the SQLite dialect of SQL.
//!
//! This crate provides:
//! - A pull-based lexer that turns every byte of the input into a token,
//!   whitespace, comments and malformed input included
//! - A recursive descent parser with a three-token lookahead that never gives
//!   up: syntax errors become nodes of the parse tree
//! - A parse tree of [`tree::Construction`]s plus a side map of comments
//!
//! ## Parsing
//!
//! ```rust
//! use sqlfront_core::parse;
//!
//! let statements = parse("ALTER TABLE table_a RENAME TO table_b;");
//! assert_eq!(statements.len(), 1);
//! assert_eq!(
//!     statements[0].tree.to_string(),
//!     "SQLStatement{ AlterTable{ Token(ALTER) Token(TABLE) TableName(table_a) \
//!      RenameTo{ Token(RENAME) Token(TO) TableName(table_b) } } Token(;) }",
//! );
//! ```
//!
//! ## Error Recovery
//!
//! Malformed input still produces a complete tree. Callers decide whether to
//! accept it by looking for error nodes:
//!
//! ```rust
//! use sqlfront_core::Parser;
//!
//! let (tree, _comments) = Parser::new("ALTER TABLE RENAME TO table_b;").parse_statement();
//! assert!(tree.has_errors());
//! assert_eq!(tree.errors()[0].message(), "missing table name");
//! ```
//!
//! ## Tokens
//!
//! ```rust
//! use sqlfront_core::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("1_2_").tokenize();
//! assert_eq!(tokens[0].kind(), &TokenKind::Numeric);
//! assert_eq!(tokens[0].text(), "1_2");
//! assert_eq!(tokens[1].kind(), &TokenKind::Identifier);
//! assert!(tokens[2].is_eof());
//! ```

pub mod lexer;
pub mod parser;
pub mod tree;

pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{parse, ParsedStatement, Parser};
pub use tree::{CommentMap, Construction, NodeKind, NonTerminal};
