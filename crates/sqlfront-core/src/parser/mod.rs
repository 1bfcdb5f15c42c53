//! SQL Parser
//!
//! A hand-written, error-tolerant recursive descent parser. Expressions are
//! parsed by precedence climbing over eleven operator levels.

mod column;
mod expr;
mod parser;
mod precedence;
mod recovery;
mod statement;

pub use parser::{parse, ParsedStatement, Parser};
