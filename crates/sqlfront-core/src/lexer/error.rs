//! Lexer error types.

use serde::Serialize;

/// A malformed token.
///
/// Lexer errors never stop scanning: each one is delivered as a token of kind
/// [`TokenKind::Error`](super::TokenKind::Error) and the lexer carries on with
/// the rest of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum LexError {
    /// The input ended in the middle of a token.
    #[error("{0}: unexpected EOF")]
    UnexpectedEof(&'static str),

    /// A character that cannot start any token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// A blob literal containing something other than hex digits.
    #[error("blob literal must contain only hexadecimal characters")]
    InvalidBlob,

    /// A bind parameter sigil not followed by a name.
    #[error("invalid character after {}", sigil_name(*.0))]
    InvalidVariable(char),
}

const fn sigil_name(sigil: char) -> &'static str {
    match sigil {
        ':' => "colon",
        '@' => "at",
        '$' => "dollar",
        _ => "variable sigil",
    }
}

/// Source text that cannot be lexed at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source bytes are not valid UTF-8.
    #[error("source is not valid UTF-8: invalid byte sequence at offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

impl From<core::str::Utf8Error> for SourceError {
    fn from(err: core::str::Utf8Error) -> Self {
        Self::InvalidUtf8 {
            offset: err.valid_up_to(),
        }
    }
}
