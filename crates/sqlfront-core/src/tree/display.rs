//! Compact single-line rendering of parse trees.
//!
//! ```text
//! SQLStatement{ AlterTable{ Token(ALTER) Token(TABLE) TableName(a) ... } Token(;) }
//! ```
//!
//! Name nodes holding their token are shortened to `TableName(lexeme)`.
//! End-of-input errors carry no message.

use core::fmt;

use super::{Construction, Diagnostic, Error, NonTerminal, Terminal};

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonTerminal(node) => fmt::Display::fmt(node, f),
            Self::Terminal(terminal) => fmt::Display::fmt(terminal, f),
            Self::Error(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (true, [Construction::Terminal(terminal)]) =
            (self.kind.is_name(), self.children.as_slice())
        {
            return write!(f, "{}({})", self.kind, Lexeme(terminal));
        }
        write!(f, "{}{{", self.kind)?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", Lexeme(self))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnostic {
            Diagnostic::UnexpectedEof => write!(f, "{}", self.kind()),
            _ => write!(f, "{}({:?})", self.kind(), self.message),
        }
    }
}

struct Lexeme<'a>(&'a Terminal);

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.token() {
            Some(token) => write!(f, "{token}"),
            None => f.write_str("_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Keyword, Span, Token, TokenKind};
    use crate::tree::{Construction, Error, NodeKind, NonTerminal, Terminal};

    #[test]
    fn test_display_notation() {
        let tree: Construction = NonTerminal::new(NodeKind::SqlStatement)
            .with_child(
                NonTerminal::new(NodeKind::AlterTable)
                    .with_child(Token::new(
                        TokenKind::Keyword(Keyword::Alter),
                        "ALTER",
                        Span::new(0, 5),
                    ))
                    .with_child(Error::unexpected_eof()),
            )
            .with_child(Token::eof(6))
            .into();
        assert_eq!(
            tree.to_string(),
            "SQLStatement{ AlterTable{ Token(ALTER) ErrorUnexpectedEOF } Token(EOF) }"
        );
    }

    #[test]
    fn test_display_short_forms() {
        let name = NonTerminal::new(NodeKind::TableName).with_child(Token::new(
            TokenKind::Identifier,
            "t",
            Span::new(0, 1),
        ));
        assert_eq!(name.to_string(), "TableName(t)");
        assert_eq!(Terminal::placeholder().to_string(), "Token(_)");
        assert_eq!(
            Error::missing("missing comma").to_string(),
            r#"ErrorMissing("missing comma")"#
        );
        assert_eq!(NonTerminal::new(NodeKind::Skipped).to_string(), "Skipped{ }");
    }
}
