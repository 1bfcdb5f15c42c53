//! Operator precedence levels and token classes used by the grammar.

use crate::lexer::{Keyword, Token, TokenKind};
use crate::tree::NodeKind;

/// Expression precedence levels, loosest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Level {
    Or,
    And,
    Not,
    Equality,
    Comparison,
    Bitwise,
    Additive,
    Multiplicative,
    Concatenation,
    Collate,
    Unary,
    Primary,
}

impl Level {
    /// The level one step tighter than this one.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Or => Self::And,
            Self::And => Self::Not,
            Self::Not => Self::Equality,
            Self::Equality => Self::Comparison,
            Self::Comparison => Self::Bitwise,
            Self::Bitwise => Self::Additive,
            Self::Additive => Self::Multiplicative,
            Self::Multiplicative => Self::Concatenation,
            Self::Concatenation => Self::Collate,
            Self::Collate => Self::Unary,
            Self::Unary | Self::Primary => Self::Primary,
        }
    }

    /// The tree node built for an operator chain at this level.
    pub(crate) const fn node_kind(self) -> NodeKind {
        match self {
            Self::Or => NodeKind::Or,
            Self::And => NodeKind::And,
            Self::Not => NodeKind::Not,
            Self::Equality => NodeKind::Equality,
            Self::Comparison => NodeKind::Comparison,
            Self::Bitwise => NodeKind::Bitwise,
            Self::Additive => NodeKind::Additive,
            Self::Multiplicative => NodeKind::Multiplicative,
            Self::Concatenation => NodeKind::Concatenation,
            Self::Collate => NodeKind::Collate,
            Self::Unary | Self::Primary => NodeKind::Unary,
        }
    }
}

/// Returns the level of a single-token binary operator.
///
/// The keyword operators of the equality level (`IS`, `IN`, `LIKE`, ...)
/// span several tokens and are recognized by the parser itself.
#[must_use]
pub(crate) const fn infix_level(kind: &TokenKind) -> Option<Level> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some(Level::Or),
        TokenKind::Keyword(Keyword::And) => Some(Level::And),
        TokenKind::Eq | TokenKind::EqEq | TokenKind::NotEq | TokenKind::LtGt => {
            Some(Level::Equality)
        }
        TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq => {
            Some(Level::Comparison)
        }
        TokenKind::BitAnd | TokenKind::BitOr | TokenKind::LeftShift | TokenKind::RightShift => {
            Some(Level::Bitwise)
        }
        TokenKind::Plus | TokenKind::Minus => Some(Level::Additive),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(Level::Multiplicative),
        TokenKind::Concat | TokenKind::Arrow | TokenKind::DoubleArrow => {
            Some(Level::Concatenation)
        }
        _ => None,
    }
}

/// Returns true for the prefix operators of the unary level.
#[must_use]
pub(crate) const fn is_unary_operator(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::BitNot | TokenKind::Plus | TokenKind::Minus)
}

/// Returns true for the pattern-matching keywords that take an optional
/// `ESCAPE` clause.
#[must_use]
pub(crate) const fn is_like_operator(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(Keyword::Like | Keyword::Glob | Keyword::Regexp | Keyword::Match)
    )
}

/// Keywords that may stand in for an identifier.
#[must_use]
pub(crate) const fn is_fallback_keyword(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Abort
            | Keyword::Action
            | Keyword::After
            | Keyword::Always
            | Keyword::Analyze
            | Keyword::Asc
            | Keyword::Attach
            | Keyword::Before
            | Keyword::Begin
            | Keyword::By
            | Keyword::Cascade
            | Keyword::Cast
            | Keyword::Column
            | Keyword::Conflict
            | Keyword::Current
            | Keyword::Database
            | Keyword::Deferred
            | Keyword::Desc
            | Keyword::Detach
            | Keyword::Do
            | Keyword::Each
            | Keyword::End
            | Keyword::Exclude
            | Keyword::Exclusive
            | Keyword::Explain
            | Keyword::Fail
            | Keyword::First
            | Keyword::Following
            | Keyword::For
            | Keyword::Generated
            | Keyword::Groups
            | Keyword::If
            | Keyword::Ignore
            | Keyword::Immediate
            | Keyword::Initially
            | Keyword::Instead
            | Keyword::Key
            | Keyword::Last
            | Keyword::Materialized
            | Keyword::No
            | Keyword::Nulls
            | Keyword::Of
            | Keyword::Offset
            | Keyword::Others
            | Keyword::Partition
            | Keyword::Plan
            | Keyword::Pragma
            | Keyword::Preceding
            | Keyword::Query
            | Keyword::Raise
            | Keyword::Range
            | Keyword::Recursive
            | Keyword::Reindex
            | Keyword::Release
            | Keyword::Rename
            | Keyword::Replace
            | Keyword::Restrict
            | Keyword::Row
            | Keyword::Rows
            | Keyword::Savepoint
            | Keyword::Temp
            | Keyword::Ties
            | Keyword::Trigger
            | Keyword::Unbounded
            | Keyword::Vacuum
            | Keyword::View
            | Keyword::Virtual
            | Keyword::With
            | Keyword::Without
    )
}

/// Returns true if the token can name a schema, table, column or function.
#[must_use]
pub(crate) const fn is_name(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Identifier => true,
        TokenKind::Keyword(keyword) => is_fallback_keyword(*keyword),
        _ => false,
    }
}

/// Returns true for `;` and end of input.
#[must_use]
pub(crate) const fn is_statement_end(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Semicolon | TokenKind::Eof)
}

/// Returns true for the keywords that begin a statement.
#[must_use]
pub(crate) const fn starts_statement(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::Explain
                | Keyword::Alter
                | Keyword::Select
                | Keyword::Analyze
                | Keyword::Attach
                | Keyword::Begin
        )
    )
}

/// Tokens that can only appear after a complete expression.
///
/// A primary expression that finds one of these reports the expression as
/// missing instead of skipping input.
#[must_use]
pub(crate) const fn follows_expression(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::RightParen
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Eof
        | TokenKind::Dot
        | TokenKind::Eq
        | TokenKind::EqEq
        | TokenKind::NotEq
        | TokenKind::LtGt
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::LeftShift
        | TokenKind::RightShift
        | TokenKind::BitAnd
        | TokenKind::BitOr
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Concat
        | TokenKind::Arrow
        | TokenKind::DoubleArrow => true,
        TokenKind::Keyword(keyword) => matches!(
            keyword,
            Keyword::As
                | Keyword::And
                | Keyword::Asc
                | Keyword::Between
                | Keyword::Check
                | Keyword::Collate
                | Keyword::Constraint
                | Keyword::Default
                | Keyword::Desc
                | Keyword::Else
                | Keyword::End
                | Keyword::Escape
                | Keyword::Except
                | Keyword::Exclude
                | Keyword::Filter
                | Keyword::Following
                | Keyword::From
                | Keyword::Generated
                | Keyword::Glob
                | Keyword::Group
                | Keyword::Groups
                | Keyword::Having
                | Keyword::In
                | Keyword::Intersect
                | Keyword::Is
                | Keyword::Isnull
                | Keyword::Like
                | Keyword::Limit
                | Keyword::Match
                | Keyword::Notnull
                | Keyword::Nulls
                | Keyword::Offset
                | Keyword::Or
                | Keyword::Order
                | Keyword::Over
                | Keyword::Preceding
                | Keyword::Primary
                | Keyword::Range
                | Keyword::References
                | Keyword::Regexp
                | Keyword::Returning
                | Keyword::Rows
                | Keyword::Then
                | Keyword::Union
                | Keyword::Unique
                | Keyword::When
                | Keyword::Where
                | Keyword::Window
        ),
        _ => false,
    }
}

/// Returns true if a primary expression can begin with this token.
#[must_use]
pub(crate) const fn starts_primary(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Numeric
        | TokenKind::String
        | TokenKind::Blob
        | TokenKind::QuestionVariable
        | TokenKind::ColonVariable
        | TokenKind::AtVariable
        | TokenKind::DollarVariable
        | TokenKind::LeftParen
        | TokenKind::Identifier => true,
        TokenKind::Keyword(
            Keyword::Null
            | Keyword::CurrentDate
            | Keyword::CurrentTime
            | Keyword::CurrentTimestamp
            | Keyword::Case
            | Keyword::Exists,
        ) => true,
        TokenKind::Keyword(keyword) => is_fallback_keyword(*keyword) && !follows_expression(kind),
        _ => false,
    }
}

/// Returns true if an expression can begin with this token.
#[must_use]
pub(crate) const fn starts_expression(kind: &TokenKind) -> bool {
    starts_primary(kind)
        || is_unary_operator(kind)
        || matches!(kind, TokenKind::Keyword(Keyword::Not))
}

/// Token predicate form of [`starts_expression`].
pub(crate) const fn token_starts_expression(token: &Token) -> bool {
    starts_expression(token.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let mut level = Level::Or;
        while level != Level::Primary {
            assert!(level.next() > level);
            level = level.next();
        }
        assert_eq!(Level::Primary.next(), Level::Primary);
    }

    #[test]
    fn test_infix_levels() {
        assert_eq!(infix_level(&TokenKind::Star), Some(Level::Multiplicative));
        assert_eq!(infix_level(&TokenKind::Minus), Some(Level::Additive));
        assert_eq!(infix_level(&TokenKind::DoubleArrow), Some(Level::Concatenation));
        assert_eq!(infix_level(&TokenKind::LtGt), Some(Level::Equality));
        assert_eq!(infix_level(&TokenKind::Keyword(Keyword::And)), Some(Level::And));
        assert_eq!(infix_level(&TokenKind::Keyword(Keyword::Is)), None);
        assert_eq!(infix_level(&TokenKind::Comma), None);
    }

    #[test]
    fn test_fallback_keywords_are_names() {
        assert!(is_name(&TokenKind::Keyword(Keyword::Rename)));
        assert!(is_name(&TokenKind::Keyword(Keyword::Key)));
        assert!(!is_name(&TokenKind::Keyword(Keyword::Select)));
        assert!(!is_name(&TokenKind::String));
    }

    #[test]
    fn test_expression_start_and_follow_are_disjoint() {
        for keyword in Keyword::ALL {
            let kind = TokenKind::Keyword(*keyword);
            assert!(
                !(starts_primary(&kind) && follows_expression(&kind)),
                "{keyword} both starts and follows an expression"
            );
        }
        assert!(starts_expression(&TokenKind::Minus));
        assert!(starts_expression(&TokenKind::Keyword(Keyword::Not)));
        assert!(!starts_expression(&TokenKind::Keyword(Keyword::End)));
        assert!(follows_expression(&TokenKind::Keyword(Keyword::End)));
    }
}
