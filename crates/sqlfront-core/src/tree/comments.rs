//! Comments collected while parsing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lexer::Token;

/// Comments keyed by the token they precede.
///
/// Each consumed token owns the comments that appeared between it and the
/// previous non-trivia token. Tokens are identified by the byte offset where
/// they start, which is unique within one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentMap {
    entries: BTreeMap<usize, Vec<Token>>,
}

impl CommentMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the comments preceding `token`. Empty lists are not stored.
    pub(crate) fn insert(&mut self, token: &Token, comments: Vec<Token>) {
        if !comments.is_empty() {
            self.entries
                .entry(token.span().start)
                .or_default()
                .extend(comments);
        }
    }

    /// The comments directly preceding `token`, in source order.
    #[must_use]
    pub fn comments_before(&self, token: &Token) -> &[Token] {
        self.entries
            .get(&token.span().start)
            .map_or(&[], Vec::as_slice)
    }

    /// The number of tokens that carry comments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no comment was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(offset of the owning token, comments)` in source order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Token])> {
        self.entries
            .iter()
            .map(|(offset, comments)| (*offset, comments.as_slice()))
    }

    /// Every collected comment in source order.
    pub fn all(&self) -> impl Iterator<Item = &Token> {
        self.entries.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind};

    #[test]
    fn test_comments_before() {
        let comment = Token::new(TokenKind::SqlComment, "-- hi\n", Span::new(0, 6));
        let select = Token::new(TokenKind::Identifier, "x", Span::new(6, 7));
        let other = Token::new(TokenKind::Identifier, "y", Span::new(8, 9));

        let mut map = CommentMap::new();
        map.insert(&select, vec![comment.clone()]);
        map.insert(&other, Vec::new());

        assert_eq!(map.len(), 1);
        assert_eq!(map.comments_before(&select), &[comment]);
        assert!(map.comments_before(&other).is_empty());
        assert_eq!(map.all().count(), 1);
    }
}
