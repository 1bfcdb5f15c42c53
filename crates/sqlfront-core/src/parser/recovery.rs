//! Error recovery shared by the grammar rules.

use tracing::trace;

use super::parser::{Parser, MAX_EXPR_DEPTH};
use super::precedence::is_statement_end;
use crate::lexer::{Token, TokenKind};
use crate::tree::{Error, NodeKind, NonTerminal};

impl Parser<'_> {
    /// Skips tokens until `sync` holds for the current token.
    ///
    /// Nothing happens if `sync` already holds. At end of input an
    /// end-of-input error is added to `parent`. Otherwise the discarded tokens
    /// are collected into a [`NodeKind::Skipped`] node. Returns true if `sync`
    /// holds afterwards.
    pub(super) fn skip_until(
        &mut self,
        parent: &mut NonTerminal,
        sync: impl Fn(&Token) -> bool,
    ) -> bool {
        if sync(self.current()) {
            return true;
        }
        if self.at_eof() {
            self.unexpected_eof(parent);
            return false;
        }
        let mut skipped = NonTerminal::new(NodeKind::Skipped);
        while !self.at_eof() && !sync(self.current()) {
            self.bump(&mut skipped);
        }
        trace!(
            tokens = skipped.number_of_children(),
            offset = self.current().span().start,
            "skipped tokens"
        );
        parent.add_child(skipped);
        sync(self.current())
    }

    /// Parses `item (, item)*`.
    ///
    /// `label` names an item in diagnostics. A comma where an item should be
    /// yields `ErrorMissing("missing <label>")`; two items in a row yield
    /// `ErrorMissing("missing comma")`. Other tokens are skipped up to the
    /// next item, comma or token for which `follows` holds. The list ends at a
    /// token for which `follows` holds.
    pub(super) fn comma_list(
        &mut self,
        parent: &mut NonTerminal,
        label: &str,
        item: fn(&mut Self, &mut NonTerminal),
        starts_item: fn(&Token) -> bool,
        follows: fn(&Token) -> bool,
    ) {
        let sync = |token: &Token| {
            starts_item(token) || follows(token) || token.kind() == &TokenKind::Comma
        };
        loop {
            if self.at(&TokenKind::Comma) {
                self.missing(parent, label);
                self.bump(parent);
                continue;
            }
            if starts_item(self.current()) {
                item(self, parent);
            } else if self.at_eof() || follows(self.current()) {
                self.missing(parent, label);
                return;
            } else {
                parent.add_child(Error::expecting(format!("expecting {label}")));
                if !self.skip_until(parent, sync) {
                    return;
                }
                continue;
            }

            loop {
                if self.eat(parent, &TokenKind::Comma) {
                    break;
                }
                if self.at_eof() || follows(self.current()) {
                    return;
                }
                if starts_item(self.current()) {
                    parent.add_child(Error::missing("missing comma"));
                    break;
                }
                parent.add_child(Error::expecting("expecting comma"));
                if !self.skip_until(parent, sync) {
                    return;
                }
            }
        }
    }

    /// Consumes the `)` closing a parenthesized construct.
    pub(super) fn close_paren(&mut self, parent: &mut NonTerminal) {
        if self.eat(parent, &TokenKind::RightParen) {
            return;
        }
        if is_statement_end(self.current().kind()) {
            self.missing(parent, ")");
            return;
        }
        parent.add_child(Error::expecting("expecting )"));
        self.skip_until(parent, |token| {
            matches!(token.kind(), TokenKind::RightParen | TokenKind::Semicolon)
        });
        if self.eat(parent, &TokenKind::RightParen) {
            return;
        }
        if self.at_eof() {
            self.unexpected_eof(parent);
        } else {
            parent.add_child(Error::missing("missing )"));
        }
    }

    /// Runs `rule` one expression level deeper, or skips the expression if it
    /// is nested deeper than [`MAX_EXPR_DEPTH`].
    pub(super) fn nested(
        &mut self,
        parent: &mut NonTerminal,
        rule: impl FnOnce(&mut Self, &mut NonTerminal),
    ) {
        if self.depth >= MAX_EXPR_DEPTH {
            self.expecting(parent, "expression nested too deeply");
            self.skip_balanced(parent);
            return;
        }
        self.depth += 1;
        rule(self, parent);
        self.depth -= 1;
    }

    /// Skips up to the `)` closing the innermost open parenthesis, a comma
    /// outside any parenthesis, a `;` or the end of input.
    fn skip_balanced(&mut self, parent: &mut NonTerminal) {
        let mut skipped = NonTerminal::new(NodeKind::Skipped);
        let mut open = 0_usize;
        loop {
            match self.current().kind() {
                TokenKind::Semicolon | TokenKind::Eof => break,
                TokenKind::RightParen | TokenKind::Comma if open == 0 => break,
                TokenKind::RightParen => open -= 1,
                TokenKind::LeftParen => open += 1,
                _ => {}
            }
            self.bump(&mut skipped);
        }
        trace!(
            tokens = skipped.number_of_children(),
            offset = self.current().span().start,
            "skipped nested expression"
        );
        if !skipped.is_empty() {
            parent.add_child(skipped);
        }
    }
}
