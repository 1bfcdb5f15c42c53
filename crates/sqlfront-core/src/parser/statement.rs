//! Statement grammar.

use super::parser::Parser;
use super::precedence::{is_name, is_statement_end, starts_expression, starts_statement};
use crate::lexer::{Keyword, Token, TokenKind};
use crate::tree::{Error, NodeKind, NonTerminal};

fn starts_result_column(token: &Token) -> bool {
    token.kind() == &TokenKind::Star || starts_expression(token.kind())
}

fn follows_result_columns(token: &Token) -> bool {
    match token.kind() {
        TokenKind::RightParen | TokenKind::Semicolon | TokenKind::Eof => true,
        TokenKind::Keyword(keyword) => matches!(
            keyword,
            Keyword::From
                | Keyword::Where
                | Keyword::Group
                | Keyword::Having
                | Keyword::Order
                | Keyword::Limit
                | Keyword::Window
                | Keyword::Union
                | Keyword::Intersect
                | Keyword::Except
                | Keyword::Returning
        ),
        _ => false,
    }
}

const fn is_alter_action(token: &Token) -> bool {
    matches!(
        token.as_keyword(),
        Some(Keyword::Rename | Keyword::Add | Keyword::Drop)
    )
}

impl Parser<'_> {
    /// `[EXPLAIN [QUERY PLAN]] statement (; | EOF)`
    pub(super) fn statement(&mut self, root: &mut NonTerminal) {
        let explained = self.explain(root);
        match self.current().kind() {
            TokenKind::Keyword(Keyword::Alter) => self.alter_table(root),
            TokenKind::Keyword(Keyword::Select) => self.select(root),
            TokenKind::Keyword(Keyword::Analyze) => self.analyze(root),
            TokenKind::Keyword(Keyword::Attach) => self.attach(root),
            TokenKind::Keyword(Keyword::Begin) => self.begin(root),
            TokenKind::Semicolon | TokenKind::Eof => {
                if explained {
                    root.add_child(Error::missing("missing statement"));
                }
            }
            _ => {
                root.add_child(Error::expecting("expecting statement"));
                self.skip_until(root, |token| {
                    starts_statement(token.kind()) || is_statement_end(token.kind())
                });
                if !is_statement_end(self.current().kind()) {
                    return;
                }
            }
        }
        self.terminator(root);
    }

    fn explain(&mut self, root: &mut NonTerminal) -> bool {
        if !self.eat_keyword(root, Keyword::Explain) {
            return false;
        }
        if self.eat_keyword(root, Keyword::Query) {
            self.expect_keyword(root, Keyword::Plan);
        }
        true
    }

    /// Consumes the `;` or end of input ending the statement, skipping
    /// anything left over before it.
    fn terminator(&mut self, root: &mut NonTerminal) {
        if !is_statement_end(self.current().kind()) {
            root.add_child(Error::expecting("expecting ;"));
            self.skip_until(root, |token| token.kind() == &TokenKind::Semicolon);
        }
        self.bump(root);
    }

    /// `ALTER TABLE [schema .] table action`
    fn alter_table(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::AlterTable);
        self.bump(&mut node);
        self.expect_keyword(&mut node, Keyword::Table);
        // An action keyword followed by anything but `.` or another action
        // keyword starts the action; the table name is missing.
        if is_alter_action(self.current())
            && self.peek(1).kind() != &TokenKind::Dot
            && !is_alter_action(self.peek(1))
        {
            self.missing(&mut node, "table name");
        } else {
            self.qualified_name(&mut node, NodeKind::TableName, "table name");
        }
        self.alter_action(&mut node);
        parent.add_child(node);
    }

    fn alter_action(&mut self, parent: &mut NonTerminal) {
        match self.current().as_keyword() {
            Some(Keyword::Rename) if self.peek_is_keyword(1, Keyword::To) => {
                let mut node = NonTerminal::new(NodeKind::RenameTo);
                self.bump(&mut node);
                self.bump(&mut node);
                self.name(&mut node, NodeKind::TableName, "table name");
                parent.add_child(node);
            }
            Some(Keyword::Rename) => {
                let mut node = NonTerminal::new(NodeKind::RenameColumn);
                self.bump(&mut node);
                self.eat_keyword(&mut node, Keyword::Column);
                self.name(&mut node, NodeKind::ColumnName, "column name");
                self.expect_keyword(&mut node, Keyword::To);
                self.name(&mut node, NodeKind::ColumnName, "column name");
                parent.add_child(node);
            }
            Some(Keyword::Add) => {
                let mut node = NonTerminal::new(NodeKind::AddColumn);
                self.bump(&mut node);
                self.eat_keyword(&mut node, Keyword::Column);
                self.column_definition(&mut node);
                parent.add_child(node);
            }
            Some(Keyword::Drop) => {
                let mut node = NonTerminal::new(NodeKind::DropColumn);
                self.bump(&mut node);
                self.eat_keyword(&mut node, Keyword::Column);
                self.name(&mut node, NodeKind::ColumnName, "column name");
                parent.add_child(node);
            }
            _ if self.at_eof() => self.unexpected_eof(parent),
            _ => {
                parent.add_child(Error::expecting("expecting RENAME, ADD or DROP"));
                self.skip_until(parent, |token| is_statement_end(token.kind()));
            }
        }
    }

    /// `SELECT [DISTINCT | ALL] result-column, ...`
    ///
    /// Only the result columns are parsed; a `FROM` or later clause ends the
    /// statement early.
    pub(super) fn select(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Select);
        self.bump(&mut node);
        if !self.eat_keyword(&mut node, Keyword::Distinct) {
            self.eat_keyword(&mut node, Keyword::All);
        }
        self.comma_list(
            &mut node,
            "result column",
            Self::result_column,
            starts_result_column,
            follows_result_columns,
        );
        parent.add_child(node);
    }

    /// `*`, `table . *` or `expr [[AS] alias]`
    fn result_column(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::ResultColumn);
        if self.at(&TokenKind::Star) {
            self.bump(&mut node);
        } else if is_name(self.current().kind())
            && self.peek(1).kind() == &TokenKind::Dot
            && self.peek(2).kind() == &TokenKind::Star
        {
            self.name(&mut node, NodeKind::TableName, "table name");
            self.bump(&mut node);
            self.bump(&mut node);
        } else {
            self.expr(&mut node);
            self.column_alias(&mut node);
        }
        parent.add_child(node);
    }

    fn column_alias(&mut self, parent: &mut NonTerminal) {
        let explicit = self.eat_keyword(parent, Keyword::As);
        let is_alias = match self.current().kind() {
            TokenKind::Identifier | TokenKind::String => true,
            kind => explicit && is_name(kind),
        };
        if is_alias {
            let mut node = NonTerminal::new(NodeKind::ColumnAlias);
            self.bump(&mut node);
            parent.add_child(node);
        } else if explicit {
            self.missing(parent, "column alias");
        }
    }

    /// `ANALYZE [[schema .] name]`
    fn analyze(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Analyze);
        self.bump(&mut node);
        if is_name(self.current().kind()) {
            self.qualified_name(&mut node, NodeKind::TableName, "table name");
        }
        parent.add_child(node);
    }

    /// `ATTACH [DATABASE] expr AS schema`
    fn attach(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Attach);
        self.bump(&mut node);
        self.eat_keyword(&mut node, Keyword::Database);
        self.expr(&mut node);
        self.expect_keyword(&mut node, Keyword::As);
        self.name(&mut node, NodeKind::SchemaName, "schema name");
        parent.add_child(node);
    }

    /// `BEGIN [DEFERRED | IMMEDIATE | EXCLUSIVE] [TRANSACTION [name]]`
    fn begin(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Begin);
        self.bump(&mut node);
        if matches!(
            self.current().as_keyword(),
            Some(Keyword::Deferred | Keyword::Immediate | Keyword::Exclusive)
        ) {
            self.bump(&mut node);
        }
        if self.eat_keyword(&mut node, Keyword::Transaction) && is_name(self.current().kind()) {
            self.bump(&mut node);
        }
        parent.add_child(node);
    }
}
