//! Column definitions and column constraints.

use super::parser::Parser;
use super::precedence::{is_name, is_statement_end};
use crate::lexer::{Keyword, Token, TokenKind};
use crate::tree::{NodeKind, NonTerminal};

fn token_is_name(token: &Token) -> bool {
    is_name(token.kind())
}

fn follows_column_names(token: &Token) -> bool {
    token.kind() == &TokenKind::RightParen || is_statement_end(token.kind())
}

impl Parser<'_> {
    /// `name [type-name] column-constraint*`
    pub(super) fn column_definition(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::ColumnDefinition);
        self.name(&mut node, NodeKind::ColumnName, "column name");
        if self.at_type_word() {
            self.type_name(&mut node);
        }
        while self.at_column_constraint() {
            self.column_constraint(&mut node);
        }
        parent.add_child(node);
    }

    fn at_type_word(&self) -> bool {
        is_name(self.current().kind()) && !self.at_column_constraint()
    }

    fn at_column_constraint(&self) -> bool {
        match self.current().as_keyword() {
            Some(
                Keyword::Constraint
                | Keyword::Primary
                | Keyword::Null
                | Keyword::Unique
                | Keyword::Check
                | Keyword::Default
                | Keyword::Collate
                | Keyword::References
                | Keyword::As,
            ) => true,
            Some(Keyword::Not) => self.peek_is_keyword(1, Keyword::Null),
            Some(Keyword::Generated) => self.peek_is_keyword(1, Keyword::Always),
            _ => false,
        }
    }

    /// `name+ [( signed-number [, signed-number] )]`
    pub(super) fn type_name(&mut self, parent: &mut NonTerminal) {
        if !self.at_type_word() {
            self.missing(parent, "type name");
            return;
        }
        let mut node = NonTerminal::new(NodeKind::TypeName);
        while self.at_type_word() {
            self.bump(&mut node);
        }
        if self.eat(&mut node, &TokenKind::LeftParen) {
            self.signed_number(&mut node);
            if self.eat(&mut node, &TokenKind::Comma) {
                self.signed_number(&mut node);
            }
            self.close_paren(&mut node);
        }
        parent.add_child(node);
    }

    /// `[+ | -] numeric-literal`
    fn signed_number(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::SignedNumber);
        if matches!(self.current().kind(), TokenKind::Plus | TokenKind::Minus) {
            self.bump(&mut node);
        }
        self.expect(&mut node, &TokenKind::Numeric, "number");
        parent.add_child(node);
    }

    fn column_constraint(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::ColumnConstraint);
        if self.eat_keyword(&mut node, Keyword::Constraint) {
            self.name_token(&mut node, "constraint name");
        }
        match self.current().as_keyword() {
            Some(Keyword::Primary) => {
                self.bump(&mut node);
                self.expect_keyword(&mut node, Keyword::Key);
                if !self.eat_keyword(&mut node, Keyword::Asc) {
                    self.eat_keyword(&mut node, Keyword::Desc);
                }
                self.conflict_clause(&mut node);
                self.eat_keyword(&mut node, Keyword::Autoincrement);
            }
            Some(Keyword::Not) if self.peek_is_keyword(1, Keyword::Null) => {
                self.bump(&mut node);
                self.bump(&mut node);
                self.conflict_clause(&mut node);
            }
            Some(Keyword::Null | Keyword::Unique) => {
                self.bump(&mut node);
                self.conflict_clause(&mut node);
            }
            Some(Keyword::Check) => {
                self.bump(&mut node);
                self.expect(&mut node, &TokenKind::LeftParen, "(");
                self.expr(&mut node);
                self.close_paren(&mut node);
            }
            Some(Keyword::Default) => {
                self.bump(&mut node);
                self.default_value(&mut node);
            }
            Some(Keyword::Collate) => {
                self.bump(&mut node);
                self.collation_name(&mut node);
            }
            Some(Keyword::References) => self.foreign_key_clause(&mut node),
            Some(Keyword::Generated | Keyword::As) => self.generated_column(&mut node),
            _ => self.expecting(&mut node, "expecting column constraint"),
        }
        parent.add_child(node);
    }

    /// `[GENERATED ALWAYS] AS ( expr ) [STORED | VIRTUAL]`
    fn generated_column(&mut self, node: &mut NonTerminal) {
        if self.eat_keyword(node, Keyword::Generated) {
            self.expect_keyword(node, Keyword::Always);
        }
        self.expect_keyword(node, Keyword::As);
        self.expect(node, &TokenKind::LeftParen, "(");
        self.expr(node);
        self.close_paren(node);
        if !self.eat_keyword(node, Keyword::Virtual) && self.current().is_word("STORED") {
            self.bump(node);
        }
    }

    /// `DEFAULT` followed by a signed number, a literal, `( expr )` or a bare
    /// identifier.
    fn default_value(&mut self, node: &mut NonTerminal) {
        match self.current().kind() {
            TokenKind::LeftParen => {
                self.bump(node);
                self.expr(node);
                self.close_paren(node);
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Numeric => self.signed_number(node),
            TokenKind::String
            | TokenKind::Blob
            | TokenKind::Keyword(
                Keyword::Null
                | Keyword::CurrentDate
                | Keyword::CurrentTime
                | Keyword::CurrentTimestamp,
            ) => self.bump(node),
            kind if is_name(kind) => self.bump(node),
            _ => self.expecting(node, "expecting default value"),
        }
    }

    /// `ON CONFLICT (ROLLBACK | ABORT | FAIL | IGNORE | REPLACE)`, if present.
    fn conflict_clause(&mut self, parent: &mut NonTerminal) {
        if !(self.at_keyword(Keyword::On) && self.peek_is_keyword(1, Keyword::Conflict)) {
            return;
        }
        let mut node = NonTerminal::new(NodeKind::ConflictClause);
        self.bump(&mut node);
        self.bump(&mut node);
        match self.current().as_keyword() {
            Some(
                Keyword::Rollback
                | Keyword::Abort
                | Keyword::Fail
                | Keyword::Ignore
                | Keyword::Replace,
            ) => self.bump(&mut node),
            _ => self.expecting(
                &mut node,
                "expecting ROLLBACK, ABORT, FAIL, IGNORE or REPLACE",
            ),
        }
        parent.add_child(node);
    }

    /// `REFERENCES table [( column, ... )]`, then `ON DELETE | UPDATE` actions
    /// and `MATCH name` clauses, then an optional deferrable clause.
    fn foreign_key_clause(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::ForeignKeyClause);
        self.bump(&mut node);
        self.name(&mut node, NodeKind::TableName, "table name");
        if self.eat(&mut node, &TokenKind::LeftParen) {
            self.comma_list(
                &mut node,
                "column name",
                |parser, parent| parser.name(parent, NodeKind::ColumnName, "column name"),
                token_is_name,
                follows_column_names,
            );
            self.close_paren(&mut node);
        }
        loop {
            if self.at_keyword(Keyword::On)
                && matches!(
                    self.peek(1).as_keyword(),
                    Some(Keyword::Delete | Keyword::Update)
                )
            {
                self.bump(&mut node);
                self.bump(&mut node);
                self.foreign_key_action(&mut node);
            } else if self.eat_keyword(&mut node, Keyword::Match) {
                self.name_token(&mut node, "match name");
            } else {
                break;
            }
        }
        let negated = self.at_keyword(Keyword::Not) && self.peek_is_keyword(1, Keyword::Deferrable);
        if negated || self.at_keyword(Keyword::Deferrable) {
            self.eat_keyword(&mut node, Keyword::Not);
            self.bump(&mut node);
            if self.eat_keyword(&mut node, Keyword::Initially)
                && !self.eat_keyword(&mut node, Keyword::Deferred)
                && !self.eat_keyword(&mut node, Keyword::Immediate)
            {
                self.expecting(&mut node, "expecting DEFERRED or IMMEDIATE");
            }
        }
        parent.add_child(node);
    }

    fn foreign_key_action(&mut self, node: &mut NonTerminal) {
        match self.current().as_keyword() {
            Some(Keyword::Set) => {
                self.bump(node);
                if !self.eat_keyword(node, Keyword::Null) && !self.eat_keyword(node, Keyword::Default)
                {
                    self.expecting(node, "expecting NULL or DEFAULT");
                }
            }
            Some(Keyword::Cascade | Keyword::Restrict) => self.bump(node),
            Some(Keyword::No) => {
                self.bump(node);
                self.expect_keyword(node, Keyword::Action);
            }
            _ => self.expecting(
                node,
                "expecting SET NULL, SET DEFAULT, CASCADE, RESTRICT or NO ACTION",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::tree::{NodeKind, NonTerminal};

    fn column(sql: &str) -> String {
        let mut parser = Parser::new(sql);
        let mut root = NonTerminal::new(NodeKind::AddColumn);
        parser.column_definition(&mut root);
        root.to_string()
    }

    #[test]
    fn test_bare_column() {
        assert_eq!(column("id"), "AddColumn{ ColumnDefinition{ ColumnName(id) } }");
    }

    #[test]
    fn test_multi_word_type() {
        assert_eq!(
            column("price UNSIGNED BIG INT"),
            "AddColumn{ ColumnDefinition{ ColumnName(price) TypeName{ Token(UNSIGNED) \
             Token(BIG) Token(INT) } } }"
        );
        assert_eq!(
            column("d DECIMAL(10, -2)"),
            "AddColumn{ ColumnDefinition{ ColumnName(d) TypeName{ Token(DECIMAL) Token(() \
             SignedNumber{ Token(10) } Token(,) SignedNumber{ Token(-) Token(2) } Token()) } } }"
        );
    }

    #[test]
    fn test_constraints() {
        assert_eq!(
            column("id INTEGER CONSTRAINT pk PRIMARY KEY DESC ON CONFLICT ABORT AUTOINCREMENT"),
            "AddColumn{ ColumnDefinition{ ColumnName(id) TypeName{ Token(INTEGER) } \
             ColumnConstraint{ Token(CONSTRAINT) Token(pk) Token(PRIMARY) Token(KEY) Token(DESC) \
             ConflictClause{ Token(ON) Token(CONFLICT) Token(ABORT) } Token(AUTOINCREMENT) } } }"
        );
        assert_eq!(
            column("name TEXT NOT NULL DEFAULT 'x' COLLATE nocase"),
            "AddColumn{ ColumnDefinition{ ColumnName(name) TypeName{ Token(TEXT) } \
             ColumnConstraint{ Token(NOT) Token(NULL) } \
             ColumnConstraint{ Token(DEFAULT) Token('x') } \
             ColumnConstraint{ Token(COLLATE) Token(nocase) } } }"
        );
    }

    #[test]
    fn test_check_and_generated() {
        let rendered = column("n INT CHECK (n > 0) GENERATED ALWAYS AS (n * 2) STORED");
        assert_eq!(
            rendered,
            "AddColumn{ ColumnDefinition{ ColumnName(n) TypeName{ Token(INT) } \
             ColumnConstraint{ Token(CHECK) Token(() Comparison{ ColumnReference{ Token(n) } \
             Token(>) Token(0) } Token()) } \
             ColumnConstraint{ Token(GENERATED) Token(ALWAYS) Token(AS) Token(() \
             Multiplicative{ ColumnReference{ Token(n) } Token(*) Token(2) } Token()) \
             Token(STORED) } } }"
        );
    }

    #[test]
    fn test_foreign_key() {
        let rendered = column(
            "owner INTEGER REFERENCES users (id) ON DELETE SET NULL ON UPDATE NO ACTION \
             NOT DEFERRABLE INITIALLY DEFERRED",
        );
        assert_eq!(
            rendered,
            "AddColumn{ ColumnDefinition{ ColumnName(owner) TypeName{ Token(INTEGER) } \
             ColumnConstraint{ ForeignKeyClause{ Token(REFERENCES) TableName(users) Token(() \
             ColumnName(id) Token()) Token(ON) Token(DELETE) Token(SET) Token(NULL) Token(ON) \
             Token(UPDATE) Token(NO) Token(ACTION) Token(NOT) Token(DEFERRABLE) \
             Token(INITIALLY) Token(DEFERRED) } } } }"
        );
    }

    #[test]
    fn test_missing_type_size() {
        assert_eq!(
            column("v VARCHAR()"),
            r#"AddColumn{ ColumnDefinition{ ColumnName(v) TypeName{ Token(VARCHAR) Token(() SignedNumber{ ErrorMissing("missing number") } Token()) } } }"#
        );
    }
}
