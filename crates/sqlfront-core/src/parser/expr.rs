//! Expression grammar.
//!
//! Every binary level parses one operand of the next tighter level and then
//! loops over its own operators, so a chain such as `a + b - c` becomes one
//! flat `Additive` node. A level that finds no operator adds its operand to
//! the parent unchanged.

use super::parser::Parser;
use super::precedence::{
    follows_expression, infix_level, is_like_operator, is_name, is_unary_operator,
    starts_expression, token_starts_expression, Level,
};
use crate::lexer::{Keyword, Token, TokenKind};
use crate::tree::{NodeKind, NonTerminal};

/// Adds `node` to `parent` if it holds an operator chain, or moves its single
/// operand there otherwise.
fn finish(parent: &mut NonTerminal, node: NonTerminal, chained: bool) {
    if chained {
        parent.add_child(node);
    } else {
        parent.append_children(node);
    }
}

fn follows_list(token: &Token) -> bool {
    follows_expression(token.kind()) && token.kind() != &TokenKind::Comma
}

impl Parser<'_> {
    /// Parses an expression into `parent`.
    pub(super) fn expr(&mut self, parent: &mut NonTerminal) {
        self.nested(parent, |parser, parent| parser.level(parent, Level::Or));
    }

    /// Parses a comma-separated list of expressions.
    pub(super) fn expression_list(&mut self, parent: &mut NonTerminal) {
        self.comma_list(
            parent,
            "expression",
            Self::expr,
            token_starts_expression,
            follows_list,
        );
    }

    pub(super) fn level(&mut self, parent: &mut NonTerminal, level: Level) {
        match level {
            Level::Not => self.not_expr(parent),
            Level::Equality => self.equality(parent),
            Level::Collate => self.collate(parent),
            Level::Unary => self.unary(parent),
            Level::Primary => self.primary(parent),
            _ => self.binary(parent, level),
        }
    }

    fn binary(&mut self, parent: &mut NonTerminal, level: Level) {
        let mut node = NonTerminal::new(level.node_kind());
        self.level(&mut node, level.next());
        let mut chained = false;
        while infix_level(self.current().kind()) == Some(level) {
            chained = true;
            self.bump(&mut node);
            self.level(&mut node, level.next());
        }
        finish(parent, node, chained);
    }

    /// `NOT expr`, except `NOT EXISTS` which is a primary.
    fn not_expr(&mut self, parent: &mut NonTerminal) {
        if self.at_keyword(Keyword::Not) && !self.peek_is_keyword(1, Keyword::Exists) {
            let mut node = NonTerminal::new(NodeKind::Not);
            self.bump(&mut node);
            self.nested(&mut node, Self::not_expr);
            parent.add_child(node);
        } else {
            self.level(parent, Level::Equality);
        }
    }

    fn equality(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Equality);
        self.level(&mut node, Level::Comparison);
        let mut chained = false;
        while self.equality_operator(&mut node) {
            chained = true;
        }
        finish(parent, node, chained);
    }

    /// Parses one operator of the equality level and its right-hand side.
    ///
    /// `ESCAPE` binds to the pattern operator it follows.
    fn equality_operator(&mut self, node: &mut NonTerminal) -> bool {
        let negated = self.at_keyword(Keyword::Not)
            && matches!(
                self.peek(1).as_keyword(),
                Some(
                    Keyword::Null
                        | Keyword::Between
                        | Keyword::In
                        | Keyword::Like
                        | Keyword::Glob
                        | Keyword::Regexp
                        | Keyword::Match
                )
            );
        let operator = (if negated { self.peek(1) } else { self.current() })
            .kind()
            .clone();

        match operator {
            TokenKind::Eq | TokenKind::EqEq | TokenKind::NotEq | TokenKind::LtGt => {
                self.bump(node);
                self.level(node, Level::Comparison);
            }
            TokenKind::Keyword(Keyword::Isnull | Keyword::Notnull) => self.bump(node),
            TokenKind::Keyword(Keyword::Null) if negated => {
                self.bump(node);
                self.bump(node);
            }
            TokenKind::Keyword(Keyword::Is) => {
                self.bump(node);
                self.eat_keyword(node, Keyword::Not);
                if self.eat_keyword(node, Keyword::Distinct) {
                    self.expect_keyword(node, Keyword::From);
                }
                self.level(node, Level::Comparison);
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.bump_negated(node, negated);
                self.level(node, Level::Comparison);
                self.expect_keyword(node, Keyword::And);
                self.level(node, Level::Comparison);
            }
            TokenKind::Keyword(Keyword::In) => {
                self.bump_negated(node, negated);
                self.in_target(node);
            }
            ref kind if is_like_operator(kind) => {
                self.bump_negated(node, negated);
                self.level(node, Level::Comparison);
                if self.eat_keyword(node, Keyword::Escape) {
                    self.level(node, Level::Comparison);
                }
            }
            _ => return false,
        }
        true
    }

    /// Consumes an operator keyword and the `NOT` before it, if any.
    fn bump_negated(&mut self, node: &mut NonTerminal, negated: bool) {
        if negated {
            self.bump(node);
        }
        self.bump(node);
    }

    /// The right-hand side of `IN`: a subquery, a parenthesized list or a
    /// table name.
    fn in_target(&mut self, parent: &mut NonTerminal) {
        if self.at(&TokenKind::LeftParen) {
            if self.peek_is_keyword(1, Keyword::Select) {
                self.subquery(parent);
                return;
            }
            let mut list = NonTerminal::new(NodeKind::Parenthesized);
            self.bump(&mut list);
            if !self.at(&TokenKind::RightParen) {
                self.expression_list(&mut list);
            }
            self.close_paren(&mut list);
            parent.add_child(list);
        } else if is_name(self.current().kind()) {
            self.qualified_name(parent, NodeKind::TableName, "table name");
        } else {
            self.expecting(parent, "expecting ( or table name");
        }
    }

    /// Postfix `COLLATE name`.
    fn collate(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Collate);
        self.level(&mut node, Level::Unary);
        let mut chained = false;
        while self.at_keyword(Keyword::Collate) {
            chained = true;
            self.bump(&mut node);
            self.collation_name(&mut node);
        }
        finish(parent, node, chained);
    }

    pub(super) fn collation_name(&mut self, parent: &mut NonTerminal) {
        if self.at(&TokenKind::String) {
            self.bump(parent);
        } else {
            self.name_token(parent, "collation name");
        }
    }

    fn unary(&mut self, parent: &mut NonTerminal) {
        if is_unary_operator(self.current().kind()) {
            let mut node = NonTerminal::new(NodeKind::Unary);
            self.bump(&mut node);
            self.nested(&mut node, Self::unary);
            parent.add_child(node);
        } else {
            self.primary(parent);
        }
    }

    fn primary(&mut self, parent: &mut NonTerminal) {
        let kind = self.current().kind().clone();
        let call = self.peek(1).kind() == &TokenKind::LeftParen;
        match kind {
            TokenKind::LeftParen => self.parenthesized(parent),
            TokenKind::Keyword(Keyword::Case) => self.case(parent),
            TokenKind::Keyword(Keyword::Exists) => self.exists(parent),
            TokenKind::Keyword(Keyword::Not) if self.peek_is_keyword(1, Keyword::Exists) => {
                self.exists(parent);
            }
            TokenKind::Keyword(Keyword::Cast) if call => self.cast(parent),
            TokenKind::Keyword(Keyword::Raise) if call => self.raise(parent),
            ref kind if is_name(kind) && !follows_expression(kind) => {
                if call {
                    self.function_call(parent);
                } else {
                    self.column_reference(parent);
                }
            }
            TokenKind::Numeric
            | TokenKind::String
            | TokenKind::Blob
            | TokenKind::QuestionVariable
            | TokenKind::ColonVariable
            | TokenKind::AtVariable
            | TokenKind::DollarVariable
            | TokenKind::Keyword(
                Keyword::Null
                | Keyword::CurrentDate
                | Keyword::CurrentTime
                | Keyword::CurrentTimestamp,
            ) => self.bump(parent),
            _ => self.missing_expression(parent),
        }
    }

    /// Reports a missing primary expression.
    ///
    /// A token that can only follow an expression means the expression was
    /// left out. Anything else is skipped up to the next token that can start
    /// or follow an expression, and parsing resumes there.
    fn missing_expression(&mut self, parent: &mut NonTerminal) {
        if self.at_eof() || follows_expression(self.current().kind()) {
            self.missing(parent, "expression");
            return;
        }
        self.expecting(parent, "expecting expression");
        let resumed = self.skip_until(parent, |token| {
            starts_expression(token.kind()) || follows_expression(token.kind())
        });
        if resumed && starts_expression(self.current().kind()) {
            self.level(parent, Level::Not);
        }
    }

    /// `name [. name [. name]]`
    fn column_reference(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::ColumnReference);
        self.bump(&mut node);
        for _ in 0..2 {
            if !self.eat(&mut node, &TokenKind::Dot) {
                break;
            }
            if is_name(self.current().kind()) {
                self.bump(&mut node);
            } else {
                self.missing(&mut node, "column name");
                break;
            }
        }
        parent.add_child(node);
    }

    /// `name ( [DISTINCT] args [ORDER BY ...] | * ) [FILTER ...] [OVER ...]`
    fn function_call(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::FunctionCall);
        self.bump(&mut node);
        self.bump(&mut node);
        if !self.eat(&mut node, &TokenKind::Star) && !self.at(&TokenKind::RightParen) {
            self.eat_keyword(&mut node, Keyword::Distinct);
            self.expression_list(&mut node);
            if self.at_keyword(Keyword::Order) {
                self.order_by(&mut node);
            }
        }
        self.close_paren(&mut node);
        if self.at_keyword(Keyword::Filter) {
            self.filter_clause(&mut node);
        }
        if self.at_keyword(Keyword::Over) {
            self.over_clause(&mut node);
        }
        parent.add_child(node);
    }

    /// `FILTER ( WHERE expr )`
    fn filter_clause(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::FilterClause);
        self.bump(&mut node);
        self.expect(&mut node, &TokenKind::LeftParen, "(");
        self.expect_keyword(&mut node, Keyword::Where);
        self.expr(&mut node);
        self.close_paren(&mut node);
        parent.add_child(node);
    }

    /// `OVER window-name` or `OVER ( window-definition )`
    fn over_clause(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::OverClause);
        self.bump(&mut node);
        if self.eat(&mut node, &TokenKind::LeftParen) {
            self.window_definition(&mut node);
            self.close_paren(&mut node);
        } else if is_name(self.current().kind()) {
            self.bump(&mut node);
        } else {
            self.expecting(&mut node, "expecting window name or (");
        }
        parent.add_child(node);
    }

    fn window_definition(&mut self, parent: &mut NonTerminal) {
        if self.at(&TokenKind::Identifier) {
            self.bump(parent);
        }
        if self.at_keyword(Keyword::Partition) {
            let mut node = NonTerminal::new(NodeKind::PartitionBy);
            self.bump(&mut node);
            self.expect_keyword(&mut node, Keyword::By);
            self.expression_list(&mut node);
            parent.add_child(node);
        }
        if self.at_keyword(Keyword::Order) {
            self.order_by(parent);
        }
        if matches!(
            self.current().as_keyword(),
            Some(Keyword::Range | Keyword::Rows | Keyword::Groups)
        ) {
            self.frame_spec(parent);
        }
    }

    /// `ORDER BY ordering-term, ...`
    pub(super) fn order_by(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::OrderBy);
        self.bump(&mut node);
        self.expect_keyword(&mut node, Keyword::By);
        self.comma_list(
            &mut node,
            "ordering term",
            Self::ordering_term,
            token_starts_expression,
            follows_list,
        );
        parent.add_child(node);
    }

    /// `expr [ASC | DESC] [NULLS FIRST | NULLS LAST]`
    fn ordering_term(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::OrderingTerm);
        self.expr(&mut node);
        if !self.eat_keyword(&mut node, Keyword::Asc) {
            self.eat_keyword(&mut node, Keyword::Desc);
        }
        if self.eat_keyword(&mut node, Keyword::Nulls)
            && !self.eat_keyword(&mut node, Keyword::First)
            && !self.eat_keyword(&mut node, Keyword::Last)
        {
            self.expecting(&mut node, "expecting FIRST or LAST");
        }
        parent.add_child(node);
    }

    /// `RANGE | ROWS | GROUPS` then a bound or `BETWEEN bound AND bound`, then
    /// an optional `EXCLUDE`.
    fn frame_spec(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::FrameSpec);
        self.bump(&mut node);
        if self.eat_keyword(&mut node, Keyword::Between) {
            self.frame_bound(&mut node);
            self.expect_keyword(&mut node, Keyword::And);
            self.frame_bound(&mut node);
        } else {
            self.frame_bound(&mut node);
        }
        if self.at_keyword(Keyword::Exclude) {
            self.frame_exclude(&mut node);
        }
        parent.add_child(node);
    }

    fn frame_bound(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::FrameBound);
        if self.at_keyword(Keyword::Current) && self.peek_is_keyword(1, Keyword::Row) {
            self.bump(&mut node);
            self.bump(&mut node);
        } else {
            if !self.eat_keyword(&mut node, Keyword::Unbounded) {
                self.level(&mut node, Level::Not);
            }
            if !self.eat_keyword(&mut node, Keyword::Preceding)
                && !self.eat_keyword(&mut node, Keyword::Following)
            {
                self.expecting(&mut node, "expecting PRECEDING or FOLLOWING");
            }
        }
        parent.add_child(node);
    }

    fn frame_exclude(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::FrameExclude);
        self.bump(&mut node);
        match self.current().as_keyword() {
            Some(Keyword::No) => {
                self.bump(&mut node);
                self.expect_keyword(&mut node, Keyword::Others);
            }
            Some(Keyword::Current) => {
                self.bump(&mut node);
                self.expect_keyword(&mut node, Keyword::Row);
            }
            Some(Keyword::Group | Keyword::Ties) => self.bump(&mut node),
            _ => self.expecting(&mut node, "expecting NO OTHERS, CURRENT ROW, GROUP or TIES"),
        }
        parent.add_child(node);
    }

    /// `( expr, ... )` or a subquery.
    fn parenthesized(&mut self, parent: &mut NonTerminal) {
        if self.peek_is_keyword(1, Keyword::Select) {
            self.subquery(parent);
            return;
        }
        let mut node = NonTerminal::new(NodeKind::Parenthesized);
        self.bump(&mut node);
        self.expression_list(&mut node);
        self.close_paren(&mut node);
        parent.add_child(node);
    }

    /// `( SELECT ... )`
    pub(super) fn subquery(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Subquery);
        self.expect(&mut node, &TokenKind::LeftParen, "(");
        if self.at_keyword(Keyword::Select) {
            self.select(&mut node);
        } else {
            self.missing(&mut node, "SELECT");
        }
        self.close_paren(&mut node);
        parent.add_child(node);
    }

    /// `CAST ( expr AS type-name )`
    fn cast(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Cast);
        self.bump(&mut node);
        self.bump(&mut node);
        self.expr(&mut node);
        self.expect_keyword(&mut node, Keyword::As);
        self.type_name(&mut node);
        self.close_paren(&mut node);
        parent.add_child(node);
    }

    /// `[NOT] EXISTS ( SELECT ... )`
    fn exists(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Exists);
        self.eat_keyword(&mut node, Keyword::Not);
        self.bump(&mut node);
        self.subquery(&mut node);
        parent.add_child(node);
    }

    /// `CASE [expr] WHEN expr THEN expr ... [ELSE expr] END`
    fn case(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Case);
        self.bump(&mut node);
        if !self.at_keyword(Keyword::When) && !self.at_keyword(Keyword::End) {
            self.expr(&mut node);
        }
        if !self.at_keyword(Keyword::When) {
            self.missing(&mut node, "WHEN");
        }
        while self.at_keyword(Keyword::When) {
            let mut arm = NonTerminal::new(NodeKind::When);
            self.bump(&mut arm);
            self.expr(&mut arm);
            self.expect_keyword(&mut arm, Keyword::Then);
            self.expr(&mut arm);
            node.add_child(arm);
        }
        if self.at_keyword(Keyword::Else) {
            let mut arm = NonTerminal::new(NodeKind::Else);
            self.bump(&mut arm);
            self.expr(&mut arm);
            node.add_child(arm);
        }
        self.expect_keyword(&mut node, Keyword::End);
        parent.add_child(node);
    }

    /// `RAISE ( IGNORE )` or `RAISE ( ROLLBACK | ABORT | FAIL , expr )`
    fn raise(&mut self, parent: &mut NonTerminal) {
        let mut node = NonTerminal::new(NodeKind::Raise);
        self.bump(&mut node);
        self.bump(&mut node);
        match self.current().as_keyword() {
            Some(Keyword::Ignore) => self.bump(&mut node),
            Some(Keyword::Rollback | Keyword::Abort | Keyword::Fail) => {
                self.bump(&mut node);
                self.expect(&mut node, &TokenKind::Comma, "comma");
                self.expr(&mut node);
            }
            _ => self.expecting(&mut node, "expecting IGNORE, ROLLBACK, ABORT or FAIL"),
        }
        self.close_paren(&mut node);
        parent.add_child(node);
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::tree::{NodeKind, NonTerminal};

    fn expr(sql: &str) -> String {
        let mut parser = Parser::new(sql);
        let mut root = NonTerminal::new(NodeKind::ResultColumn);
        parser.expr(&mut root);
        root.to_string()
    }

    #[test]
    fn test_single_operand_is_not_wrapped() {
        assert_eq!(expr("1"), "ResultColumn{ Token(1) }");
        assert_eq!(expr("a"), "ResultColumn{ ColumnReference{ Token(a) } }");
    }

    #[test]
    fn test_left_associative_chain_is_flat() {
        assert_eq!(
            expr("1 + 2 - 3"),
            "ResultColumn{ Additive{ Token(1) Token(+) Token(2) Token(-) Token(3) } }"
        );
    }

    #[test]
    fn test_precedence_nesting() {
        assert_eq!(
            expr("1 + 2 * 3"),
            "ResultColumn{ Additive{ Token(1) Token(+) Multiplicative{ Token(2) Token(*) Token(3) } } }"
        );
        assert_eq!(
            expr("a OR b AND NOT c"),
            "ResultColumn{ Or{ ColumnReference{ Token(a) } Token(OR) And{ ColumnReference{ Token(b) } \
             Token(AND) Not{ Token(NOT) ColumnReference{ Token(c) } } } } }"
        );
    }

    #[test]
    fn test_unary_and_collate() {
        assert_eq!(
            expr("-~1"),
            "ResultColumn{ Unary{ Token(-) Unary{ Token(~) Token(1) } } }"
        );
        assert_eq!(
            expr("'a' COLLATE nocase"),
            "ResultColumn{ Collate{ Token('a') Token(COLLATE) Token(nocase) } }"
        );
    }

    #[test]
    fn test_equality_family() {
        assert_eq!(
            expr("a IS NOT DISTINCT FROM 1"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(IS) Token(NOT) \
             Token(DISTINCT) Token(FROM) Token(1) } }"
        );
        assert_eq!(
            expr("a NOT BETWEEN 1 AND 2"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(NOT) Token(BETWEEN) \
             Token(1) Token(AND) Token(2) } }"
        );
        assert_eq!(
            expr("a NOT NULL"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(NOT) Token(NULL) } }"
        );
        assert_eq!(
            expr("a ISNULL"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(ISNULL) } }"
        );
    }

    #[test]
    fn test_escape_binds_to_like() {
        assert_eq!(
            expr("a LIKE 'x%' ESCAPE '!' = 1"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(LIKE) Token('x%') \
             Token(ESCAPE) Token('!') Token(=) Token(1) } }"
        );
    }

    #[test]
    fn test_in_forms() {
        assert_eq!(
            expr("a IN (1, 2)"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(IN) \
             Parenthesized{ Token(() Token(1) Token(,) Token(2) Token()) } } }"
        );
        assert_eq!(
            expr("a NOT IN ()"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(NOT) Token(IN) \
             Parenthesized{ Token(() Token()) } } }"
        );
        assert_eq!(
            expr("a IN main.t"),
            "ResultColumn{ Equality{ ColumnReference{ Token(a) } Token(IN) \
             SchemaName(main) Token(.) TableName(t) } }"
        );
    }

    #[test]
    fn test_json_operators() {
        assert_eq!(
            expr("j -> '$.a' ->> 'b'"),
            "ResultColumn{ Concatenation{ ColumnReference{ Token(j) } Token(->) Token('$.a') \
             Token(->>) Token('b') } }"
        );
    }

    #[test]
    fn test_column_reference_parts() {
        assert_eq!(
            expr("s.t.c"),
            "ResultColumn{ ColumnReference{ Token(s) Token(.) Token(t) Token(.) Token(c) } }"
        );
        assert_eq!(
            expr("t."),
            r#"ResultColumn{ ColumnReference{ Token(t) Token(.) ErrorUnexpectedEOF } }"#
        );
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(
            expr("count(*)"),
            "ResultColumn{ FunctionCall{ Token(count) Token(() Token(*) Token()) } }"
        );
        assert_eq!(
            expr("count(DISTINCT a) FILTER (WHERE a > 0)"),
            "ResultColumn{ FunctionCall{ Token(count) Token(() Token(DISTINCT) \
             ColumnReference{ Token(a) } Token()) FilterClause{ Token(FILTER) Token(() \
             Token(WHERE) Comparison{ ColumnReference{ Token(a) } Token(>) Token(0) } Token()) } } }"
        );
        assert_eq!(
            expr("replace(a, 'x', 'y')"),
            "ResultColumn{ FunctionCall{ Token(replace) Token(() ColumnReference{ Token(a) } \
             Token(,) Token('x') Token(,) Token('y') Token()) } }"
        );
    }

    #[test]
    fn test_window_clause() {
        let rendered = expr(
            "sum(x) OVER (PARTITION BY g ORDER BY t DESC NULLS LAST \
             ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW EXCLUDE NO OTHERS)",
        );
        assert!(rendered.contains("OverClause{ Token(OVER) Token(() PartitionBy{"));
        assert!(rendered.contains(
            "OrderingTerm{ ColumnReference{ Token(t) } Token(DESC) Token(NULLS) Token(LAST) }"
        ));
        assert!(rendered.contains(
            "FrameSpec{ Token(ROWS) Token(BETWEEN) FrameBound{ Token(UNBOUNDED) Token(PRECEDING) } \
             Token(AND) FrameBound{ Token(CURRENT) Token(ROW) } \
             FrameExclude{ Token(EXCLUDE) Token(NO) Token(OTHERS) } }"
        ));
        assert!(!rendered.contains("Error"));
    }

    #[test]
    fn test_frame_bound_with_offset() {
        let rendered = expr("sum(x) OVER w");
        assert_eq!(
            rendered,
            "ResultColumn{ FunctionCall{ Token(sum) Token(() ColumnReference{ Token(x) } Token()) \
             OverClause{ Token(OVER) Token(w) } } }"
        );
        let rendered = expr("sum(x) OVER (RANGE 1 PRECEDING)");
        assert!(rendered.contains("FrameBound{ Token(1) Token(PRECEDING) }"));
    }

    #[test]
    fn test_cast_case_exists_raise() {
        assert_eq!(
            expr("CAST(a AS VARCHAR(10))"),
            "ResultColumn{ Cast{ Token(CAST) Token(() ColumnReference{ Token(a) } Token(AS) \
             TypeName{ Token(VARCHAR) Token(() SignedNumber{ Token(10) } Token()) } Token()) } }"
        );
        assert_eq!(
            expr("CASE a WHEN 1 THEN 'x' ELSE 'y' END"),
            "ResultColumn{ Case{ Token(CASE) ColumnReference{ Token(a) } When{ Token(WHEN) \
             Token(1) Token(THEN) Token('x') } Else{ Token(ELSE) Token('y') } Token(END) } }"
        );
        assert_eq!(
            expr("NOT EXISTS (SELECT 1)"),
            "ResultColumn{ Exists{ Token(NOT) Token(EXISTS) Subquery{ Token(() \
             Select{ Token(SELECT) ResultColumn{ Token(1) } } Token()) } } }"
        );
        assert_eq!(
            expr("RAISE(ABORT, 'no')"),
            "ResultColumn{ Raise{ Token(RAISE) Token(() Token(ABORT) Token(,) Token('no') Token()) } }"
        );
    }

    #[test]
    fn test_missing_expression_before_follow_token() {
        assert_eq!(
            expr("1 + )"),
            r#"ResultColumn{ Additive{ Token(1) Token(+) ErrorMissing("missing expression") } }"#
        );
    }

    #[test]
    fn test_noise_is_skipped_then_parsing_resumes() {
        assert_eq!(
            expr("1 + SELECT 2"),
            r#"ResultColumn{ Additive{ Token(1) Token(+) ErrorExpecting("expecting expression") Skipped{ Token(SELECT) } Token(2) } }"#
        );
    }

    #[test]
    fn test_missing_close_paren() {
        assert_eq!(
            expr("(1"),
            "ResultColumn{ Parenthesized{ Token(() Token(1) ErrorUnexpectedEOF } }"
        );
    }
}
