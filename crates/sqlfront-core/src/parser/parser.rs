//! SQL Parser implementation.

use serde::Serialize;
use tracing::{debug, trace};

use super::precedence::is_name;
use crate::lexer::{Keyword, Lexer, SourceError, Token, TokenKind};
use crate::tree::{CommentMap, Construction, Error, NodeKind, NonTerminal};

/// Size of the lookahead window: the current token and two more.
const LOOKAHEAD: usize = 3;

/// Deepest expression nesting parsed before the rest of the expression is
/// skipped.
pub(super) const MAX_EXPR_DEPTH: usize = 200;

/// A significant token waiting in the lookahead window, with the comments
/// that preceded it.
#[derive(Debug, Clone)]
struct Pending {
    token: Token,
    comments: Vec<Token>,
}

/// Pulls the next significant token, dropping whitespace and collecting
/// comments on the way.
fn pull(lexer: &mut Lexer<'_>) -> Pending {
    let mut comments = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.kind().is_comment() {
            comments.push(token);
        } else if !token.kind().is_trivia() {
            return Pending { token, comments };
        }
    }
}

/// Error-tolerant recursive descent parser for the SQLite dialect.
///
/// Each call to [`Parser::parse_statement`] consumes one statement and always
/// returns a tree; syntax errors are recorded as error nodes inside it. The
/// parser is also an [`Iterator`] over the statements of its input.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Ring buffer; `window[head]` is the current token.
    window: [Pending; LOOKAHEAD],
    head: usize,
    /// Comments of the statement being parsed.
    comments: CommentMap,
    /// Set once an end-of-input error has been emitted for the statement, so
    /// that the rules still open at that point stay quiet.
    eof_reported: bool,
    /// Expression nesting of the rule being parsed.
    pub(super) depth: usize,
}

/// One statement with its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStatement {
    /// The tree, rooted at a [`NodeKind::SqlStatement`] node.
    pub tree: NonTerminal,
    /// Comments keyed by the token they precede.
    pub comments: CommentMap,
}

impl ParsedStatement {
    /// Returns true if the tree contains an error node.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.has_errors()
    }
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_lexer(Lexer::new(input))
    }

    /// Creates a parser over raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidUtf8`] if the bytes are not UTF-8.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SourceError> {
        Ok(Self::with_lexer(Lexer::from_bytes(bytes)?))
    }

    fn with_lexer(mut lexer: Lexer<'a>) -> Self {
        let window = [pull(&mut lexer), pull(&mut lexer), pull(&mut lexer)];
        Self {
            lexer,
            window,
            head: 0,
            comments: CommentMap::new(),
            eof_reported: false,
            depth: 0,
        }
    }

    /// Returns true once every statement has been consumed.
    ///
    /// Comments after the last statement still count as input; they come back
    /// as a final statement holding only the end-of-input token.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        let pending = &self.window[self.head];
        pending.token.is_eof() && pending.comments.is_empty()
    }

    /// Parses one statement.
    ///
    /// The tree is rooted at a [`NodeKind::SqlStatement`] node that ends with
    /// the terminating `;` or end-of-input token. The comment map covers every
    /// comment before a token of this statement.
    pub fn parse_statement(&mut self) -> (NonTerminal, CommentMap) {
        self.eof_reported = false;
        self.depth = 0;
        let offset = self.current().span().start;
        trace!(offset, "parsing statement");

        let mut root = NonTerminal::new(NodeKind::SqlStatement);
        self.statement(&mut root);

        let kind = root.children().find_map(|child| match child {
            Construction::NonTerminal(node) => Some(node.kind()),
            _ => None,
        });
        debug!(
            offset,
            kind = kind.map_or("empty", |kind| kind.as_str()),
            errors = root.errors().len(),
            "parsed statement"
        );
        (root, core::mem::take(&mut self.comments))
    }

    /// The current token.
    pub(super) fn current(&self) -> &Token {
        &self.window[self.head].token
    }

    /// The token `n` positions after the current one, `n < 3`.
    pub(super) fn peek(&self, n: usize) -> &Token {
        debug_assert!(n < LOOKAHEAD);
        &self.window[(self.head + n) % LOOKAHEAD].token
    }

    pub(super) fn at(&self, kind: &TokenKind) -> bool {
        self.current().kind() == kind
    }

    pub(super) fn at_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    pub(super) fn peek_is_keyword(&self, n: usize, keyword: Keyword) -> bool {
        self.peek(n).as_keyword() == Some(keyword)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    /// Consumes the current token, committing its comments to the map.
    pub(super) fn advance(&mut self) -> Token {
        let next = pull(&mut self.lexer);
        let Pending { token, comments } = core::mem::replace(&mut self.window[self.head], next);
        self.head = (self.head + 1) % LOOKAHEAD;
        self.comments.insert(&token, comments);
        token
    }

    /// Consumes the current token into `parent`.
    pub(super) fn bump(&mut self, parent: &mut NonTerminal) {
        let token = self.advance();
        parent.add_token(token);
    }

    /// Consumes the current token into `parent` if it has the given kind.
    pub(super) fn eat(&mut self, parent: &mut NonTerminal, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.bump(parent);
            true
        } else {
            false
        }
    }

    pub(super) fn eat_keyword(&mut self, parent: &mut NonTerminal, keyword: Keyword) -> bool {
        if self.at_keyword(keyword) {
            self.bump(parent);
            true
        } else {
            false
        }
    }

    /// Consumes a required token, or records it as missing.
    pub(super) fn expect(&mut self, parent: &mut NonTerminal, kind: &TokenKind, what: &str) {
        if !self.eat(parent, kind) {
            self.missing(parent, what);
        }
    }

    /// Consumes a required keyword, or records it as missing.
    pub(super) fn expect_keyword(&mut self, parent: &mut NonTerminal, keyword: Keyword) {
        if !self.eat_keyword(parent, keyword) {
            self.missing(parent, keyword.as_str());
        }
    }

    /// Wraps the current name token in a `kind` node, or records the name as
    /// missing.
    pub(super) fn name(&mut self, parent: &mut NonTerminal, kind: NodeKind, what: &str) {
        if is_name(self.current().kind()) {
            let mut node = NonTerminal::new(kind);
            self.bump(&mut node);
            parent.add_child(node);
        } else {
            self.missing(parent, what);
        }
    }

    /// Like [`Parser::name`], without a wrapping node.
    pub(super) fn name_token(&mut self, parent: &mut NonTerminal, what: &str) {
        if is_name(self.current().kind()) {
            self.bump(parent);
        } else {
            self.missing(parent, what);
        }
    }

    /// `[schema .] name`
    pub(super) fn qualified_name(&mut self, parent: &mut NonTerminal, kind: NodeKind, what: &str) {
        if is_name(self.current().kind()) && self.peek(1).kind() == &TokenKind::Dot {
            self.name(parent, NodeKind::SchemaName, "schema name");
            self.bump(parent);
        }
        self.name(parent, kind, what);
    }

    /// Records `ErrorMissing("missing <what>")`, or an end-of-input error if
    /// the input is exhausted.
    pub(super) fn missing(&mut self, parent: &mut NonTerminal, what: &str) {
        if self.at_eof() {
            self.unexpected_eof(parent);
        } else {
            trace!(offset = self.current().span().start, what, "missing");
            parent.add_child(Error::missing(format!("missing {what}")));
        }
    }

    /// Records `ErrorExpecting(message)`, or an end-of-input error if the
    /// input is exhausted.
    pub(super) fn expecting(&mut self, parent: &mut NonTerminal, message: &str) {
        if self.at_eof() {
            self.unexpected_eof(parent);
        } else {
            trace!(offset = self.current().span().start, message, "unexpected token");
            parent.add_child(Error::expecting(message));
        }
    }

    /// Records the first end-of-input error of the statement.
    pub(super) fn unexpected_eof(&mut self, parent: &mut NonTerminal) {
        if !self.eof_reported {
            self.eof_reported = true;
            parent.add_child(Error::unexpected_eof());
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = ParsedStatement;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            return None;
        }
        let (tree, comments) = self.parse_statement();
        Some(ParsedStatement { tree, comments })
    }
}

/// Parses every statement of `input`.
#[must_use]
pub fn parse(input: &str) -> Vec<ParsedStatement> {
    Parser::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(sql: &str) -> String {
        Parser::new(sql).parse_statement().0.to_string()
    }

    #[test]
    fn test_lookahead_skips_trivia() {
        let mut parser = Parser::new("ALTER /* c */ TABLE\n t");
        assert!(parser.at_keyword(Keyword::Alter));
        assert!(parser.peek_is_keyword(1, Keyword::Table));
        assert!(parser.peek(2).is_word("t"));
        parser.advance();
        assert!(parser.at_keyword(Keyword::Table));
        assert!(parser.peek(2).is_eof());
        parser.advance();
        parser.advance();
        assert!(parser.at_eof());
        // end of input is sticky
        parser.advance();
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_comments_follow_their_token() {
        let mut parser = Parser::new("-- lead\nANALYZE /* mid */ t; -- next\nBEGIN");
        let (tree, comments) = parser.parse_statement();
        let tokens = tree.terminals();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments.comments_before(tokens[0])[0].text(), "-- lead");
        assert_eq!(comments.comments_before(tokens[1])[0].text(), "/* mid */");

        let (tree, comments) = parser.parse_statement();
        assert_eq!(comments.comments_before(tree.terminals()[0])[0].text(), "-- next");
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_trailing_comment_is_a_final_statement() {
        let statements = parse("BEGIN; -- done");
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[1].tree.to_string(), "SQLStatement{ Token(EOF) }");
        assert_eq!(statements[1].comments.all().count(), 1);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\t").is_empty());
    }

    #[test]
    fn test_parse_statement_at_end() {
        assert_eq!(render(""), "SQLStatement{ Token(EOF) }");
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        assert!(Parser::from_bytes(b"BEGIN").is_ok());
        assert!(matches!(
            Parser::from_bytes(b"BEGIN \xff"),
            Err(SourceError::InvalidUtf8 { offset: 6 })
        ));
    }
}
