//! Parse tree produced by the parser.
//!
//! A parse is a tree of [`Construction`]s rooted at a
//! [`NodeKind::SqlStatement`] node. Leaves are either [`Terminal`]s, each
//! wrapping one token of the input, or [`Error`]s describing what went wrong at
//! that position. Malformed input never aborts a parse; it shows up as error
//! leaves and [`NodeKind::Skipped`] runs inside an otherwise complete tree.

mod comments;
mod display;
mod kind;

use serde::Serialize;

use crate::lexer::{needs_space, Span, Token};

pub use comments::CommentMap;
pub use kind::NodeKind;

/// The shape of a parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Diagnostic {
    /// Exactly one expected thing is absent; parsing goes on as if it were
    /// present.
    Missing,
    /// The current token matches none of several alternatives.
    Expecting,
    /// Recovery reached the end of input.
    UnexpectedEof,
}

impl Diagnostic {
    /// The tree-level kind of an error node with this diagnostic.
    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self {
            Self::Missing => NodeKind::ErrorMissing,
            Self::Expecting => NodeKind::ErrorExpecting,
            Self::UnexpectedEof => NodeKind::ErrorUnexpectedEof,
        }
    }
}

/// Any node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Construction {
    /// An inner node.
    NonTerminal(NonTerminal),
    /// A leaf holding one token.
    Terminal(Terminal),
    /// A leaf holding a diagnostic.
    Error(Error),
}

/// An inner node: an ordered, append-only sequence of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonTerminal {
    kind: NodeKind,
    children: Vec<Construction>,
}

/// A leaf wrapping one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminal {
    token: Option<Token>,
}

/// A leaf describing a syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    diagnostic: Diagnostic,
    message: String,
}

impl NonTerminal {
    /// Creates an empty node.
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// The kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Appends a child after the existing ones.
    pub fn add_child(&mut self, child: impl Into<Construction>) {
        self.children.push(child.into());
    }

    /// Builder-style [`add_child`](Self::add_child).
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Construction>) -> Self {
        self.add_child(child);
        self
    }

    /// Appends a terminal for `token`.
    pub fn add_token(&mut self, token: Token) {
        self.add_child(Terminal::new(token));
    }

    /// Moves every child of `other` to the end of this node.
    pub(crate) fn append_children(&mut self, other: Self) {
        self.children.extend(other.children);
    }

    /// The number of direct children.
    #[must_use]
    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The direct children in insertion order. Each call starts over.
    pub fn children(&self) -> core::slice::Iter<'_, Construction> {
        self.children.iter()
    }

    /// The child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Construction> {
        self.children.get(index)
    }
}

impl<'a> IntoIterator for &'a NonTerminal {
    type Item = &'a Construction;
    type IntoIter = core::slice::Iter<'a, Construction>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl Terminal {
    /// Wraps a token.
    #[must_use]
    pub const fn new(token: Token) -> Self {
        Self { token: Some(token) }
    }

    /// A terminal without a token, for expected trees in tests. It matches any
    /// terminal in [`Construction::matches`]. The parser never produces one.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self { token: None }
    }

    /// The wrapped token, or `None` for a placeholder.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}

impl Error {
    /// Creates an error leaf.
    #[must_use]
    pub fn new(diagnostic: Diagnostic, message: impl Into<String>) -> Self {
        Self {
            diagnostic,
            message: message.into(),
        }
    }

    /// An [`Diagnostic::Missing`] error.
    #[must_use]
    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(Diagnostic::Missing, message)
    }

    /// An [`Diagnostic::Expecting`] error.
    #[must_use]
    pub fn expecting(message: impl Into<String>) -> Self {
        Self::new(Diagnostic::Expecting, message)
    }

    /// An [`Diagnostic::UnexpectedEof`] error.
    #[must_use]
    pub fn unexpected_eof() -> Self {
        Self::new(Diagnostic::UnexpectedEof, "unexpected EOF")
    }

    /// The diagnostic shape.
    #[must_use]
    pub const fn diagnostic(&self) -> Diagnostic {
        self.diagnostic
    }

    /// The tree-level kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.diagnostic.kind()
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<NonTerminal> for Construction {
    fn from(node: NonTerminal) -> Self {
        Self::NonTerminal(node)
    }
}

impl From<Terminal> for Construction {
    fn from(terminal: Terminal) -> Self {
        Self::Terminal(terminal)
    }
}

impl From<Error> for Construction {
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl From<Token> for Construction {
    fn from(token: Token) -> Self {
        Self::Terminal(Terminal::new(token))
    }
}

impl Construction {
    /// The kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::NonTerminal(node) => node.kind(),
            Self::Terminal(_) => NodeKind::Terminal,
            Self::Error(error) => error.kind(),
        }
    }

    /// Returns true if an error leaf appears anywhere in this subtree.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        match self {
            Self::NonTerminal(node) => node.children().any(Self::has_errors),
            Self::Terminal(_) => false,
            Self::Error(_) => true,
        }
    }

    /// Every error leaf of this subtree, depth-first, left to right.
    #[must_use]
    pub fn errors(&self) -> Vec<&Error> {
        let mut out = Vec::new();
        self.collect_errors(&mut out);
        out
    }

    fn collect_errors<'a>(&'a self, out: &mut Vec<&'a Error>) {
        match self {
            Self::NonTerminal(node) => {
                for child in node {
                    child.collect_errors(out);
                }
            }
            Self::Terminal(_) => {}
            Self::Error(error) => out.push(error),
        }
    }

    /// Every token of this subtree in source order.
    #[must_use]
    pub fn terminals(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            Self::NonTerminal(node) => {
                for child in node {
                    child.collect_terminals(out);
                }
            }
            Self::Terminal(terminal) => out.extend(terminal.token()),
            Self::Error(_) => {}
        }
    }

    /// The source span covered by the tokens of this subtree.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        self.terminals()
            .into_iter()
            .filter(|token| !token.is_eof())
            .map(Token::span)
            .reduce(Span::merge)
    }

    /// Rebuilds source text from the tokens of this subtree, separating two
    /// tokens with one space only where they would otherwise fuse.
    #[must_use]
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<&Token> = None;
        for token in self.terminals() {
            let Some(text) = token.lexeme() else {
                continue;
            };
            if previous.is_some_and(|prev| needs_space(prev.kind(), token.kind())) {
                out.push(' ');
            }
            out.push_str(text);
            previous = Some(token);
        }
        out
    }

    /// Compares an expected tree with an actual one.
    ///
    /// Terminals compare by token kind and text, ignoring spans. A placeholder
    /// terminal on the expected side matches any terminal.
    #[must_use]
    pub fn matches(&self, actual: &Self) -> bool {
        match (self, actual) {
            (Self::NonTerminal(expected), Self::NonTerminal(actual)) => {
                expected.kind() == actual.kind()
                    && expected.number_of_children() == actual.number_of_children()
                    && expected
                        .children()
                        .zip(actual.children())
                        .all(|(e, a)| e.matches(a))
            }
            (Self::Terminal(expected), Self::Terminal(actual)) => {
                match (expected.token(), actual.token()) {
                    (None, _) => true,
                    (Some(e), Some(a)) => e.kind() == a.kind() && e.text() == a.text(),
                    (Some(_), None) => false,
                }
            }
            (Self::Error(expected), Self::Error(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl NonTerminal {
    /// See [`Construction::has_errors`].
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.children().any(Construction::has_errors)
    }

    /// See [`Construction::errors`].
    #[must_use]
    pub fn errors(&self) -> Vec<&Error> {
        let mut out = Vec::new();
        for child in self {
            child.collect_errors(&mut out);
        }
        out
    }

    /// See [`Construction::terminals`].
    #[must_use]
    pub fn terminals(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        for child in self {
            child.collect_terminals(&mut out);
        }
        out
    }
}
