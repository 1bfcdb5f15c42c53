//! Token-to-tokens transformers and their combinators.

use sqlfront_core::lexer::ExtensionKind;
use sqlfront_core::{Span, Token, TokenKind};
use tracing::trace;

use crate::style::{Style, RESET};

/// Namespace of the marker kinds minted by this crate.
pub const NAMESPACE: &str = "highlight";

/// Marker token opening a styled run; its text is the escape sequence.
pub const STYLE: ExtensionKind = ExtensionKind::new(NAMESPACE, 0);

/// Marker token closing a styled run.
pub const RESET_STYLE: ExtensionKind = ExtensionKind::new(NAMESPACE, 1);

/// Returns true for the marker kinds minted by [`Colorize`].
#[must_use]
pub fn is_marker(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Extension(ext) if ext.namespace == NAMESPACE)
}

/// Rewrites one token into zero or more tokens.
pub trait Transform {
    /// Rewrites `token`.
    fn transform(&self, token: Token) -> Vec<Token>;

    /// Returns true if this transform wants tokens of this kind. Used by
    /// [`FirstMatch`] to pick a transform.
    fn accepts(&self, _kind: &TokenKind) -> bool {
        true
    }
}

/// Runs transforms in sequence, feeding every output of one to the next.
#[derive(Default)]
pub struct Chain {
    transforms: Vec<Box<dyn Transform>>,
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform.
    #[must_use]
    pub fn then(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }
}

impl Transform for Chain {
    fn transform(&self, token: Token) -> Vec<Token> {
        self.transforms
            .iter()
            .fold(vec![token], |tokens, transform| {
                tokens
                    .into_iter()
                    .flat_map(|token| transform.transform(token))
                    .collect()
            })
    }

    fn accepts(&self, kind: &TokenKind) -> bool {
        self.transforms.iter().any(|transform| transform.accepts(kind))
    }
}

/// Applies the first transform that accepts the token; other tokens pass
/// through unchanged.
#[derive(Default)]
pub struct FirstMatch {
    transforms: Vec<Box<dyn Transform>>,
}

impl FirstMatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate transform.
    #[must_use]
    pub fn or(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }
}

impl Transform for FirstMatch {
    fn transform(&self, token: Token) -> Vec<Token> {
        match self
            .transforms
            .iter()
            .find(|transform| transform.accepts(token.kind()))
        {
            Some(transform) => transform.transform(token),
            None => vec![token],
        }
    }

    fn accepts(&self, kind: &TokenKind) -> bool {
        self.transforms.iter().any(|transform| transform.accepts(kind))
    }
}

/// Surrounds tokens of the selected kinds with style markers.
#[derive(Debug, Clone, Copy)]
pub struct Colorize {
    pub when: fn(&TokenKind) -> bool,
    pub style: Style,
}

impl Colorize {
    #[must_use]
    pub const fn new(when: fn(&TokenKind) -> bool, style: Style) -> Self {
        Self { when, style }
    }
}

impl Transform for Colorize {
    fn transform(&self, token: Token) -> Vec<Token> {
        if !(self.when)(token.kind()) || token.is_eof() {
            return vec![token];
        }
        let span = token.span();
        trace!(kind = %token.kind(), offset = span.start, "colorizing token");
        vec![
            Token::new(
                TokenKind::Extension(STYLE),
                self.style.escape(),
                Span::empty(span.start),
            ),
            token,
            Token::new(
                TokenKind::Extension(RESET_STYLE),
                RESET,
                Span::empty(span.end),
            ),
        ]
    }

    fn accepts(&self, kind: &TokenKind) -> bool {
        (self.when)(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use sqlfront_core::Lexer;

    fn first_token(sql: &str) -> Token {
        Lexer::new(sql).next_token()
    }

    /// Doubles every token.
    struct Twice;

    impl Transform for Twice {
        fn transform(&self, token: Token) -> Vec<Token> {
            vec![token.clone(), token]
        }
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_colorize_wraps_selected_kinds() {
        let colorize = Colorize::new(TokenKind::is_keyword, Style::new(Color::Red));
        let out = colorize.transform(first_token("SELECT"));
        assert_eq!(texts(&out), vec!["\x1b[31m", "SELECT", "\x1b[0m"]);
        assert_eq!(out[0].kind(), &TokenKind::Extension(STYLE));
        assert_eq!(out[2].kind(), &TokenKind::Extension(RESET_STYLE));
        assert_eq!(out[2].span(), Span::empty(6));

        let out = colorize.transform(first_token("name"));
        assert_eq!(texts(&out), vec!["name"]);
    }

    #[test]
    fn test_chain_feeds_every_output_forward() {
        let chain = Chain::new().then(Twice).then(Twice);
        assert_eq!(chain.transform(first_token("a")).len(), 4);
    }

    #[test]
    fn test_first_match_picks_one_transform() {
        let first = FirstMatch::new()
            .or(Colorize::new(TokenKind::is_keyword, Style::new(Color::Red)))
            .or(Colorize::new(|_| true, Style::new(Color::Blue)));
        let out = first.transform(first_token("FROM"));
        assert_eq!(texts(&out)[0], "\x1b[31m");
        let out = first.transform(first_token("x"));
        assert_eq!(texts(&out)[0], "\x1b[34m");
    }

    #[test]
    fn test_first_match_passes_unmatched_tokens() {
        let first = FirstMatch::new().or(Colorize::new(TokenKind::is_keyword, Style::new(Color::Red)));
        let out = first.transform(first_token("42"));
        assert_eq!(texts(&out), vec!["42"]);
    }

    #[test]
    fn test_markers_are_namespaced() {
        assert!(is_marker(&TokenKind::Extension(STYLE)));
        assert!(!is_marker(&TokenKind::Extension(ExtensionKind::new("other", 0))));
        assert_ne!(STYLE, ExtensionKind::new("other", 0));
        assert!(!is_marker(&TokenKind::Identifier));
    }
}
