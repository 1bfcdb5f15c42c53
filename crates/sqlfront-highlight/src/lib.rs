//! # sqlfront-highlight
//!
//! Syntax highlighting for the SQLite dialect, built from token transformers.
//!
//! A [`Transform`] rewrites one token into zero or more tokens. Transforms are
//! composed with [`Chain`] (every output of one feeds the next) and
//! [`FirstMatch`] (the first transform accepting the token's kind wins).
//! [`Colorize`] surrounds a token with marker tokens whose text is a terminal
//! escape sequence. The marker kinds live in the `"highlight"` extension
//! namespace, so they never collide with the lexer's own kinds.
//!
//! ## Example
//!
//! ```rust
//! use sqlfront_highlight::{highlight, Theme};
//!
//! let out = highlight("SELECT 1", &Theme::ansi());
//! assert_eq!(out, "\x1b[1;34mSELECT\x1b[0m \x1b[36m1\x1b[0m");
//! ```

mod error;
mod style;
mod theme;
mod transform;

use sqlfront_core::{Lexer, Token};

pub use error::ColorError;
pub use style::{Color, Style, RESET};
pub use theme::Theme;
pub use transform::{is_marker, Chain, Colorize, FirstMatch, Transform, RESET_STYLE, STYLE};

/// Lexes `source` and runs every token through `transform`.
#[must_use]
pub fn transform_tokens(source: &str, transform: &dyn Transform) -> Vec<Token> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .flat_map(|token| transform.transform(token))
        .collect()
}

/// Highlights `source` with `theme`.
///
/// Every byte of the input is kept; removing the escape sequences from the
/// output gives `source` back.
#[must_use]
pub fn highlight(source: &str, theme: &Theme) -> String {
    transform_tokens(source, &theme.transform())
        .iter()
        .map(Token::text)
        .collect()
}
