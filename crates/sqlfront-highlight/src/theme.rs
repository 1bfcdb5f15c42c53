//! Built-in color themes.

use sqlfront_core::TokenKind;

use crate::error::ColorError;
use crate::style::{Color, Style};
use crate::transform::{Colorize, FirstMatch};

/// Styles for each class of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub keyword: Style,
    pub literal: Style,
    pub number: Style,
    pub variable: Style,
    pub comment: Style,
    pub operator: Style,
    pub error: Style,
}

const fn is_literal(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::String | TokenKind::Blob)
}

const fn is_number(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Numeric)
}

const fn is_operator(kind: &TokenKind) -> bool {
    kind.punctuation().is_some()
}

impl Theme {
    /// Eight-color theme understood by every ANSI terminal.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            keyword: Style::new(Color::Blue).bold(),
            literal: Style::new(Color::Green),
            number: Style::new(Color::Cyan),
            variable: Style::new(Color::Magenta),
            comment: Style::new(Color::White),
            operator: Style::new(Color::Yellow),
            error: Style::new(Color::Red).bold(),
        }
    }

    /// 24-bit theme.
    #[must_use]
    pub const fn rgb() -> Self {
        Self {
            keyword: Style::new(Color::Rgb(0x56, 0x9c, 0xd6)).bold(),
            literal: Style::new(Color::Rgb(0xce, 0x91, 0x78)),
            number: Style::new(Color::Rgb(0xb5, 0xce, 0xa8)),
            variable: Style::new(Color::Rgb(0x9c, 0xdc, 0xfe)),
            comment: Style::new(Color::Rgb(0x6a, 0x99, 0x55)),
            operator: Style::new(Color::Rgb(0xd4, 0xd4, 0xd4)),
            error: Style::new(Color::Rgb(0xf4, 0x47, 0x47)).bold(),
        }
    }

    /// Looks a theme up by name: `ansi` or `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownTheme`] for any other name.
    pub fn by_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Self::ansi()),
            "rgb" => Ok(Self::rgb()),
            _ => Err(ColorError::UnknownTheme(name.to_owned())),
        }
    }

    /// The transform applying this theme.
    #[must_use]
    pub fn transform(&self) -> FirstMatch {
        FirstMatch::new()
            .or(Colorize::new(TokenKind::is_error, self.error))
            .or(Colorize::new(TokenKind::is_keyword, self.keyword))
            .or(Colorize::new(is_literal, self.literal))
            .or(Colorize::new(is_number, self.number))
            .or(Colorize::new(TokenKind::is_variable, self.variable))
            .or(Colorize::new(TokenKind::is_comment, self.comment))
            .or(Colorize::new(is_operator, self.operator))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("ANSI"), Ok(Theme::ansi()));
        assert_eq!(Theme::by_name("rgb"), Ok(Theme::rgb()));
        assert_eq!(
            Theme::by_name("solarized"),
            Err(ColorError::UnknownTheme("solarized".to_owned()))
        );
    }
}
