//! Terminal colors and the escape sequences that select them.

use core::fmt;

use crate::error::ColorError;

/// Escape sequence restoring the default rendition.
pub const RESET: &str = "\x1b[0m";

/// A foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a `#rrggbb` literal.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless `hex` is `#` followed by six
    /// hexadecimal digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parses an ANSI color name (case-insensitive) or a `#rrggbb` literal.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownColor`] for an unknown name and
    /// [`ColorError::InvalidHex`] for a malformed literal.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ColorError> {
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let color = match s.to_ascii_lowercase().as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            _ => return Err(ColorError::UnknownColor(s.to_owned())),
        };
        Ok(color)
    }

    /// SGR foreground code; 24-bit colors select the default foreground.
    const fn ansi_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Rgb(..) => 39,
        }
    }
}

/// A foreground color, optionally bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    /// A plain style.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, bold: false }
    }

    /// The same style in bold.
    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// The SGR escape sequence selecting this style.
    #[must_use]
    pub fn escape(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\x1b[")?;
        if self.bold {
            f.write_str("1;")?;
        }
        match self.color {
            Color::Rgb(r, g, b) => write!(f, "38;2;{r};{g};{b}m"),
            color => write!(f, "{}m", color.ansi_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_escape() {
        assert_eq!(Style::new(Color::Red).escape(), "\x1b[31m");
        assert_eq!(Style::new(Color::Blue).bold().escape(), "\x1b[1;34m");
    }

    #[test]
    fn test_rgb_escape() {
        assert_eq!(
            Style::new(Color::Rgb(255, 128, 0)).escape(),
            "\x1b[38;2;255;128;0m"
        );
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff8000"), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("#FFFFFF"), Ok(Color::Rgb(255, 255, 255)));
        assert!(matches!(
            Color::from_hex("ff8000"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#ff80"),
            Err(ColorError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg8000"),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Color::from_str("Cyan"), Ok(Color::Cyan));
        assert_eq!(Color::from_str("#000000"), Ok(Color::Rgb(0, 0, 0)));
        assert_eq!(
            Color::from_str("mauve"),
            Err(ColorError::UnknownColor("mauve".to_owned()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColorError::InvalidHex("#12".to_owned()).to_string(),
            "invalid RGB color '#12': expected #rrggbb"
        );
    }
}
