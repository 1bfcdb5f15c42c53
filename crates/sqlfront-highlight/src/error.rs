//! Error types for colors and themes.

/// A color or theme that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// A `#rrggbb` literal with the wrong length or a non-hex digit.
    #[error("invalid RGB color '{0}': expected #rrggbb")]
    InvalidHex(String),

    /// A name that is neither one of the eight ANSI colors nor `#rrggbb`.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// A theme name other than `ansi` or `rgb`.
    #[error("unknown theme '{0}': expected ansi or rgb")]
    UnknownTheme(String),
}
