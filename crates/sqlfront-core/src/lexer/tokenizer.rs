//! SQL Tokenizer implementation.

use super::cursor::Cursor;
use super::{Keyword, LexError, SourceError, Span, Token, TokenKind};

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0c')
}

const fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A pull-based lexer for the SQLite dialect.
///
/// Every byte of the input ends up in exactly one token, whitespace and
/// comments included. Once the input is exhausted, [`Lexer::next_token`]
/// keeps returning end-of-input tokens.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            start: 0,
        }
    }

    /// Creates a lexer over raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidUtf8`] if the bytes are not UTF-8. The
    /// whole buffer is checked before any token is produced.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SourceError> {
        let input = core::str::from_utf8(bytes)?;
        Ok(Self::new(input))
    }

    /// Creates a token from start to the current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.start),
            Span::new(self.start, self.cursor.pos()),
        )
    }

    fn error(&self, err: LexError) -> Token {
        self.make_token(TokenKind::Error(err))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.start = self.cursor.pos();

        let Some(c) = self.cursor.bump() else {
            return Token::eof(self.start);
        };

        match c {
            c if is_space(c) => {
                self.cursor.eat_while(is_space);
                self.make_token(TokenKind::Whitespace)
            }

            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ';' => self.make_token(TokenKind::Semicolon),
            '+' => self.make_token(TokenKind::Plus),
            '*' => self.make_token(TokenKind::Star),
            '%' => self.make_token(TokenKind::Percent),
            ',' => self.make_token(TokenKind::Comma),
            '&' => self.make_token(TokenKind::BitAnd),
            '~' => self.make_token(TokenKind::BitNot),

            // Potentially multi-character tokens
            '-' => {
                if self.cursor.eat('-') {
                    self.cursor.eat_while(|c| c != '\n');
                    self.make_token(TokenKind::SqlComment)
                } else if self.cursor.eat('>') {
                    if self.cursor.eat('>') {
                        self.make_token(TokenKind::DoubleArrow)
                    } else {
                        self.make_token(TokenKind::Arrow)
                    }
                } else {
                    self.make_token(TokenKind::Minus)
                }
            }
            '/' => {
                if self.cursor.eat('*') {
                    self.scan_block_comment()
                } else {
                    self.make_token(TokenKind::Slash)
                }
            }
            '=' => {
                if self.cursor.eat('=') {
                    self.make_token(TokenKind::EqEq)
                } else {
                    self.make_token(TokenKind::Eq)
                }
            }
            '<' => {
                if self.cursor.eat('=') {
                    self.make_token(TokenKind::LtEq)
                } else if self.cursor.eat('>') {
                    self.make_token(TokenKind::LtGt)
                } else if self.cursor.eat('<') {
                    self.make_token(TokenKind::LeftShift)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.cursor.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else if self.cursor.eat('>') {
                    self.make_token(TokenKind::RightShift)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.cursor.eat('=') {
                    self.make_token(TokenKind::NotEq)
                } else if self.cursor.is_at_end() {
                    self.error(LexError::UnexpectedEof("operator"))
                } else {
                    self.error(LexError::UnexpectedCharacter('!'))
                }
            }
            '|' => {
                if self.cursor.eat('|') {
                    self.make_token(TokenKind::Concat)
                } else {
                    self.make_token(TokenKind::BitOr)
                }
            }
            '.' => {
                if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_digits(char::is_ascii_digit, false);
                    self.scan_exponent();
                    self.make_token(TokenKind::Numeric)
                } else {
                    self.make_token(TokenKind::Dot)
                }
            }

            // String literals
            '\'' => self.scan_string(),

            // Quoted identifiers
            '"' | '`' => self.scan_quoted_identifier(c),
            '[' => self.scan_bracket_identifier(),

            // Blob literals
            'X' | 'x' if self.cursor.peek() == Some('\'') => self.scan_blob(),

            // Numbers
            c if c.is_ascii_digit() => self.scan_number(c),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            // Bind parameters
            '?' => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                self.make_token(TokenKind::QuestionVariable)
            }
            ':' => self.scan_named_variable(':', TokenKind::ColonVariable),
            '@' => self.scan_named_variable('@', TokenKind::AtVariable),
            '$' => self.scan_dollar_variable(),

            _ => self.error(LexError::UnexpectedCharacter(c)),
        }
    }

    /// Tokenizes the entire input and returns all tokens, ending with EOF.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scans the rest of a `/* ... */` comment. An unterminated comment runs
    /// to the end of the input.
    fn scan_block_comment(&mut self) -> Token {
        while let Some(c) = self.cursor.bump() {
            if c == '*' && self.cursor.eat('/') {
                break;
            }
        }
        self.make_token(TokenKind::CComment)
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_id_char);
        let text = self.cursor.slice_from(self.start);
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a quoted identifier (e.g., "column name" or `column name`). A
    /// doubled delimiter stands for itself.
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        loop {
            match self.cursor.bump() {
                Some(c) if c == quote => {
                    if !self.cursor.eat(quote) {
                        return self.make_token(TokenKind::Identifier);
                    }
                }
                Some(_) => {}
                None => return self.error(LexError::UnexpectedEof("quoted identifier")),
            }
        }
    }

    /// Scans a `[...]` identifier. Brackets have no escape.
    fn scan_bracket_identifier(&mut self) -> Token {
        loop {
            match self.cursor.bump() {
                Some(']') => return self.make_token(TokenKind::Identifier),
                Some(_) => {}
                None => return self.error(LexError::UnexpectedEof("quoted identifier")),
            }
        }
    }

    /// Scans a string literal.
    fn scan_string(&mut self) -> Token {
        loop {
            match self.cursor.bump() {
                Some('\'') => {
                    if !self.cursor.eat('\'') {
                        return self.make_token(TokenKind::String);
                    }
                }
                Some(_) => {}
                None => return self.error(LexError::UnexpectedEof("string literal")),
            }
        }
    }

    /// Scans a blob literal (X'...' or x'...').
    ///
    /// The offending character of an invalid blob ends the error token, so the
    /// closing quote of the literal, if any, starts the next token.
    fn scan_blob(&mut self) -> Token {
        self.cursor.bump(); // opening quote
        loop {
            match self.cursor.bump() {
                Some('\'') => return self.make_token(TokenKind::Blob),
                Some(c) if c.is_ascii_hexdigit() => {}
                Some(_) => return self.error(LexError::InvalidBlob),
                None => return self.error(LexError::UnexpectedEof("blob literal")),
            }
        }
    }

    /// Scans a number whose first digit has been consumed.
    fn scan_number(&mut self, first: char) -> Token {
        if first == '0'
            && matches!(self.cursor.peek(), Some('x' | 'X'))
            && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.cursor.bump(); // x
            self.scan_digits(char::is_ascii_hexdigit, false);
            return self.make_token(TokenKind::Numeric);
        }

        self.scan_digits(char::is_ascii_digit, true);
        if self.cursor.eat('.') {
            self.scan_digits(char::is_ascii_digit, false);
        }
        self.scan_exponent();
        self.make_token(TokenKind::Numeric)
    }

    /// Consumes a run of digits. A single `_` is accepted between two digits;
    /// an underscore that is not followed by a digit is left for the next
    /// token.
    fn scan_digits(&mut self, is_digit: fn(&char) -> bool, mut after_digit: bool) {
        loop {
            match self.cursor.peek() {
                Some(c) if is_digit(&c) => {
                    self.cursor.bump();
                    after_digit = true;
                }
                Some('_') if after_digit => {
                    self.cursor.bump();
                    if !self.cursor.peek().is_some_and(|c| is_digit(&c)) {
                        self.cursor.unread();
                        return;
                    }
                    after_digit = false;
                }
                _ => return,
            }
        }
    }

    /// Consumes an exponent if one follows. A marker without digits is pushed
    /// back and lexed later as an identifier.
    fn scan_exponent(&mut self) {
        if !matches!(self.cursor.peek(), Some('e' | 'E')) {
            return;
        }
        self.cursor.bump();
        match self.cursor.peek() {
            Some(c) if c.is_ascii_digit() => {}
            Some('+' | '-') if self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.cursor.bump();
            }
            _ => {
                self.cursor.unread();
                return;
            }
        }
        self.scan_digits(char::is_ascii_digit, false);
    }

    /// Scans `:name` or `@name` after the sigil.
    fn scan_named_variable(&mut self, sigil: char, kind: TokenKind) -> Token {
        match self.cursor.peek() {
            None => self.error(LexError::UnexpectedEof("variable")),
            Some(c) if is_id_char(c) => {
                self.cursor.eat_while(is_id_char);
                self.make_token(kind)
            }
            Some(_) => self.error(LexError::InvalidVariable(sigil)),
        }
    }

    /// Scans `$name`, `$a::b::c` and `$name(suffix)` after the sigil.
    fn scan_dollar_variable(&mut self) -> Token {
        match self.cursor.peek() {
            None => return self.error(LexError::UnexpectedEof("variable")),
            Some(c) if is_id_char(c) => self.cursor.eat_while(is_id_char),
            Some(_) => return self.error(LexError::InvalidVariable('$')),
        }

        while self.cursor.peek() == Some(':')
            && self.cursor.peek_nth(1) == Some(':')
            && self.cursor.peek_nth(2).is_some_and(is_id_char)
        {
            self.cursor.bump();
            self.cursor.bump();
            self.cursor.eat_while(is_id_char);
        }

        if self.cursor.eat('(') {
            loop {
                match self.cursor.bump() {
                    Some(')') => break,
                    Some(_) => {}
                    None => return self.error(LexError::UnexpectedEof("variable")),
                }
            }
        }
        self.make_token(TokenKind::DollarVariable)
    }
}
