//! Character cursor over the source text.

/// Decodes the source one `char` at a time and remembers the last character
/// so that it can be pushed back once.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    /// Byte length of the last character returned by `bump`, if it may still
    /// be unread.
    last: Option<usize>,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
        }
    }

    /// The current byte offset.
    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the current character without advancing.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character `n` positions ahead of the current one.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Advances past the current character and returns it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.last = Some(c.len_utf8());
        Some(c)
    }

    /// Pushes back the character returned by the last `bump`.
    ///
    /// Only one step of pushback is available.
    pub(crate) fn unread(&mut self) {
        if let Some(len) = self.last.take() {
            self.pos -= len;
        }
    }

    /// Consumes the current character if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Returns the text from `start` up to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }
}
