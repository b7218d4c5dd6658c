//! Byte-position-tracking character cursor

/// A forward-only cursor over the input string.
///
/// Positions are byte offsets, suitable for caret diagnostics against
/// the original input.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Next character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Consume and return the next character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `expected` if it is next.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Consume a run of ASCII digits as a number.
    ///
    /// Saturates at `u32::MAX` so absurdly long digit runs fail range
    /// validation instead of panicking or wrapping.
    pub(crate) fn number(&mut self) -> Option<u32> {
        let mut value: u32 = 0;
        let mut seen = false;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value.saturating_mul(10).saturating_add(digit);
            seen = true;
            self.bump();
        }
        seen.then_some(value)
    }

    /// Everything up to the next `delim`, consuming the delimiter too.
    ///
    /// Returns `None` (without advancing) when `delim` does not occur.
    pub(crate) fn until(&mut self, delim: char) -> Option<&'a str> {
        let rest = &self.src[self.pos..];
        let idx = rest.find(delim)?;
        self.pos += idx + delim.len_utf8();
        Some(&rest[..idx])
    }
}
