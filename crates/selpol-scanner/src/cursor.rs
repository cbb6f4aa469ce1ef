//! Byte cursor with non-destructive lookahead.

/// A forward-only position over a byte slice.
///
/// `peek` never consumes, so a rule that tentatively looks at the next byte
/// leaves it in place for the next rule to classify when it does not extend
/// the current token.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteCursor { bytes, pos: 0 }
    }

    /// Byte offset of the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// The byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// The byte after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Move past `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Advance while `pred` holds for the current byte. Returns the number of
    /// bytes skipped.
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Offset of the next occurrence of `needle` at or after the current
    /// position, or the end of input when there is none.
    pub fn find_or_end(&self, needle: u8) -> usize {
        let rest = &self.bytes[self.pos..];
        match memchr::memchr(needle, rest) {
            Some(i) => self.pos + i,
            None => self.bytes.len(),
        }
    }

    /// Jump to an absolute offset. Offsets past the end clamp to the end.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// Bytes between two absolute offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.bytes[start..end]
    }
}
