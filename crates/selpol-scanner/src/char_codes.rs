//! ASCII byte classification for the scanner.
//!
//! Classification is byte-wise; bytes >= 0x80 never belong to a word and
//! are emitted as single-byte symbol tokens.

pub const LINE_FEED: u8 = b'\n';
pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const HASH: u8 = b'#';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const SLASH: u8 = b'/';
pub const BACKSLASH: u8 = b'\\';
pub const EXCLAMATION: u8 = b'!';
pub const EQUALS: u8 = b'=';
pub const DOLLAR: u8 = b'$';
pub const ASTERISK: u8 = b'*';

/// Space or horizontal tab. Line feeds are significant and not blank.
#[inline]
pub fn is_blank(b: u8) -> bool {
    b == SPACE || b == TAB
}

/// First byte of a word token.
#[inline]
pub fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Continuation byte of a word token.
///
/// `$` is part of the alphabet, so `foo$1` stays a single word.
#[inline]
pub fn is_word_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | DOLLAR)
}

/// Operators that combine with an identical following byte
/// (`&&`, `||`, `==`, `<<`, `>>`).
#[inline]
pub fn is_doubling_operator(b: u8) -> bool {
    matches!(b, b'&' | b'|' | EQUALS | b'<' | b'>')
}

/// Byte after `$` that starts a variable reference.
///
/// Positional (`$1`) and wildcard (`$*`) references are always recognized;
/// named references (`$foo`) only when `named` is set.
#[inline]
pub fn starts_variable_reference(b: u8, named: bool) -> bool {
    b.is_ascii_digit() || b == ASTERISK || (named && b.is_ascii_alphabetic())
}
