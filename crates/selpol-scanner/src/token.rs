//! Token values produced by the scanner.

use std::borrow::Cow;
use std::fmt;

use selpol_common::IoError;
use serde::{Serialize, Serializer};

/// Reserved token marking the end of a source line.
pub const EOL_SENTINEL: &str = "<<|EOL|>>";

/// Reserved token announcing that the next token is comment text.
pub const COMMENT_SENTINEL: &str = "<<|COMMENT|>>";

/// The scanning rule that produced a token.
///
/// Consumers of the string interface only see token text; the kind is kept
/// for diagnostics and for callers that want to skip re-classifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `EOL_SENTINEL`, produced for every line feed.
    EndOfLine,
    /// `COMMENT_SENTINEL`, always followed by a `CommentText` token.
    CommentMarker,
    /// Comment text including the leading `#`, without the line feed.
    CommentText,
    /// An opening or closing `"`.
    Quote,
    /// Raw content between quotes, possibly empty. No escapes are processed.
    QuotedText,
    /// A run starting with `/`, backslash escapes kept verbatim.
    Path,
    /// `&&`, `||`, `==`, `<<`, `>>`, `!=`, or one of their single-byte forms.
    Operator,
    /// `$1`, `$*`, or `$name`.
    Variable,
    /// Alphanumeric run, including `_`, `.`, `-`, and `$`.
    Word,
    /// Any other single byte, including a lone `$`.
    Symbol,
}

/// A single token: the bytes it stands for and where it started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Token text. Sentinel tokens carry the sentinel string.
    #[serde(serialize_with = "serialize_lossy")]
    pub text: Vec<u8>,
    /// Byte offset of the first source byte of this token.
    pub offset: usize,
    /// Set when `OverflowPolicy::Truncate` dropped bytes from this token.
    pub truncated: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Vec<u8>>, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
            truncated: false,
        }
    }

    pub fn end_of_line(offset: usize) -> Self {
        Token::new(TokenKind::EndOfLine, EOL_SENTINEL, offset)
    }

    pub fn comment_marker(offset: usize) -> Self {
        Token::new(TokenKind::CommentMarker, COMMENT_SENTINEL, offset)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Token text as UTF-8, replacing invalid sequences with U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfLine | TokenKind::CommentMarker)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other.as_bytes()
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == other.as_bytes()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

fn serialize_lossy<S: Serializer>(text: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(text))
}

/// Error returned when a scan cannot produce a token stream.
#[derive(Debug)]
pub enum ScanError {
    /// The source file could not be read.
    Io(IoError),
    /// A token exceeded the limit of `OverflowPolicy::Reject`.
    TokenTooLong {
        offset: usize,
        len: usize,
        max_len: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(err) => err.fmt(f),
            ScanError::TokenTooLong {
                offset,
                len,
                max_len,
            } => write!(
                f,
                "Token at byte {offset} is {len} bytes long, exceeding the limit of {max_len}"
            ),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(err) => Some(err),
            ScanError::TokenTooLong { .. } => None,
        }
    }
}

impl From<IoError> for ScanError {
    fn from(err: IoError) -> Self {
        ScanError::Io(err)
    }
}
