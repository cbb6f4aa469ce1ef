//! Scanner state machine.
//!
//! One forward pass over the source bytes. Each call to `scan` classifies
//! the byte under the cursor and emits one, two, or three tokens:
//!
//! | Leading byte             | Tokens                                    |
//! |--------------------------|-------------------------------------------|
//! | space, tab               | none (skipped)                            |
//! | `\n`                     | `EOL_SENTINEL`                            |
//! | alphanumeric             | word                                      |
//! | `#`                      | `COMMENT_SENTINEL`, comment text          |
//! | `"`                      | `"`, content, `"`                         |
//! | `/`                      | path (a backslash escapes the next byte)  |
//! | `& \| = < >`             | doubled or single operator                |
//! | `!`                      | `!=` or `!`                               |
//! | `$`                      | variable reference or `$`                 |
//! | anything else            | the byte itself                           |
//!
//! Two-byte operators look at the following byte with `ByteCursor::peek`,
//! so a byte that does not extend the operator is classified on the next
//! call instead of being lost.

use std::fs;
use std::path::Path;

use selpol_common::IoError;

use crate::char_codes::{
    self, BACKSLASH, DOLLAR, DOUBLE_QUOTE, EQUALS, EXCLAMATION, HASH, LINE_FEED, SLASH,
};
use crate::cursor::ByteCursor;
use crate::options::{OverflowPolicy, ScannerOptions};
use crate::token::{ScanError, Token, TokenKind};

/// Tokenizer state over one in-memory source.
pub struct ScannerState<'a> {
    cursor: ByteCursor<'a>,
    options: ScannerOptions,
    tokens: Vec<Token>,
}

impl<'a> ScannerState<'a> {
    pub fn new(source: &'a [u8], options: ScannerOptions) -> Self {
        ScannerState {
            cursor: ByteCursor::new(source),
            options,
            tokens: Vec::new(),
        }
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Scan the whole source and return its tokens.
    pub fn scan_all(mut self) -> Result<Vec<Token>, ScanError> {
        while !self.cursor.is_at_end() {
            self.scan()?;
        }
        Ok(self.tokens)
    }

    /// Skip blanks and scan the next token group. Returns the number of
    /// tokens emitted, which is zero only when trailing blanks ran into end of
    /// input.
    pub fn scan(&mut self) -> Result<usize, ScanError> {
        let before = self.tokens.len();
        self.cursor.advance_while(char_codes::is_blank);

        let Some(ch) = self.cursor.current() else {
            return Ok(0);
        };

        match ch {
            LINE_FEED => {
                self.tokens.push(Token::end_of_line(self.cursor.pos()));
                self.cursor.advance();
            }
            HASH => self.scan_comment()?,
            DOUBLE_QUOTE => self.scan_quoted()?,
            SLASH => self.scan_path()?,
            EXCLAMATION => self.scan_exclamation(),
            DOLLAR => self.scan_dollar()?,
            _ if char_codes::is_word_start(ch) => self.scan_word()?,
            _ if char_codes::is_doubling_operator(ch) => self.scan_operator(ch),
            _ => self.push_single(TokenKind::Symbol),
        }

        Ok(self.tokens.len() - before)
    }

    fn scan_word(&mut self) -> Result<(), ScanError> {
        let start = self.cursor.pos();
        self.cursor.advance_while(char_codes::is_word_part);
        self.push_run(TokenKind::Word, start, self.cursor.pos())
    }

    /// `#` up to, not including, the next line feed.
    fn scan_comment(&mut self) -> Result<(), ScanError> {
        let start = self.cursor.pos();
        let end = self.cursor.find_or_end(LINE_FEED);
        self.tokens.push(Token::comment_marker(start));
        self.cursor.seek(end);
        self.push_run(TokenKind::CommentText, start, end)
    }

    /// Opening quote, raw content, closing quote. An unterminated string
    /// still gets its closing token.
    fn scan_quoted(&mut self) -> Result<(), ScanError> {
        let open = self.cursor.pos();
        self.tokens
            .push(Token::new(TokenKind::Quote, [DOUBLE_QUOTE], open));
        self.cursor.advance();

        let start = self.cursor.pos();
        let end = self.cursor.find_or_end(DOUBLE_QUOTE);
        self.push_run(TokenKind::QuotedText, start, end)?;

        self.tokens
            .push(Token::new(TokenKind::Quote, [DOUBLE_QUOTE], end));
        self.cursor.seek(end + 1);
        Ok(())
    }

    /// `/` followed by everything up to an unescaped space or tab.
    ///
    /// A byte is escaped when the byte before it is a backslash, including a
    /// backslash that is itself escaped, so `/a\\ b` is one path.
    fn scan_path(&mut self) -> Result<(), ScanError> {
        let start = self.cursor.pos();
        let mut escaped = false;
        while let Some(b) = self.cursor.current() {
            if char_codes::is_blank(b) && !escaped {
                break;
            }
            escaped = b == BACKSLASH;
            self.cursor.advance();
        }
        self.push_run(TokenKind::Path, start, self.cursor.pos())
    }

    fn scan_operator(&mut self, ch: u8) {
        if self.cursor.peek() == Some(ch) {
            self.push_fixed(TokenKind::Operator, 2);
        } else {
            self.push_single(TokenKind::Operator);
        }
    }

    fn scan_exclamation(&mut self) {
        if self.cursor.peek() == Some(EQUALS) {
            self.push_fixed(TokenKind::Operator, 2);
        } else {
            self.push_single(TokenKind::Operator);
        }
    }

    fn scan_dollar(&mut self) -> Result<(), ScanError> {
        let named = self.options.named_variables;
        match self.cursor.peek() {
            Some(next) if char_codes::starts_variable_reference(next, named) => {
                let start = self.cursor.pos();
                self.cursor.advance_by(2);
                self.cursor.advance_while(char_codes::is_word_part);
                self.push_run(TokenKind::Variable, start, self.cursor.pos())
            }
            _ => {
                self.push_single(TokenKind::Symbol);
                Ok(())
            }
        }
    }

    fn push_single(&mut self, kind: TokenKind) {
        self.push_fixed(kind, 1);
    }

    /// Emit the next `len` bytes as one token and move past them.
    fn push_fixed(&mut self, kind: TokenKind, len: usize) {
        let start = self.cursor.pos();
        self.cursor.advance_by(len);
        let end = self.cursor.pos();
        self.tokens
            .push(Token::new(kind, self.cursor.slice(start, end), start));
    }

    /// Emit an accumulated run, applying the overflow policy. The cursor has
    /// already moved past the whole run.
    fn push_run(&mut self, kind: TokenKind, start: usize, end: usize) -> Result<(), ScanError> {
        let bytes = self.cursor.slice(start, end);
        let len = bytes.len();
        match self.options.overflow {
            OverflowPolicy::Truncate { max_len } if len > max_len => {
                tracing::warn!(
                    offset = start,
                    len,
                    max_len,
                    ?kind,
                    "token truncated"
                );
                let mut token = Token::new(kind, &bytes[..max_len], start);
                token.truncated = true;
                self.tokens.push(token);
            }
            OverflowPolicy::Reject { max_len } if len > max_len => {
                return Err(ScanError::TokenTooLong {
                    offset: start,
                    len,
                    max_len,
                });
            }
            _ => self.tokens.push(Token::new(kind, bytes, start)),
        }
        Ok(())
    }
}

/// Tokenize an in-memory source.
pub fn tokenize_bytes(source: &[u8], options: &ScannerOptions) -> Result<Vec<Token>, ScanError> {
    ScannerState::new(source, options.clone()).scan_all()
}

/// Read `path` and tokenize its contents.
///
/// The whole file is read and closed before scanning starts, so no handle
/// outlives the read on any path.
pub fn tokenize_file(
    path: impl AsRef<Path>,
    options: &ScannerOptions,
) -> Result<Vec<Token>, ScanError> {
    let path = path.as_ref();
    let _span = tracing::info_span!("tokenize_file", path = %path.display()).entered();

    let source = fs::read(path).map_err(|err| IoError::open_file(path, err))?;
    let tokens = tokenize_bytes(&source, options)?;

    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "tokenized");
    Ok(tokens)
}
