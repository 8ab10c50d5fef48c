//! Read/unread cursor over a token sequence.
//!
//! Speculative parsing takes a `mark()` before an attempt and `reset()`s to
//! it on failure, so a failed attempt consumes nothing.

use super::lexer::Token;
use crate::error::{PdfError, Result};

/// Saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Byte offset reported when reading past the last token
    end_pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let end_pos = tokens
            .last()
            .map(|t| t.pos() + t.text().len())
            .unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            end_pos,
        }
    }

    /// Read the next token. Reading past the end is fatal.
    pub fn read(&mut self) -> Result<&'a Token> {
        let tokens = self.tokens;
        let token = tokens
            .get(self.pos)
            .ok_or(PdfError::EndOfTokens { pos: self.end_pos })?;
        self.pos += 1;
        Ok(token)
    }

    /// Step back one token; no-op at the start.
    pub fn unread(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Next token without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub const fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// Index of the next token.
    pub const fn index(&self) -> usize {
        self.pos
    }

    /// Byte offset of the next token, or the end of input when exhausted.
    pub fn byte_pos(&self) -> usize {
        self.peek().map(Token::pos).unwrap_or(self.end_pos)
    }
}
