//! PDF tokenizer.
//!
//! Turns raw bytes into a flat token sequence. Comments and whitespace are
//! dropped; literal strings, names, `<<`/`>>` and stream bodies are special
//! cased. Stream bodies are located by searching the raw buffer for
//! `endstream` and are never tokenized themselves.

use super::charset::{is_regular, is_whitespace};
use crate::error::{PdfError, Result};
use bytes::Bytes;
use std::borrow::Cow;
use std::iter::FusedIterator;

const STREAM: &[u8] = b"stream";
const ENDSTREAM: &[u8] = b"endstream";

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Keyword, number, name (`/Type`), or structural delimiter (`[`, `<<`)
    Regular,
    /// Contents of a `( ... )` string
    Literal,
    /// Raw bytes between `stream` and `endstream`
    Stream,
}

impl TokenKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Literal => "literal",
            Self::Stream => "stream",
        }
    }
}

/// An immutable lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: Bytes,
    pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Bytes>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    pub fn regular(text: impl Into<Bytes>, pos: usize) -> Self {
        Self::new(TokenKind::Regular, text, pos)
    }

    pub fn literal(text: impl Into<Bytes>, pos: usize) -> Self {
        Self::new(TokenKind::Literal, text, pos)
    }

    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &[u8] {
        self.text.as_ref()
    }

    /// Shared handle to the token text (zero-copy for stream bodies).
    pub fn bytes(&self) -> Bytes {
        self.text.clone()
    }

    /// Byte offset where the token text starts in the input.
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Check for a Regular token with exactly this text.
    pub fn is_regular(&self, text: &[u8]) -> bool {
        self.kind == TokenKind::Regular && self.text.as_ref() == text
    }

    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text.as_ref())
    }
}

/// Byte-level tokenizer over an in-memory buffer.
pub struct Lexer {
    data: Bytes,
    pos: usize,
}

impl Lexer {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Current position in the buffer
    pub const fn tell(&self) -> usize {
        self.pos
    }

    /// Peek at current byte without advancing
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Peek at byte at offset from current position
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos + offset).copied()
    }

    /// Skip whitespace and `%` comments. A comment stops before its
    /// end-of-line byte, which is then skipped as whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'%' {
                self.pos += 1;
                match find_line_end(&self.data[self.pos..]) {
                    Some(offset) => self.pos += offset,
                    None => self.pos = self.data.len(),
                }
                continue;
            }
            if !is_whitespace(b) {
                return;
            }
            self.pos += 1;
        }
    }

    /// Parse a literal string `( ... )`. The first `)` terminates it;
    /// escapes and nested parentheses are not interpreted.
    fn parse_string(&mut self) -> Result<Token> {
        let start = self.pos;
        let body = start + 1;
        let Some(len) = self.data[body..].iter().position(|&b| b == b')') else {
            return Err(PdfError::UnterminatedString { pos: start });
        };
        self.pos = body + len + 1;
        Ok(Token::literal(self.data.slice(body..body + len), start))
    }

    /// Parse a two-byte delimiter (`<<` or `>>`).
    fn parse_double(&mut self, b: u8) -> Result<Token> {
        let start = self.pos;
        match self.peek_at(1) {
            Some(next) if next == b => {
                self.pos += 2;
                Ok(Token::regular(self.data.slice(start..start + 2), start))
            }
            Some(next) => Err(PdfError::TokenError {
                pos: start,
                msg: format!(
                    "expected {:?} after {:?}, found {:?}",
                    b as char, b as char, next as char
                ),
            }),
            None => Err(PdfError::UnexpectedEof { pos: self.data.len() }),
        }
    }

    /// Parse a name. The token text keeps the leading slash.
    fn parse_name(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        self.pos += regular_run(&self.data[self.pos..]);
        Token::regular(self.data.slice(start..self.pos), start)
    }

    /// Parse a keyword or number, diverting to a stream body on `stream`.
    fn parse_word(&mut self) -> Result<Token> {
        let start = self.pos;
        self.pos += regular_run(&self.data[start..]);
        let word = &self.data[start..self.pos];
        if word != STREAM {
            return Ok(Token::regular(self.data.slice(start..self.pos), start));
        }

        let body = self.pos;
        let Some(len) = find_subslice(&self.data[body..], ENDSTREAM) else {
            return Err(PdfError::MissingEndstream { pos: start });
        };
        self.pos = body + len + ENDSTREAM.len();
        Ok(Token::new(
            TokenKind::Stream,
            self.data.slice(body..body + len),
            body,
        ))
    }

    /// Get next token, or `None` once the input is exhausted.
    ///
    /// An error ends the stream: the call after an `Err` returns `None`.
    pub fn next_token(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();
        let b = self.peek()?;
        let start = self.pos;

        let result = match b {
            b'(' => self.parse_string(),
            b'[' | b']' | b'{' | b'}' => {
                self.pos += 1;
                Ok(Token::regular(self.data.slice(start..start + 1), start))
            }
            b'<' | b'>' => self.parse_double(b),
            b'/' => Ok(self.parse_name()),
            b')' => Err(PdfError::TokenError {
                pos: start,
                msg: "unbalanced ')'".into(),
            }),
            _ => self.parse_word(),
        };
        if result.is_err() {
            self.pos = self.data.len();
        }
        Some(result)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer {}

/// Tokenize a whole buffer. Any lexical error aborts with no partial output.
pub fn tokenize(data: impl Into<Bytes>) -> Result<Vec<Token>> {
    let tokens = Lexer::new(data).collect::<Result<Vec<_>>>()?;
    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

fn regular_run(data: &[u8]) -> usize {
    data.iter()
        .position(|&b| !is_regular(b))
        .unwrap_or(data.len())
}

fn find_line_end(data: &[u8]) -> Option<usize> {
    data.iter().position(|&b| b == b'\r' || b == b'\n')
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Decode name bytes as Latin-1 so every byte maps to one char.
pub(crate) fn name_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
