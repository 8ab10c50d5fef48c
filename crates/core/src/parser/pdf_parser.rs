//! Recursive-descent value parser with backtracking.
//!
//! Every `expect_*` recognizer follows the same contract: on a match it
//! returns `Ok(Some(value))` with the cursor after the value; on a mismatch
//! it returns `Ok(None)` with the cursor exactly where it started. `Err` is
//! reserved for fatal violations after a production has committed (e.g. a
//! dictionary whose `>>` is missing).

use super::cursor::TokenCursor;
use super::lexer::{Token, TokenKind, name_from_bytes};
use super::params::ParseOptions;
use crate::error::{PdfError, Result};
use crate::model::{Dictionary, Reference, Value};

/// Value kinds, named so dispatch sites can list them in attempt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    Reference,
    Name,
    Number,
    Boolean,
    Array,
    LiteralString,
    Dictionary,
}

/// Attempt order inside `[ ... ]`. Booleans, strings and nested arrays
/// are not array elements, so an array holding one is a soft miss.
///
/// Reference precedes Number everywhere: a bare integer is a complete
/// value on its own, so the two following tokens have to be inspected
/// before `7` can be taken as a number rather than the start of `7 0 R`.
pub const ARRAY_ELEMENT: &[Alternative] = &[
    Alternative::Reference,
    Alternative::Name,
    Alternative::Number,
    Alternative::Dictionary,
];

/// Attempt order for the value after a dictionary key.
pub const DICT_VALUE: &[Alternative] = &[
    Alternative::Reference,
    Alternative::Number,
    Alternative::Boolean,
    Alternative::Array,
    Alternative::Name,
    Alternative::LiteralString,
    Alternative::Dictionary,
];

/// PDF parser over a token sequence.
///
/// Value recognizers live here; indirect objects, xref, trailer and the
/// document loop are in `document.rs`.
pub struct PdfParser<'a> {
    pub(super) cursor: TokenCursor<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> PdfParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            options,
            depth: 0,
        }
    }

    /// The underlying token cursor.
    pub const fn cursor(&self) -> &TokenCursor<'a> {
        &self.cursor
    }

    /// Read a token and keep it only if `accept` says so.
    fn expect_with<T>(&mut self, accept: impl FnOnce(&'a Token) -> Option<T>) -> Result<Option<T>> {
        let token = self.cursor.read()?;
        let value = accept(token);
        if value.is_none() {
            self.cursor.unread();
        }
        Ok(value)
    }

    /// Match a Regular token with exactly this text.
    pub fn expect_keyword(&mut self, keyword: &[u8]) -> Result<bool> {
        Ok(self
            .expect_with(|t| t.is_regular(keyword).then_some(()))?
            .is_some())
    }

    /// Base-10 integer with an optional leading `-`.
    pub fn expect_number(&mut self) -> Result<Option<i64>> {
        self.expect_with(|t| match t.kind() {
            TokenKind::Regular => parse_integer(t.text()),
            _ => None,
        })
    }

    pub fn expect_bool(&mut self) -> Result<Option<bool>> {
        self.expect_with(|t| match t.kind() {
            TokenKind::Regular if t.text() == b"true" => Some(true),
            TokenKind::Regular if t.text() == b"false" => Some(false),
            _ => None,
        })
    }

    /// Name, returned with its leading slash.
    pub fn expect_name(&mut self) -> Result<Option<String>> {
        self.expect_with(|t| match t.kind() {
            TokenKind::Regular if t.text().starts_with(b"/") => Some(name_from_bytes(t.text())),
            _ => None,
        })
    }

    pub fn expect_literal(&mut self) -> Result<Option<Vec<u8>>> {
        self.expect_with(|t| match t.kind() {
            TokenKind::Literal => Some(t.text().to_vec()),
            _ => None,
        })
    }

    /// Raw stream body token, as emitted by the lexer.
    pub fn expect_stream(&mut self) -> Result<Option<&'a Token>> {
        self.expect_with(|t| (t.kind() == TokenKind::Stream).then_some(t))
    }

    /// `objid genno R`. All three tokens are consumed or none are.
    pub fn expect_reference(&mut self) -> Result<Option<Reference>> {
        let mark = self.cursor.mark();
        let Some(objid) = self.expect_number()? else {
            return Ok(None);
        };
        let Some(genno) = self.expect_number()? else {
            self.cursor.reset(mark);
            return Ok(None);
        };
        if !self.expect_keyword(b"R")? {
            self.cursor.reset(mark);
            return Ok(None);
        }
        match (u32::try_from(objid), u32::try_from(genno)) {
            (Ok(objid), Ok(genno)) => Ok(Some(Reference::new(objid, genno))),
            _ => {
                self.cursor.reset(mark);
                Ok(None)
            }
        }
    }

    /// `[ element* ]`. A missing `]` is a soft failure.
    pub fn expect_array(&mut self) -> Result<Option<Vec<Value>>> {
        let mark = self.cursor.mark();
        if !self.expect_keyword(b"[")? {
            return Ok(None);
        }
        self.enter_nesting()?;

        let mut arr = Vec::new();
        while let Some(value) = self.parse_value(ARRAY_ELEMENT)? {
            arr.push(value);
        }
        self.depth -= 1;

        if !self.expect_keyword(b"]")? {
            self.cursor.reset(mark);
            return Ok(None);
        }
        Ok(Some(arr))
    }

    /// `<< (/Key value)* >>`. Once `<<` is seen, a key without a value or a
    /// missing `>>` is fatal.
    pub fn expect_dictionary(&mut self) -> Result<Option<Dictionary>> {
        if !self.expect_keyword(b"<<")? {
            return Ok(None);
        }
        self.enter_nesting()?;

        let mut dict = Dictionary::new();
        while let Some(key) = self.expect_name()? {
            let pos = self.cursor.byte_pos();
            let Some(value) = self.parse_value(DICT_VALUE)? else {
                return Err(PdfError::SyntaxError {
                    pos,
                    msg: format!("dictionary key {key} has no value"),
                });
            };
            dict.insert(key, value);
        }
        self.depth -= 1;

        let pos = self.cursor.byte_pos();
        if !self.expect_keyword(b">>")? {
            return Err(PdfError::SyntaxError {
                pos,
                msg: "expected '>>' to close dictionary".into(),
            });
        }
        Ok(Some(dict))
    }

    /// Try each alternative in order; the first match wins.
    pub fn parse_value(&mut self, alternatives: &[Alternative]) -> Result<Option<Value>> {
        for &alt in alternatives {
            if let Some(value) = self.try_alternative(alt)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn try_alternative(&mut self, alt: Alternative) -> Result<Option<Value>> {
        Ok(match alt {
            Alternative::Reference => self.expect_reference()?.map(Value::Reference),
            Alternative::Name => self.expect_name()?.map(Value::Name),
            Alternative::Number => self.expect_number()?.map(Value::Integer),
            Alternative::Boolean => self.expect_bool()?.map(Value::Boolean),
            Alternative::Array => self.expect_array()?.map(Value::Array),
            Alternative::LiteralString => self.expect_literal()?.map(Value::LiteralString),
            Alternative::Dictionary => self.expect_dictionary()?.map(Value::Dictionary),
        })
    }

    fn enter_nesting(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(PdfError::NestingTooDeep {
                limit: self.options.max_depth,
                pos: self.cursor.byte_pos(),
            });
        }
        self.depth += 1;
        Ok(())
    }
}

/// Optional `-` followed by one or more ASCII digits, fitting in `i64`.
fn parse_integer(text: &[u8]) -> Option<i64> {
    let digits = text.strip_prefix(b"-").unwrap_or(text);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(text).ok()?.parse().ok()
}
