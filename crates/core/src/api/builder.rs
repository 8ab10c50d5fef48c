//! Builder pattern for configuring a parse.
//!
//! # Example
//! ```ignore
//! use pdfsyntax_core::api::ParserBuilder;
//!
//! let doc = ParserBuilder::new()
//!     .max_depth(16)
//!     .max_input_len(1 << 20)
//!     .parse(pdf_bytes)?;
//! ```

use bytes::Bytes;

use super::high_level::{parse_document, tokenize_document};
use crate::error::Result;
use crate::model::Document;
use crate::parser::{ParseOptions, Token};

/// A builder wrapping `ParseOptions`.
#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    options: ParseOptions,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum array/dictionary nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// Sets the maximum input size in bytes (0 means no limit).
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.options.max_input_len = len;
        self
    }

    /// The options this builder will parse with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `data` into a document.
    pub fn parse(self, data: impl Into<Bytes>) -> Result<Document> {
        parse_document(data, Some(&self.options))
    }

    /// Tokenizes `data` without parsing it.
    pub fn tokenize(self, data: impl Into<Bytes>) -> Result<Vec<Token>> {
        tokenize_document(data, Some(&self.options))
    }
}
