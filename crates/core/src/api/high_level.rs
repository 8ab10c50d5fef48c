//! High-level parsing API.
//!
//! Provides the main entry points:
//! - `parse_document()` - Parse PDF syntax into a `Document`
//! - `tokenize_document()` - Produce the raw token stream only

use bytes::Bytes;

use crate::error::{PdfError, Result};
use crate::model::Document;
use crate::parser::{ParseOptions, PdfParser, Token, tokenize};

/// Parse PDF data into a document.
///
/// # Arguments
/// * `pdf_data` - PDF file contents as bytes
/// * `options` - Parse options (None for defaults)
///
/// # Example
/// ```ignore
/// use pdfsyntax_core::api::parse_document;
///
/// let pdf_bytes = std::fs::read("document.pdf")?;
/// let doc = parse_document(pdf_bytes, None)?;
/// for obj in doc.objects() {
///     println!("{} {}", obj.objid, obj.genno);
/// }
/// ```
pub fn parse_document(pdf_data: impl Into<Bytes>, options: Option<&ParseOptions>) -> Result<Document> {
    let options = options.cloned().unwrap_or_default();
    let tokens = tokenize_document(pdf_data, Some(&options))?;
    PdfParser::with_options(&tokens, options).parse_document()
}

/// Tokenize PDF data without parsing it.
///
/// Applies `max_input_len`; nesting limits only matter to the parser.
pub fn tokenize_document(pdf_data: impl Into<Bytes>, options: Option<&ParseOptions>) -> Result<Vec<Token>> {
    let data = pdf_data.into();
    let limit = options.map_or(0, |o| o.max_input_len);
    if limit > 0 && data.len() > limit {
        return Err(PdfError::InputTooLarge {
            len: data.len(),
            limit,
        });
    }
    tokenize(data)
}
