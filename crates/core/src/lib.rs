//! pdfsyntax - reads the textual syntax of a PDF file into a structured
//! document: indirect objects, the cross-reference table, and the trailer.

pub mod api;
pub mod error;
pub mod model;
pub mod parser;

pub use api::{ParserBuilder, parse_document, tokenize_document};
pub use error::{PdfError, Result};
pub use model::{Dictionary, Document, IndirectObject, ObjectBody, Reference, Value};
pub use parser::{ParseOptions, Token, TokenKind};
