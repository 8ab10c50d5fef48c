//! PDF model types - values and the assembled document.
//!
//! This module contains the core PDF data model types:
//! - `objects` - PDF value types (Value, Dictionary, Reference, PdfStream)
//! - `document` - Document-level types (IndirectObject, XRefTable, Trailer, Document)

pub mod document;
pub mod objects;

// Re-export main types for convenience
pub use document::{Document, IndirectObject, ObjectBody, Trailer, XRefEntry, XRefFlag, XRefTable};
pub use objects::{Dictionary, PdfStream, Reference, Value};
