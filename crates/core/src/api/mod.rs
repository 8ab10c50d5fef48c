//! High-level API module for PDF syntax parsing.
//!
//! # Example
//!
//! ```ignore
//! use pdfsyntax_core::api::parse_document;
//!
//! let pdf_bytes = std::fs::read("document.pdf")?;
//! let doc = parse_document(pdf_bytes, None)?;
//! ```

pub mod builder;
pub mod high_level;

// Re-export for convenience
pub use builder::ParserBuilder;
pub use high_level::{parse_document, tokenize_document};
