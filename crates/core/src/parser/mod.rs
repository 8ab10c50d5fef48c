//! PDF syntax front end: bytes -> tokens -> values -> document.
//!
//! - `charset`: byte classification (whitespace / delimiter / regular)
//! - `lexer`: tokenizer producing Regular, Literal and Stream tokens
//! - `cursor`: read/unread cursor with mark/reset for backtracking
//! - `pdf_parser`: value recognizers with ordered alternatives
//! - `document`: indirect objects, xref, trailer, startxref

pub mod charset;
pub mod cursor;
pub mod document;
pub mod lexer;
pub mod params;
pub mod pdf_parser;

// Re-export main types for convenience
pub use cursor::{Mark, TokenCursor};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use params::ParseOptions;
pub use pdf_parser::{ARRAY_ELEMENT, Alternative, DICT_VALUE, PdfParser};
