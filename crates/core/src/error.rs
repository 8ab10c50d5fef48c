//! Error types for pdfsyntax parsing.

use thiserror::Error;

/// Fatal error raised while lexing or parsing PDF syntax.
///
/// Speculative mismatches never surface here: recognizers report them as
/// `Ok(None)` and leave the cursor untouched. A `PdfError` always aborts the
/// whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    #[error("unexpected end of input at position {pos}")]
    UnexpectedEof { pos: usize },

    #[error("unterminated literal string starting at position {pos}")]
    UnterminatedString { pos: usize },

    #[error("invalid token at position {pos}: {msg}")]
    TokenError { pos: usize, msg: String },

    #[error("stream starting at position {pos} has no endstream marker")]
    MissingEndstream { pos: usize },

    #[error("token stream exhausted at position {pos}")]
    EndOfTokens { pos: usize },

    #[error("PDF syntax error at position {pos}: {msg}")]
    SyntaxError { pos: usize, msg: String },

    #[error("object {objid} {genno} at position {pos} has no dictionary or array body")]
    MalformedObject { objid: u32, genno: u32, pos: usize },

    #[error("xref section at position {pos} starts at object {base}, only 0 is supported")]
    UnsupportedXRefBase { base: i64, pos: usize },

    #[error("xref entry {entry} at position {pos}: expected flag {expected:?}, got {got:?}")]
    InvalidXRefFlag {
        entry: usize,
        expected: &'static str,
        got: String,
        pos: usize,
    },

    #[error("startxref at position {pos} appears before any xref table")]
    StartXRefWithoutXRef { pos: usize },

    #[error("nesting deeper than {limit} levels at position {pos}")]
    NestingTooDeep { limit: usize, pos: usize },

    #[error("input of {len} bytes exceeds the configured limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    #[error("type error: expected {expected}, got {got}")]
    TypeError {
        expected: &'static str,
        got: &'static str,
    },
}

/// Convenience Result type alias for PdfError.
pub type Result<T> = std::result::Result<T, PdfError>;
