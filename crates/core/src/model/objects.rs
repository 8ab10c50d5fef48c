//! PDF value types.
//!
//! Values form owned trees: an array or dictionary exclusively owns its
//! children, and a reference is a plain `(objid, genno)` pair that is never
//! resolved by the parser.

use crate::error::{PdfError, Result};
use bytes::Bytes;
use indexmap::IndexMap;

/// Dictionary keyed by the full name text, slash included (e.g. `/Type`).
pub type Dictionary = IndexMap<String, Value>;

/// PDF value - the closed set of kinds this parser recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Base-10 integer
    Integer(i64),
    /// `true` / `false`
    Boolean(bool),
    /// Name object, stored with its leading slash (e.g. `/Catalog`)
    Name(String),
    /// Contents of a `( ... )` literal string, parentheses stripped
    LiteralString(Vec<u8>),
    /// Indirect object reference (`objid genno R`)
    Reference(Reference),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Name -> value mapping
    Dictionary(Dictionary),
}

impl Value {
    /// Get as integer
    pub const fn as_int(&self) -> Result<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(PdfError::TypeError {
                expected: "integer",
                got: self.type_name(),
            }),
        }
    }

    /// Get as boolean
    pub const fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(PdfError::TypeError {
                expected: "boolean",
                got: self.type_name(),
            }),
        }
    }

    /// Get as name, slash included
    pub fn as_name(&self) -> Result<&str> {
        match self {
            Self::Name(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "name",
                got: self.type_name(),
            }),
        }
    }

    /// Get literal string bytes
    pub fn as_literal(&self) -> Result<&[u8]> {
        match self {
            Self::LiteralString(s) => Ok(s),
            _ => Err(PdfError::TypeError {
                expected: "literal string",
                got: self.type_name(),
            }),
        }
    }

    /// Get as object reference
    pub const fn as_reference(&self) -> Result<Reference> {
        match self {
            Self::Reference(r) => Ok(*r),
            _ => Err(PdfError::TypeError {
                expected: "reference",
                got: self.type_name(),
            }),
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Self::Array(arr) => Ok(arr),
            _ => Err(PdfError::TypeError {
                expected: "array",
                got: self.type_name(),
            }),
        }
    }

    /// Get as dictionary
    pub const fn as_dict(&self) -> Result<&Dictionary> {
        match self {
            Self::Dictionary(d) => Ok(d),
            _ => Err(PdfError::TypeError {
                expected: "dictionary",
                got: self.type_name(),
            }),
        }
    }

    /// Get type name for error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Name(_) => "name",
            Self::LiteralString(_) => "literal string",
            Self::Reference(_) => "reference",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
        }
    }
}

/// PDF indirect object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl Reference {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.objid, self.genno)
    }
}

/// PDF stream - dictionary attributes plus the opaque bytes that follow them.
///
/// The bytes are never decoded; filters named in `attrs` are not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfStream {
    /// Stream dictionary attributes
    pub attrs: Dictionary,
    /// Everything between the `stream` keyword and the `endstream` marker
    rawdata: Bytes,
    /// Byte offset of `rawdata` in the parsed input
    pos: usize,
}

impl PdfStream {
    /// Create a new stream.
    pub fn new(attrs: Dictionary, rawdata: impl Into<Bytes>, pos: usize) -> Self {
        Self {
            attrs,
            rawdata: rawdata.into(),
            pos,
        }
    }

    /// Get the raw byte range between `stream` and `endstream`, untouched.
    pub fn get_rawdata(&self) -> &[u8] {
        self.rawdata.as_ref()
    }

    /// Get the stream content without the framing end-of-line markers.
    ///
    /// Drops the CRLF or LF that follows the `stream` keyword and one
    /// end-of-line marker before `endstream`.
    pub fn get_data(&self) -> &[u8] {
        let mut data = self.rawdata.as_ref();
        if let Some(rest) = data.strip_prefix(b"\r\n") {
            data = rest;
        } else if let Some(rest) = data.strip_prefix(b"\n") {
            data = rest;
        }
        if let Some(rest) = data.strip_suffix(b"\r\n") {
            data = rest;
        } else if let Some(rest) = data
            .strip_suffix(b"\n")
            .or_else(|| data.strip_suffix(b"\r"))
        {
            data = rest;
        }
        data
    }

    /// Byte offset of the raw data in the parsed input.
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Get attribute by name (slash included).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}
