//! Document-level model: indirect objects, xref table, trailer.

use super::objects::{Dictionary, PdfStream, Reference, Value};

/// Body of an indirect object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBody {
    Dictionary(Dictionary),
    Array(Vec<Value>),
    /// Dictionary followed by a `stream ... endstream` section
    Stream(PdfStream),
}

/// An `objid genno obj ... endobj` unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndirectObject {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
    pub body: ObjectBody,
    /// Byte offset of the object number token
    pub pos: usize,
}

impl IndirectObject {
    /// The reference that points at this object.
    pub const fn reference(&self) -> Reference {
        Reference::new(self.objid, self.genno)
    }

    /// The dictionary body, or the stream's attribute dictionary.
    pub const fn dict(&self) -> Option<&Dictionary> {
        match &self.body {
            ObjectBody::Dictionary(d) => Some(d),
            ObjectBody::Stream(s) => Some(&s.attrs),
            ObjectBody::Array(_) => None,
        }
    }

    pub fn array(&self) -> Option<&[Value]> {
        match &self.body {
            ObjectBody::Array(a) => Some(a),
            _ => None,
        }
    }

    pub const fn stream(&self) -> Option<&PdfStream> {
        match &self.body {
            ObjectBody::Stream(s) => Some(s),
            _ => None,
        }
    }
}

/// In-use / free marker of an xref entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XRefFlag {
    /// `f`
    Free,
    /// `n`
    InUse,
}

impl XRefFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "f",
            Self::InUse => "n",
        }
    }
}

/// One row of a classic xref table, kept as the raw tokens it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRefEntry {
    offset_token: String,
    generation_token: String,
    flag: XRefFlag,
}

impl XRefEntry {
    pub fn new(
        offset_token: impl Into<String>,
        generation_token: impl Into<String>,
        flag: XRefFlag,
    ) -> Self {
        Self {
            offset_token: offset_token.into(),
            generation_token: generation_token.into(),
            flag,
        }
    }

    /// The offset exactly as written (normally 10 digits).
    pub fn offset_token(&self) -> &str {
        &self.offset_token
    }

    pub fn generation_token(&self) -> &str {
        &self.generation_token
    }

    pub const fn flag(&self) -> XRefFlag {
        self.flag
    }

    pub fn is_free(&self) -> bool {
        self.flag == XRefFlag::Free
    }

    /// Byte offset, if the raw token is a valid decimal number.
    pub fn offset(&self) -> Option<u64> {
        self.offset_token.parse().ok()
    }

    /// Generation number, if the raw token is a valid decimal number.
    pub fn generation(&self) -> Option<u32> {
        self.generation_token.parse().ok()
    }
}

/// Cross-reference table for a single section starting at object 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XRefTable {
    entries: Vec<XRefEntry>,
}

impl XRefTable {
    pub(crate) const fn new(entries: Vec<XRefEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[XRefEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an object number (the section base is always 0).
    pub fn get(&self, objid: u32) -> Option<&XRefEntry> {
        self.entries.get(objid as usize)
    }

    /// Iterate `(objid, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &XRefEntry)> + '_ {
        (0u32..).zip(self.entries.iter())
    }
}

/// Trailer dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailer {
    pub dict: Dictionary,
}

impl Trailer {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.dict.get(name)
    }
}

/// A parsed PDF body: objects in file order plus the optional xref,
/// trailer and startxref sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    objects: Vec<IndirectObject>,
    xref: Option<XRefTable>,
    trailer: Option<Trailer>,
    startxref: Option<u64>,
}

impl Document {
    pub(crate) const fn new(
        objects: Vec<IndirectObject>,
        xref: Option<XRefTable>,
        trailer: Option<Trailer>,
        startxref: Option<u64>,
    ) -> Self {
        Self {
            objects,
            xref,
            trailer,
            startxref,
        }
    }

    /// All indirect objects, in file order. Repeated object numbers are kept.
    pub fn objects(&self) -> &[IndirectObject] {
        &self.objects
    }

    pub const fn xref(&self) -> Option<&XRefTable> {
        self.xref.as_ref()
    }

    pub const fn trailer(&self) -> Option<&Trailer> {
        self.trailer.as_ref()
    }

    pub const fn startxref(&self) -> Option<u64> {
        self.startxref
    }

    /// Last object appended with this number, whatever its generation.
    pub fn get_object(&self, objid: u32) -> Option<&IndirectObject> {
        self.objects.iter().rev().find(|obj| obj.objid == objid)
    }

    /// Last object matching both number and generation of `r`.
    pub fn resolve(&self, r: &Reference) -> Option<&IndirectObject> {
        self.objects
            .iter()
            .rev()
            .find(|obj| obj.objid == r.objid && obj.genno == r.genno)
    }
}
