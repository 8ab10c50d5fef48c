//! Indirect objects, xref table, trailer and the top-level document loop.

use super::pdf_parser::PdfParser;
use crate::error::{PdfError, Result};
use crate::model::{
    Document, IndirectObject, ObjectBody, PdfStream, Trailer, XRefEntry, XRefFlag, XRefTable,
};

impl<'a> PdfParser<'a> {
    /// Parse the whole token sequence into a document.
    ///
    /// Each iteration tries `trailer`, `xref` and `startxref` in that order
    /// and otherwise reads one indirect object.
    pub fn parse_document(&mut self) -> Result<Document> {
        let mut objects = Vec::new();
        let mut xref: Option<XRefTable> = None;
        let mut trailer: Option<Trailer> = None;
        let mut startxref = None;

        while !self.cursor.is_exhausted() {
            if self.expect_keyword(b"trailer")? {
                let parsed = self.parse_trailer()?;
                if trailer.is_some() {
                    tracing::warn!("trailer redefined, keeping the last one");
                }
                trailer = Some(parsed);
                continue;
            }

            if self.expect_keyword(b"xref")? {
                let parsed = self.parse_xref()?;
                if xref.is_some() {
                    tracing::warn!("xref table redefined, keeping the last one");
                }
                xref = Some(parsed);
                continue;
            }

            let pos = self.cursor.byte_pos();
            if self.expect_keyword(b"startxref")? {
                if xref.is_none() {
                    return Err(PdfError::StartXRefWithoutXRef { pos });
                }
                let offset = self.parse_startxref()?;
                tracing::debug!(offset, "parsed startxref");
                startxref = Some(offset);
                continue;
            }

            objects.push(self.parse_indirect_object()?);
        }

        tracing::debug!(
            objects = objects.len(),
            has_xref = xref.is_some(),
            has_trailer = trailer.is_some(),
            "parsed document"
        );
        Ok(Document::new(objects, xref, trailer, startxref))
    }

    /// `objid genno obj body [stream] endobj`.
    pub fn parse_indirect_object(&mut self) -> Result<IndirectObject> {
        let pos = self.cursor.byte_pos();
        let objid = self.must_u32("object number")?;
        let genno = self.must_u32("generation number")?;
        self.must_keyword(b"obj")?;

        let body = if let Some(dict) = self.expect_dictionary()? {
            match self.expect_stream()? {
                Some(token) => ObjectBody::Stream(PdfStream::new(dict, token.bytes(), token.pos())),
                None => ObjectBody::Dictionary(dict),
            }
        } else if let Some(arr) = self.expect_array()? {
            ObjectBody::Array(arr)
        } else {
            return Err(PdfError::MalformedObject {
                objid,
                genno,
                pos: self.cursor.byte_pos(),
            });
        };

        self.must_keyword(b"endobj")?;
        tracing::debug!(objid, genno, "parsed indirect object");
        Ok(IndirectObject {
            objid,
            genno,
            body,
            pos,
        })
    }

    /// Table body after the `xref` keyword: `0 count` then `count` rows of
    /// `offset generation flag`. Row 0 must be `f`, every other row `n`.
    pub fn parse_xref(&mut self) -> Result<XRefTable> {
        let pos = self.cursor.byte_pos();
        let base = self.must_number("xref base object number")?;
        if base != 0 {
            return Err(PdfError::UnsupportedXRefBase { base, pos });
        }
        let count_pos = self.cursor.byte_pos();
        let count = self.must_number("xref entry count")?;
        let count = usize::try_from(count).map_err(|_| PdfError::SyntaxError {
            pos: count_pos,
            msg: format!("negative xref entry count {count}"),
        })?;

        let mut entries = Vec::with_capacity(count.min(1024));
        for entry in 0..count {
            let offset = self.cursor.read()?;
            let generation = self.cursor.read()?;
            let (expected, flag) = if entry == 0 {
                ("f", XRefFlag::Free)
            } else {
                ("n", XRefFlag::InUse)
            };
            let marker = self.cursor.read()?;
            if !marker.is_regular(expected.as_bytes()) {
                return Err(PdfError::InvalidXRefFlag {
                    entry,
                    expected,
                    got: marker.text_lossy().into_owned(),
                    pos: marker.pos(),
                });
            }
            entries.push(XRefEntry::new(
                offset.text_lossy(),
                generation.text_lossy(),
                flag,
            ));
        }

        tracing::debug!(entries = entries.len(), "parsed xref table");
        Ok(XRefTable::new(entries))
    }

    /// Dictionary after the `trailer` keyword.
    pub fn parse_trailer(&mut self) -> Result<Trailer> {
        let pos = self.cursor.byte_pos();
        let dict = self
            .expect_dictionary()?
            .ok_or_else(|| PdfError::SyntaxError {
                pos,
                msg: "expected dictionary after 'trailer'".into(),
            })?;
        tracing::debug!(keys = dict.len(), "parsed trailer");
        Ok(Trailer { dict })
    }

    /// Byte offset after the `startxref` keyword.
    pub fn parse_startxref(&mut self) -> Result<u64> {
        let pos = self.cursor.byte_pos();
        let offset = self.must_number("startxref offset")?;
        u64::try_from(offset).map_err(|_| PdfError::SyntaxError {
            pos,
            msg: format!("negative startxref offset {offset}"),
        })
    }

    fn must_number(&mut self, what: &str) -> Result<i64> {
        let pos = self.cursor.byte_pos();
        self.expect_number()?.ok_or_else(|| PdfError::SyntaxError {
            pos,
            msg: format!("expected {what}"),
        })
    }

    fn must_u32(&mut self, what: &str) -> Result<u32> {
        let pos = self.cursor.byte_pos();
        let n = self.must_number(what)?;
        u32::try_from(n).map_err(|_| PdfError::SyntaxError {
            pos,
            msg: format!("{what} {n} out of range"),
        })
    }

    fn must_keyword(&mut self, keyword: &[u8]) -> Result<()> {
        let pos = self.cursor.byte_pos();
        if self.expect_keyword(keyword)? {
            return Ok(());
        }
        Err(PdfError::SyntaxError {
            pos,
            msg: format!("expected '{}'", String::from_utf8_lossy(keyword)),
        })
    }
}
