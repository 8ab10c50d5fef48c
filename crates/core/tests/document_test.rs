//! Whole-document parsing.

use pdfsyntax_core::model::XRefFlag;
use pdfsyntax_core::{ObjectBody, PdfError, Reference, Value, parse_document};

const MINIMAL: &[u8] = b"1 0 obj<< /Length 4 >>stream\nABCD\nendstream endobj\n\
xref\n0 1\n0000000000 65535 f\ntrailer<< /Size 1 >>\nstartxref\n9\n";

#[test]
fn test_minimal_document() {
    let doc = parse_document(MINIMAL, None).unwrap();

    assert_eq!(doc.objects().len(), 1);
    let obj = &doc.objects()[0];
    assert_eq!((obj.objid, obj.genno), (1, 0));
    assert_eq!(obj.pos, 0);

    let stream = obj.stream().unwrap();
    assert_eq!(stream.get("/Length"), Some(&Value::Integer(4)));
    assert_eq!(stream.attrs.len(), 1);
    assert_eq!(stream.get_rawdata(), b"\nABCD\n");
    assert_eq!(stream.get_data(), b"ABCD");
    assert_eq!(stream.pos(), 28);

    let xref = doc.xref().unwrap();
    assert_eq!(xref.len(), 1);
    let entry = xref.get(0).unwrap();
    assert_eq!(entry.flag(), XRefFlag::Free);
    assert_eq!(entry.offset_token(), "0000000000");
    assert_eq!(entry.generation(), Some(65535));

    assert_eq!(doc.trailer().unwrap().get("/Size"), Some(&Value::Integer(1)));
    assert_eq!(doc.startxref(), Some(9));
}

#[test]
fn test_object_order_and_lookup() {
    let data: &'static [u8] = b"%PDF-1.4\n\
        1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n\
        2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj\n\
        3 0 obj [0 0 612 792] endobj\n\
        2 1 obj << /Type /Pages /Count 0 >> endobj\n";
    let doc = parse_document(data, None).unwrap();

    let ids: Vec<(u32, u32)> = doc.objects().iter().map(|o| (o.objid, o.genno)).collect();
    assert_eq!(ids, vec![(1, 0), (2, 0), (3, 0), (2, 1)]);

    let catalog = doc.get_object(1).unwrap().dict().unwrap();
    let pages_ref = catalog["/Pages"].as_reference().unwrap();
    let pages = doc.resolve(&pages_ref).unwrap();
    assert_eq!(pages.reference(), Reference::new(2, 0));
    assert_eq!(pages.dict().unwrap()["/Count"], Value::Integer(1));

    // the later definition of object 2 wins a number-only lookup
    assert_eq!(doc.get_object(2).unwrap().genno, 1);
    assert!(matches!(doc.get_object(3).unwrap().body, ObjectBody::Array(_)));
    assert!(doc.get_object(4).is_none());
    assert!(doc.resolve(&Reference::new(3, 5)).is_none());
}

#[test]
fn test_object_without_body_is_malformed() {
    assert_eq!(
        parse_document(&b"1 0 obj endobj"[..], None),
        Err(PdfError::MalformedObject {
            objid: 1,
            genno: 0,
            pos: 8
        })
    );
}

#[test]
fn test_array_with_string_is_malformed() {
    assert_eq!(
        parse_document(&b"1 0 obj [(a)] endobj"[..], None),
        Err(PdfError::MalformedObject {
            objid: 1,
            genno: 0,
            pos: 8
        })
    );
    assert!(matches!(
        parse_document(&b"1 0 obj [(a) true] endobj"[..], None),
        Err(PdfError::MalformedObject { objid: 1, .. })
    ));
}

#[test]
fn test_stream_only_follows_dictionary() {
    assert!(matches!(
        parse_document(&b"1 0 obj [1] stream\nx\nendstream endobj"[..], None),
        Err(PdfError::SyntaxError { pos: 18, .. })
    ));
}

#[test]
fn test_stray_token_is_fatal() {
    assert!(matches!(
        parse_document(&b"1 0 obj [] endobj garbage"[..], None),
        Err(PdfError::SyntaxError { pos: 18, .. })
    ));
}

#[test]
fn test_startxref_requires_xref() {
    assert_eq!(
        parse_document(&b"startxref\n9\n"[..], None),
        Err(PdfError::StartXRefWithoutXRef { pos: 0 })
    );
}

#[test]
fn test_xref_base_must_be_zero() {
    assert_eq!(
        parse_document(&b"xref\n1 1\n0000000000 65535 f\n"[..], None),
        Err(PdfError::UnsupportedXRefBase { base: 1, pos: 5 })
    );
}

#[test]
fn test_xref_first_entry_must_be_free() {
    assert!(matches!(
        parse_document(&b"xref 0 1 0000000000 65535 n"[..], None),
        Err(PdfError::InvalidXRefFlag { entry: 0, expected: "f", .. })
    ));
}

#[test]
fn test_xref_in_use_entries() {
    let data: &'static [u8] =
        b"xref\n0 3\n0000000000 65535 f \n0000000017 00000 n \n0000000081 00002 n \n";
    let doc = parse_document(data, None).unwrap();
    let xref = doc.xref().unwrap();
    let entries: Vec<(u32, Option<u64>, bool)> = xref
        .iter()
        .map(|(id, e)| (id, e.offset(), e.is_free()))
        .collect();
    assert_eq!(
        entries,
        vec![(0, Some(0), true), (1, Some(17), false), (2, Some(81), false)]
    );
    assert_eq!(xref.get(2).unwrap().generation(), Some(2));
    assert!(doc.trailer().is_none());
}

#[test]
fn test_truncated_xref_is_fatal() {
    assert!(matches!(
        parse_document(&b"xref 0 2 0000000000 65535 f"[..], None),
        Err(PdfError::EndOfTokens { .. })
    ));
}

#[test]
fn test_trailer_requires_dictionary() {
    assert!(matches!(
        parse_document(&b"trailer [1]"[..], None),
        Err(PdfError::SyntaxError { pos: 8, .. })
    ));
}

#[test]
fn test_later_trailer_replaces_earlier() {
    let data: &'static [u8] = b"trailer << /Size 1 >> trailer << /Size 2 /Prev 9 >>";
    let doc = parse_document(data, None).unwrap();
    let trailer = doc.trailer().unwrap();
    assert_eq!(trailer.get("/Size"), Some(&Value::Integer(2)));
    assert_eq!(trailer.dict.len(), 2);
}

#[test]
fn test_negative_startxref_is_fatal() {
    assert!(matches!(
        parse_document(&b"xref 0 0 startxref -1"[..], None),
        Err(PdfError::SyntaxError { pos: 19, .. })
    ));
}
