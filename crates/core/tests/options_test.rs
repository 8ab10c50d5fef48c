//! Parse options and the builder.

use pdfsyntax_core::{ParseOptions, ParserBuilder, PdfError, TokenKind, parse_document};

#[test]
fn test_defaults() {
    let options = ParseOptions::default();
    assert_eq!(options.max_depth, 64);
    assert_eq!(options.max_input_len, 0);
    assert_eq!(ParserBuilder::new().options(), &options);
}

#[test]
fn test_builder_sets_limits() {
    let builder = ParserBuilder::new().max_depth(3).max_input_len(1024);
    assert_eq!(builder.options().max_depth, 3);
    assert_eq!(builder.options().max_input_len, 1024);
}

#[test]
fn test_builder_parse() {
    let doc = ParserBuilder::new()
        .parse(&b"4 0 obj << /Kids [1 0 R] >> endobj"[..])
        .unwrap();
    assert_eq!(doc.objects()[0].objid, 4);
}

#[test]
fn test_builder_tokenize() {
    let tokens = ParserBuilder::new()
        .tokenize(&b"(hi) /N 1"[..])
        .unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Literal, TokenKind::Regular, TokenKind::Regular]
    );
}

#[test]
fn test_depth_limit() {
    let data: &'static [u8] = b"1 0 obj << /A [<< /B [1] >>] >> endobj";
    assert!(ParserBuilder::new().max_depth(4).parse(data).is_ok());
    assert!(matches!(
        ParserBuilder::new().max_depth(3).parse(data),
        Err(PdfError::NestingTooDeep { limit: 3, .. })
    ));
}

#[test]
fn test_depth_counts_dictionaries() {
    let data: &'static [u8] = b"1 0 obj << /A << /B [1] >> >> endobj";
    assert!(matches!(
        ParserBuilder::new().max_depth(2).parse(data),
        Err(PdfError::NestingTooDeep { limit: 2, .. })
    ));
}

#[test]
fn test_input_limit() {
    let data: &'static [u8] = b"1 0 obj [] endobj";
    let options = ParseOptions {
        max_input_len: data.len(),
        ..ParseOptions::default()
    };
    assert!(parse_document(data, Some(&options)).is_ok());
    assert_eq!(
        ParserBuilder::new().max_input_len(8).parse(data),
        Err(PdfError::InputTooLarge { len: 17, limit: 8 })
    );
}
