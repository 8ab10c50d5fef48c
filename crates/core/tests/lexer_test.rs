//! Tokenizer behavior over whole inputs.

use pdfsyntax_core::PdfError;
use pdfsyntax_core::parser::{Lexer, Token, TokenKind, tokenize};

fn texts(tokens: &[Token]) -> Vec<Vec<u8>> {
    tokens.iter().map(|t| t.text().to_vec()).collect()
}

#[test]
fn test_object_header_tokens() {
    let tokens = tokenize(&b"12 0 obj<</Type/Catalog/Pages 2 0 R>>endobj"[..]).unwrap();
    let got = texts(&tokens);
    let expected: Vec<&[u8]> = vec![
        &b"12"[..], b"0", b"obj", b"<<", b"/Type", b"/Catalog", b"/Pages", b"2", b"0", b"R", b">>",
        b"endobj",
    ];
    assert_eq!(got, expected);
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::Regular));
}

#[test]
fn test_stream_body_is_exact_input_slice() {
    let data: &'static [u8] = b"<< /Length 9 >>stream\r\n(x) [ %y\r\nendstream\nendobj";
    let tokens = tokenize(data).unwrap();

    let stream = tokens
        .iter()
        .find(|t| t.kind() == TokenKind::Stream)
        .unwrap();
    assert_eq!(stream.text(), &data[stream.pos()..stream.pos() + stream.text().len()]);
    assert_eq!(stream.text(), b"\r\n(x) [ %y\r\n");
    // the body is opaque: its parentheses and comment produce no tokens
    assert_eq!(tokens.last().unwrap().text(), b"endobj");
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_comments_are_invisible() {
    let with_comment = tokenize(&b"1 0 obj % a comment [ ( <\n<< >> endobj"[..]).unwrap();
    let without = tokenize(&b"1 0 obj\n<< >> endobj"[..]).unwrap();
    assert_eq!(texts(&with_comment), texts(&without));
}

#[test]
fn test_comment_ends_at_carriage_return() {
    let tokens = tokenize(&b"%PDF-1.7\r1 0 obj"[..]).unwrap();
    assert_eq!(tokens[0].text(), b"1");
    assert_eq!(tokens[0].pos(), 9);
}

#[test]
fn test_lone_angle_bracket_is_fatal() {
    assert!(matches!(
        tokenize(&b"<< /A <x> >>"[..]),
        Err(PdfError::TokenError { pos: 6, .. })
    ));
    assert!(matches!(
        tokenize(&b"<< /A 1 > x"[..]),
        Err(PdfError::TokenError { pos: 8, .. })
    ));
    assert_eq!(
        tokenize(&b"1 0 obj <"[..]),
        Err(PdfError::UnexpectedEof { pos: 9 })
    );
}

#[test]
fn test_unterminated_literal_is_fatal() {
    assert_eq!(
        tokenize(&b"[ (abc"[..]),
        Err(PdfError::UnterminatedString { pos: 2 })
    );
}

#[test]
fn test_missing_endstream_is_fatal() {
    assert_eq!(
        tokenize(&b"<< >>stream\nABCD endobj"[..]),
        Err(PdfError::MissingEndstream { pos: 5 })
    );
}

#[test]
fn test_lexer_stops_after_error() {
    let mut lexer = Lexer::new(&b"1 ) 2"[..]);
    assert_eq!(lexer.next().unwrap().unwrap().text(), b"1");
    assert!(matches!(
        lexer.next(),
        Some(Err(PdfError::TokenError { pos: 2, .. }))
    ));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert_eq!(lexer.tell(), 5);

    let results: Vec<_> = Lexer::new(&b")"[..]).take(5).collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

#[test]
fn test_empty_and_blank_inputs() {
    assert!(tokenize(&b""[..]).unwrap().is_empty());
    assert!(tokenize(&b" \t\r\n\x0c\x00% only a comment"[..]).unwrap().is_empty());
}
