//! PDF character classes (whitespace, delimiter, regular).

/// NUL, TAB, LF, FF, CR, SPACE.
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b'\x00' | b'\t' | b'\n' | b'\x0c' | b'\r' | b' ')
}

pub const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

/// Anything that is neither whitespace nor a delimiter.
pub const fn is_regular(b: u8) -> bool {
    !is_delimiter(b) && !is_whitespace(b)
}
