//! C++ string-literal escaping for template text.
//!
//! Every literal byte of the template passes through here on its way into
//! the pending text buffer, so the buffer is always ready to be wrapped in
//! double quotes verbatim.
//
//  Escape table:
//
//      named      \r \n \f \t \v \0 \" \\ \a \b
//      hex        \xHH   for any other byte < 0x20 or > 0x7F
//      verbatim   everything else

/// Append the string-literal-safe spelling of `byte` to `buf`.
///
/// Total over all 256 byte values; cannot fail.
pub fn escape_into(buf: &mut String, byte: u8) {
    match byte {
        b'\r' => buf.push_str("\\r"),
        b'\n' => buf.push_str("\\n"),
        0x0c => buf.push_str("\\f"),
        b'\t' => buf.push_str("\\t"),
        0x0b => buf.push_str("\\v"),
        0x00 => buf.push_str("\\0"),
        b'"' => buf.push_str("\\\""),
        b'\\' => buf.push_str("\\\\"),
        0x07 => buf.push_str("\\a"),
        0x08 => buf.push_str("\\b"),
        b if b < 0x20 || b > 0x7f => buf.push_str(&format!("\\x{b:02x}")),
        b => buf.push(b as char),
    }
}
