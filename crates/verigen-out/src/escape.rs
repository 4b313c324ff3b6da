//! String-literal escaping for summaries embedded in generated code.

/// Escape `value` for a double-quoted C string literal.
///
/// Backslash, double quote, tab and newline get their short escapes; any
/// other byte outside printable ASCII becomes a three-digit octal escape.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'"' => out.push_str("\\\""),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                out.push('\\');
                out.push((b'0' + ((byte >> 6) & 7)) as char);
                out.push((b'0' + ((byte >> 3) & 7)) as char);
                out.push((b'0' + (byte & 7)) as char);
            }
        }
    }
    out
}
