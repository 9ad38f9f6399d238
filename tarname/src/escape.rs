//! Percent-escaping for filename round trips.
//!
//! The encoder escapes with a path-segment set so its output is safe both as
//! a bare filename and as a URL path segment; the decoder reverses it with a
//! strict decode that refuses malformed escapes.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set for composed filenames.
///
/// Everything outside this set is what the decoder's character gate accepts:
/// alphanumerics, the unreserved characters, the disambiguation signal, and
/// the sub-delimiters that are legal in a URL path segment. `@` stays
/// literal so scoped names remain readable; `+` stays literal because semver
/// build metadata uses it.
const PATH_SEGMENT_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'@')
    .remove(b'+')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Percent-encode a composed filename so every character unsafe in a URL
/// path segment is escaped. Non-ASCII input is always escaped.
pub(crate) fn escape_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ESCAPE).to_string()
}

/// Percent-decode a filename, returning `None` for malformed input.
///
/// `percent_decode_str` passes malformed escapes through untouched, so every
/// `%` is checked for two trailing hex digits first; the decoded bytes must
/// also form valid UTF-8.
pub(crate) fn percent_decode_strict(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
