//! Code point aware length and truncation helpers.
//!
//! Channel limits count Unicode scalar values, not bytes, so every length
//! check in the composer goes through here.

/// Length of `s` in code points
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Longest prefix of `s` holding at most `max_chars` code points
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
