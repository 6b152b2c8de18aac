//! Text helpers for user supplied fields.

/// Keep at most `max` characters of `s`.
///
/// Counts `char`s rather than bytes so a multi-byte character is never split.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
