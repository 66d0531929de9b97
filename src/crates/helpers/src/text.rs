//! String helpers. All operate on Unicode scalar values, never bytes.

/// Upper-case the first character, leaving the rest unchanged
///
/// ```rust
/// use helpers::text::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reverse a string by character
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Whether `s` is empty or whitespace only
pub fn is_empty(s: &str) -> bool {
    s.trim().is_empty()
}
