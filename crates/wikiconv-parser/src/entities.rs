//! HTML entity encoding
//!
//! Preformatted payloads are entity-encoded at parse time so markup
//! metacharacters inside them render literally downstream.

/// Encode the HTML metacharacters `& < > "` in a string.
///
/// The ampersand is encoded first by virtue of the single pass, so
/// already-encoded input is double-encoded rather than corrupted.
pub fn encode_html_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}
