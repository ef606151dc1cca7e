//! Text content helpers.

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format a tick value the way a number prints when handed straight to a
/// canvas text call: shortest round-trip digits, no trailing zeros.
///
/// `92.0` prints as `92`, `0.4` as `0.4`; an unrounded accumulation such as
/// `0.1 + 0.2` keeps all of its digits.
pub fn format_label(value: f64) -> String {
    if value == 0.0 {
        // Negative zero prints as "0" too
        "0".to_string()
    } else if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else {
        format!("{}", value)
    }
}
