//! Size variable names and pixel value formatting

/// Custom property holding the widget window width
pub const WIDTH_VAR: &str = "--chat--window--width";

/// Custom property holding the widget window height
pub const HEIGHT_VAR: &str = "--chat--window--height";

/// Format a pixel value for a style property write
#[inline]
pub fn format_px(px: f64) -> String {
    format!("{}px", px.round() as i64)
}

/// Parse the leading integer of a style property value
///
/// Matches parseInt semantics: leading whitespace and sign are accepted,
/// parsing stops at the first non-digit, and a value with no leading
/// digits (including an empty or unset property) yields None.
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let (negative, digits_onward) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits_onward
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits_onward.len());
    if end == 0 {
        return None;
    }

    let magnitude: f64 = digits_onward[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
