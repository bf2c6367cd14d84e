//! Watermark style declarations for the message body

/// Normalize a configured watermark URL
///
/// An empty or whitespace-only URL disables the feature.
pub fn effective_url(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Build the `background-image` value for a watermark URL
pub fn background_image(url: &str) -> String {
    format!("url(\"{}\")", url.replace('"', "\\\""))
}

/// Full set of style declarations applied to the message body
///
/// The image is centered, fully contained (no cropping), scrolls with the
/// messages, and stays inside the padded content box.
pub fn declarations(url: &str) -> Vec<(&'static str, String)> {
    vec![
        ("background-image", background_image(url)),
        ("background-repeat", "no-repeat".to_string()),
        ("background-position", "center center".to_string()),
        ("background-size", "contain".to_string()),
        ("background-attachment", "local".to_string()),
        ("background-origin", "content-box".to_string()),
        ("background-clip", "content-box".to_string()),
    ]
}
