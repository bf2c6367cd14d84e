//! Selector candidates for the widget's internal DOM
//!
//! The widget's markup is an external contract we do not control, so each
//! element is located through an ordered list of candidates: the widget's
//! canonical class first, then progressively looser attribute matches.
//! First match wins, which lets a specific selector override a generic one
//! when the widget renders both.

/// Mount point the widget is configured to render into
pub const MOUNT_SELECTOR: &str = "#n8n-chat";

/// Candidates for the widget's window element, most specific first
pub const WINDOW_SELECTORS: &[&str] = &[
    ".n8n-chat-window",
    "[class*=\"chat-window\" i]",
    "[data-testid*=\"chat\" i][role=\"dialog\"]",
];

/// Candidates for the scrollable message body inside the window
pub const BODY_SELECTORS: &[&str] = &[
    ".n8n-chat-body",
    "[class*=\"chat-body\" i]",
    ".n8n-chat-messages",
    "[class*=\"messages\" i]",
];

/// Try each selector in order, returning the first hit
///
/// The query callback runs one selector against whatever scope the caller
/// chose; None from every candidate means "not yet mounted", never an
/// error.
pub fn first_match<T, F>(selectors: &[&str], mut query: F) -> Option<T>
where
    F: FnMut(&str) -> Option<T>,
{
    selectors.iter().find_map(|selector| query(selector))
}
