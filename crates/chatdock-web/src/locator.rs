//! Widget element discovery
//!
//! Runs the core selector tables against the live document: each
//! candidate is tried inside the mount root first, then document-wide.
//! None means "not yet mounted", which callers treat as retry-later.

use chatdock_core::locator::{first_match, BODY_SELECTORS, MOUNT_SELECTOR, WINDOW_SELECTORS};
use web_sys::Element;

use crate::dom;

/// Find the widget's window element
pub(crate) fn find_chat_window() -> Option<Element> {
    let document = dom::document().ok()?;
    let root = document.query_selector(MOUNT_SELECTOR).ok().flatten();

    first_match(WINDOW_SELECTORS, |selector| {
        root.as_ref()
            .and_then(|r| r.query_selector(selector).ok().flatten())
            .or_else(|| document.query_selector(selector).ok().flatten())
    })
}

/// Find the scrollable message body inside the widget window
pub(crate) fn find_chat_body(win: &Element) -> Option<Element> {
    let document = dom::document().ok()?;

    first_match(BODY_SELECTORS, |selector| {
        win.query_selector(selector)
            .ok()
            .flatten()
            .or_else(|| document.query_selector(selector).ok().flatten())
    })
}
