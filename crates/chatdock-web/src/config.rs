//! Deployment configuration
//!
//! Per-site knobs live here so a deployment edits one file: the webhook
//! endpoint, the widget texts, and the optional watermark image.

use chatdock_core::locator::MOUNT_SELECTOR;
use chatdock_core::{LocaleText, WidgetOptions};

/// Chat trigger webhook this deployment talks to
pub const WEBHOOK_URL: &str = "https://chat.example.org/webhook/chat";

/// Watermark image shown behind the messages, empty to disable
pub const WATERMARK_URL: &str = "./assets/watermark.png";

/// Widget header title
pub const TITLE: &str = "Welcome 👋";

/// Widget header subtitle
pub const SUBTITLE: &str = "Ask your question, we are happy to help!";

/// Full options handed to the widget factory
pub fn widget_options() -> WidgetOptions {
    WidgetOptions::window_mode(WEBHOOK_URL, MOUNT_SELECTOR)
        .with_initial_messages(&["Hi! How can I help you today?"])
        .with_locale(
            "en",
            LocaleText {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
                input_placeholder: "Type your message here…".to_string(),
                get_started: "New conversation".to_string(),
                footer: String::new(),
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_target_the_mount_point() {
        let options = widget_options();
        assert_eq!(options.target, MOUNT_SELECTOR);
        assert_eq!(options.webhook_url, WEBHOOK_URL);
        assert!(options.i18n.contains_key("en"));
    }
}
