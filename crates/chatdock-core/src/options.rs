//! Widget bootstrap configuration
//!
//! Serialized with serde and handed to the widget factory as a plain JS
//! object, so field names follow the widget's camelCase API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-language text overrides for the widget chrome
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleText {
    /// Heading shown in the widget header
    pub title: String,
    /// Subheading under the title
    pub subtitle: String,
    /// Placeholder in the message input
    pub input_placeholder: String,
    /// Label on the restart-conversation control
    pub get_started: String,
    /// Footer text, empty to hide
    pub footer: String,
}

/// Initialization options passed to the external widget factory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Chat backend endpoint
    pub webhook_url: String,
    /// Display mode, always "window" here
    pub mode: String,
    /// Mount selector the widget renders into
    pub target: String,
    /// Restore the previous chat session on load
    pub load_previous_session: bool,
    /// Show the welcome screen before the first message
    pub show_welcome_screen: bool,
    /// Language used when no override matches
    pub default_language: String,
    /// Greeting messages shown before any user input
    pub initial_messages: Vec<String>,
    /// Text overrides keyed by language code
    pub i18n: BTreeMap<String, LocaleText>,
    /// Stream responses token by token
    pub enable_streaming: bool,
}

impl WidgetOptions {
    /// Options for a windowed widget on the given endpoint and mount point
    pub fn window_mode(webhook_url: &str, target: &str) -> Self {
        Self {
            webhook_url: webhook_url.to_string(),
            mode: "window".to_string(),
            target: target.to_string(),
            load_previous_session: true,
            show_welcome_screen: false,
            default_language: "en".to_string(),
            initial_messages: Vec::new(),
            i18n: BTreeMap::new(),
            enable_streaming: false,
        }
    }

    /// Add greeting messages
    pub fn with_initial_messages(mut self, messages: &[&str]) -> Self {
        self.initial_messages = messages.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Add a text override for a language code
    pub fn with_locale(mut self, language: &str, text: LocaleText) -> Self {
        self.i18n.insert(language.to_string(), text);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_mode_defaults() {
        let options = WidgetOptions::window_mode("https://example.org/webhook/chat", "#n8n-chat");
        assert_eq!(options.mode, "window");
        assert!(options.load_previous_session);
        assert!(!options.show_welcome_screen);
        assert!(!options.enable_streaming);
        assert_eq!(options.default_language, "en");
        assert!(options.initial_messages.is_empty());
    }

    #[test]
    fn test_serializes_with_widget_field_names() {
        let options = WidgetOptions::window_mode("https://example.org/webhook/chat", "#n8n-chat")
            .with_initial_messages(&["Hi! How can I help?"])
            .with_locale(
                "en",
                LocaleText {
                    title: "Welcome".to_string(),
                    subtitle: "Ask us anything".to_string(),
                    input_placeholder: "Type your message".to_string(),
                    get_started: "New conversation".to_string(),
                    footer: String::new(),
                },
            );

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["webhookUrl"], "https://example.org/webhook/chat");
        assert_eq!(json["loadPreviousSession"], true);
        assert_eq!(json["showWelcomeScreen"], false);
        assert_eq!(json["enableStreaming"], false);
        assert_eq!(json["initialMessages"][0], "Hi! How can I help?");
        assert_eq!(json["i18n"]["en"]["inputPlaceholder"], "Type your message");
        assert_eq!(json["i18n"]["en"]["getStarted"], "New conversation");
    }

    #[test]
    fn test_roundtrip() {
        let options = WidgetOptions::window_mode("https://example.org/webhook/chat", "#n8n-chat");
        let json = serde_json::to_string(&options).unwrap();
        let back: WidgetOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
