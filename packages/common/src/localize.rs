//! Message lookup for user-facing editor errors.

use std::collections::HashMap;

/// Key of the message shown when a view path is already taken
pub const ERROR_SAME_URL: &str = "ui.panel.lovelace.editor.edit_view.error_same_url";

/// Keyed message lookup
///
/// Implementations return the translated text for `key`. Unknown keys
/// should come back as the key itself so that the caller still has
/// something to show.
pub trait Localize {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// In-memory message catalog
#[derive(Debug, Clone, Default)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English catalog
    pub fn english() -> Self {
        let mut messages = Self::new();
        messages.insert(
            ERROR_SAME_URL,
            "You can't save a view with the same URL as a different existing view.",
        );
        messages
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Replace or add entries, e.g. from user configuration
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, text) in overrides {
            self.insert(key, text);
        }
        self
    }
}

impl Localize for Messages {
    fn localize(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog_has_same_url_message() {
        let text = Messages::english().localize(ERROR_SAME_URL);
        assert!(text.contains("same URL"));
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Messages::new().localize("ui.unknown"), "ui.unknown");
    }

    #[test]
    fn test_overrides_replace_entries() {
        let messages = Messages::english().with_overrides([(ERROR_SAME_URL, "URL bereits vergeben")]);
        assert_eq!(messages.localize(ERROR_SAME_URL), "URL bereits vergeben");
    }

    #[test]
    fn test_closure_as_localizer() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.localize("abc"), "ABC");
    }
}
