//! Internationalization (i18n) support

use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::helpers::is_valid_format;

/// Built-in language files
const LANGUAGES: &[(&str, &str)] = &[
    ("ko", include_str!("languages/ko.yml")),
    ("en", include_str!("languages/en.yml")),
];

/// Localized user-facing messages
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, String>>,
    /// Site-level overrides, checked first
    overrides: HashMap<String, String>,
}

impl I18n {
    /// Create a handler with the built-in languages loaded
    pub fn new(language: &str) -> Self {
        let mut translations = HashMap::new();
        for (lang, source) in LANGUAGES {
            match serde_yaml::from_str::<HashMap<String, String>>(source) {
                Ok(data) => {
                    translations.insert(lang.to_string(), data);
                }
                Err(e) => tracing::warn!("Failed to parse built-in language {}: {}", lang, e),
            }
        }

        Self {
            language: language.to_string(),
            translations,
            overrides: HashMap::new(),
        }
    }

    /// Handler for a site's language and message overrides
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut i18n = Self::new(&config.language);
        i18n.overrides = config.messages.clone();
        if let Some(format) = &config.date_format {
            i18n.overrides.insert("date_format".to_string(), format.clone());
        }
        let invalid = i18n
            .overrides
            .get("date_format")
            .is_some_and(|format| !is_valid_format(format));
        if invalid {
            if let Some(format) = i18n.overrides.remove("date_format") {
                tracing::warn!(
                    "Invalid date_format {:?}, using the {} default",
                    format,
                    config.language
                );
            }
        }
        if !i18n.translations.contains_key(&config.language) {
            tracing::warn!(
                "No built-in messages for language {:?}, falling back to English",
                config.language
            );
        }
        i18n
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translation by key
    ///
    /// Lookup order: override, current language, English, the key itself.
    pub fn get(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }

        [self.language.as_str(), "en"]
            .iter()
            .find_map(|lang| self.translations.get(*lang)?.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// chrono format for displayed dates
    pub fn date_format(&self) -> String {
        self.get("date_format")
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("ko")
    }
}
