//! Synchronous reference driver over an in-memory catalog.

use async_trait::async_trait;
use langer_types::{Dictionary, LanguageTag};

use crate::driver::{Driver, resolve_preset};
use crate::error::DriverError;

/// Entry order defines the available-language order.
pub type Catalog = Vec<(LanguageTag, Dictionary)>;

pub struct MapDriver {
    catalog: Catalog,
    priorities: Vec<LanguageTag>,
}

impl MapDriver {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            priorities: Vec::new(),
        }
    }

    /// Locale priority list for preset resolution, most preferred first
    /// (typically the platform's locale preferences).
    pub fn with_priorities<I, S>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageTag>,
    {
        self.priorities = priorities.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl Driver for MapDriver {
    type Source = Catalog;

    async fn available_languages(&self) -> Result<Vec<LanguageTag>, DriverError> {
        Ok(self.catalog.iter().map(|(tag, _)| tag.clone()).collect())
    }

    async fn preset_language(
        &self,
        available: &[LanguageTag],
    ) -> Result<LanguageTag, DriverError> {
        resolve_preset(available, &self.priorities)
    }

    async fn dictionary_for(&self, language: &str) -> Result<Dictionary, DriverError> {
        self.catalog
            .iter()
            .find(|(tag, _)| tag == language)
            .map(|(_, dictionary)| dictionary.clone())
            .ok_or_else(|| DriverError::UnknownLanguage(language.to_string()))
    }

    fn update(&mut self, source: Catalog) -> &mut Self {
        self.catalog = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(value: serde_json::Value) -> Dictionary {
        Dictionary::try_from(value).unwrap()
    }

    fn catalog() -> Catalog {
        vec![
            ("en".to_string(), dict(json!({"confirm": "Confirm"}))),
            ("zh".to_string(), dict(json!({"confirm": "確認"}))),
        ]
    }

    #[tokio::test]
    async fn preserves_catalog_order() {
        let driver = MapDriver::new(vec![
            ("zh".to_string(), Dictionary::new()),
            ("en".to_string(), Dictionary::new()),
            ("ja".to_string(), Dictionary::new()),
        ]);
        let available = driver.available_languages().await.unwrap();
        assert_eq!(available, vec!["zh", "en", "ja"]);
    }

    #[tokio::test]
    async fn preset_follows_priorities() {
        let driver = MapDriver::new(catalog()).with_priorities(["en-US", "en", "zh-TW", "zh"]);
        let available = driver.available_languages().await.unwrap();
        assert_eq!(driver.preset_language(&available).await.unwrap(), "en");
    }

    #[tokio::test]
    async fn preset_defaults_to_first_language() {
        let driver = MapDriver::new(catalog());
        let available = driver.available_languages().await.unwrap();
        assert_eq!(driver.preset_language(&available).await.unwrap(), "en");
    }

    #[tokio::test]
    async fn preset_fails_without_any_match() {
        let driver = MapDriver::new(catalog()).with_priorities(["ja"]);
        let available = driver.available_languages().await.unwrap();
        assert!(matches!(
            driver.preset_language(&available).await,
            Err(DriverError::NoMatchingLanguage(_))
        ));
    }

    #[tokio::test]
    async fn unknown_language_is_an_error() {
        let driver = MapDriver::new(catalog());
        assert!(matches!(
            driver.dictionary_for("ja").await,
            Err(DriverError::UnknownLanguage(tag)) if tag == "ja"
        ));
    }

    #[tokio::test]
    async fn update_replaces_the_catalog_in_place() {
        let mut driver = MapDriver::new(catalog());
        let updated = vec![
            ("en".to_string(), dict(json!({"confirm": "Confirm", "enter": "Enter"}))),
            ("ja".to_string(), dict(json!({"confirm": "確認"}))),
        ];
        driver.update(updated);
        let available = driver.available_languages().await.unwrap();
        assert_eq!(available, vec!["en", "ja"]);
        let dictionary = driver.dictionary_for("en").await.unwrap();
        assert_eq!(dictionary.text("enter"), Some("Enter"));
        assert!(matches!(
            driver.dictionary_for("zh").await,
            Err(DriverError::UnknownLanguage(_))
        ));
    }
}
