//! Asynchronous reference driver over a language list plus a fetch function.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use langer_types::{Dictionary, LanguageTag};

use crate::driver::{Driver, resolve_preset};
use crate::error::DriverError;

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Dictionary, DriverError>> + Send>>;
pub type FetchFn = Box<dyn Fn(&str) -> FetchFuture + Send + Sync>;

/// Backing data for a [`FetchDriver`]: which languages exist and how to
/// fetch each one's dictionary. The fetch layer itself (HTTP client, file
/// reader, ...) lives in the closure, not here.
pub struct FetchSource {
    pub languages: Vec<LanguageTag>,
    pub fetch: FetchFn,
}

impl FetchSource {
    pub fn new<I, S, F, Fut>(languages: I, fetch: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LanguageTag>,
        F: Fn(LanguageTag) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Dictionary, DriverError>> + Send + 'static,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            fetch: Box::new(move |language| Box::pin(fetch(language.to_string()))),
        }
    }
}

pub struct FetchDriver {
    source: FetchSource,
    priorities: Vec<LanguageTag>,
}

impl FetchDriver {
    pub fn new(source: FetchSource) -> Self {
        Self {
            source,
            priorities: Vec::new(),
        }
    }

    /// Locale priority list for preset resolution, most preferred first.
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
impl Driver for FetchDriver {
    type Source = FetchSource;

    async fn available_languages(&self) -> Result<Vec<LanguageTag>, DriverError> {
        Ok(self.source.languages.clone())
    }

    async fn preset_language(
        &self,
        available: &[LanguageTag],
    ) -> Result<LanguageTag, DriverError> {
        resolve_preset(available, &self.priorities)
    }

    async fn dictionary_for(&self, language: &str) -> Result<Dictionary, DriverError> {
        if !self.source.languages.iter().any(|tag| tag == language) {
            return Err(DriverError::UnknownLanguage(language.to_string()));
        }
        (self.source.fetch)(language).await
    }

    fn update(&mut self, source: FetchSource) -> &mut Self {
        self.source = source;
        self
    }
}
