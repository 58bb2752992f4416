use async_trait::async_trait;
use langer_types::{Dictionary, LanguageTag, MatchError, preset_language};

use crate::error::DriverError;

/// Pluggable source of available languages and per-language dictionaries.
///
/// `Source` is the backing data the driver derives everything from;
/// [`update`](Driver::update) replaces it wholesale, invalidating anything
/// derived from the previous source.
#[async_trait]
pub trait Driver: Send + Sync {
    type Source;

    /// Ordered, duplicate-free list of languages this driver can serve.
    async fn available_languages(&self) -> Result<Vec<LanguageTag>, DriverError>;

    /// Suggested starting language, expected to be a member of `available`.
    async fn preset_language(&self, available: &[LanguageTag])
    -> Result<LanguageTag, DriverError>;

    /// Dictionary for one language.
    async fn dictionary_for(&self, language: &str) -> Result<Dictionary, DriverError>;

    /// Replace the backing data in place. Same driver identity, chainable.
    fn update(&mut self, source: Self::Source) -> &mut Self;

    /// Release driver-held resources.
    async fn dispose(&mut self) -> Result<(), DriverError> {
        Ok(())
    }
}

/// Shared preset resolution for the reference drivers: the matcher over the
/// configured locale priorities, or the first available language when no
/// priorities are configured.
pub(crate) fn resolve_preset(
    available: &[LanguageTag],
    priorities: &[LanguageTag],
) -> Result<LanguageTag, DriverError> {
    if priorities.is_empty() {
        return available
            .first()
            .cloned()
            .ok_or_else(|| MatchError::NoMatchingLanguage.into());
    }
    Ok(preset_language(available, priorities)?)
}
