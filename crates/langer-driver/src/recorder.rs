use async_trait::async_trait;
use langer_types::LanguageTag;

use crate::error::RecorderError;

/// Pluggable persistence of the last chosen language.
///
/// No concrete storage medium ships with the library; implementations wrap
/// whatever durable key-value mechanism the host application has.
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Stored language tag, if any.
    async fn get(&self) -> Result<Option<LanguageTag>, RecorderError>;

    /// Persist the tag.
    async fn set(&mut self, language: &str) -> Result<(), RecorderError>;

    /// Release storage-held resources.
    async fn dispose(&mut self) -> Result<(), RecorderError> {
        Ok(())
    }
}
