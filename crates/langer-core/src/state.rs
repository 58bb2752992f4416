use langer_types::{Dictionary, LanguageTag};
use serde::Serialize;

/// Engine lifecycle. Monotonic: Uninitialized → Initialized → Disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
    Disposed,
}

impl Lifecycle {
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized)
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }
}

/// Immutable copy of the observable engine state.
///
/// One snapshot is published per successful mutation; a reactive adapter
/// subscribes to the feed and re-renders from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub available_languages: Vec<LanguageTag>,
    pub speaking: LanguageTag,
    pub says: Dictionary,
}
