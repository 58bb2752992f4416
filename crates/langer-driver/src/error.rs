use langer_types::{LanguageTag, MatchError};
use thiserror::Error;

/// Failures produced by a driver implementation.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("no dictionary is available for the \"{0}\" language")]
    UnknownLanguage(LanguageTag),

    #[error("failed to fetch the dictionary for \"{language}\": {reason}")]
    FetchFailed {
        language: LanguageTag,
        reason: String,
    },

    #[error(transparent)]
    NoMatchingLanguage(#[from] MatchError),
}

/// Failure of the persistence capability.
///
/// The engine only ever warns on these; they never fail the triggering
/// operation.
#[derive(Debug, Error)]
#[error("recorder storage failure: {0}")]
pub struct RecorderError(pub String);
