pub mod dictionary;
pub mod matcher;

pub use dictionary::Dictionary;
pub use matcher::{MatchError, preset_language, primary_subtag};

/// BCP 47-style language tag, e.g. "en" or "zh-TW".
pub type LanguageTag = String;
