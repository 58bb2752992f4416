use langer_driver::DriverError;
use langer_types::LanguageTag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Operation requires an initialized engine.
    #[error("not initialized yet, failed to initialize or disposed")]
    NotReady,

    #[error("already initialized")]
    AlreadyInitialized,

    #[error("the engine has been disposed")]
    Disposed,

    #[error("no driver configured")]
    NoDriverConfigured,

    /// The driver's available-language list broke the contract.
    #[error("invalid driver contract: {0}")]
    InvalidDriverContract(String),

    #[error("the driver returned an empty dictionary for \"{0}\"")]
    EmptyDictionary(LanguageTag),

    #[error(
        "the preset language \"{code}\" is not on the available languages ({languages})",
        languages = .available.join(",")
    )]
    PresetLanguageUnavailable {
        code: LanguageTag,
        available: Vec<LanguageTag>,
    },

    #[error(
        "cannot speak the \"{language}\" language that is not on the available languages ({languages})",
        languages = .available.join(",")
    )]
    LanguageNotAvailable {
        language: LanguageTag,
        available: Vec<LanguageTag>,
    },

    #[error(transparent)]
    Driver(#[from] DriverError),
}
