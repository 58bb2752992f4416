//! The language lifecycle engine: resolves, holds and mutates the current
//! active language over pluggable driver and recorder capabilities.

use std::collections::HashSet;
use std::fmt;

use langer_driver::{Driver, Recorder};
use langer_types::{Dictionary, LanguageTag};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::state::{Lifecycle, Snapshot};

/// Construction-time configuration.
pub struct Options<D: Driver> {
    pub driver: Option<D>,
    pub recorder: Option<Box<dyn Recorder>>,
    /// Fixed starting language. Takes precedence over the recorded choice
    /// and the driver preset; must be on the available languages.
    pub preset: Option<LanguageTag>,
}

impl<D: Driver> Default for Options<D> {
    fn default() -> Self {
        Self {
            driver: None,
            recorder: None,
            preset: None,
        }
    }
}

/// Orchestrates a [`Driver`] and an optional [`Recorder`] behind a
/// monotonic lifecycle state machine.
///
/// Mutating operations take `&mut self`, so exactly one can be in flight
/// per instance. State fields are written only after every awaited
/// capability call has completed; a suspended operation never exposes a
/// partially updated state, and a failing one leaves the state untouched.
pub struct Langer<D: Driver> {
    driver: Option<D>,
    recorder: Option<Box<dyn Recorder>>,
    preset: Option<LanguageTag>,
    lifecycle: Lifecycle,
    available: Vec<LanguageTag>,
    speaking: Option<LanguageTag>,
    says: Option<Dictionary>,
    changes: watch::Sender<Option<Snapshot>>,
}

impl<D: Driver> Langer<D> {
    pub fn new(options: Options<D>) -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            driver: options.driver,
            recorder: options.recorder,
            preset: options.preset,
            lifecycle: Lifecycle::Uninitialized,
            available: Vec::new(),
            speaking: None,
            says: None,
            changes,
        }
    }

    pub fn with_driver(driver: D) -> Self {
        Self::new(Options {
            driver: Some(driver),
            ..Options::default()
        })
    }

    pub fn initialized(&self) -> bool {
        self.lifecycle.is_initialized()
    }

    pub fn disposed(&self) -> bool {
        self.lifecycle.is_disposed()
    }

    /// Available languages in driver order.
    pub fn available_languages(&self) -> Result<&[LanguageTag], EngineError> {
        self.ensure_ready()?;
        Ok(&self.available)
    }

    /// Currently active language.
    pub fn speaking(&self) -> Result<&str, EngineError> {
        self.ensure_ready()?;
        self.speaking.as_deref().ok_or(EngineError::NotReady)
    }

    /// Dictionary of the currently active language.
    pub fn says(&self) -> Result<&Dictionary, EngineError> {
        self.ensure_ready()?;
        self.says.as_ref().ok_or(EngineError::NotReady)
    }

    pub fn is_available(&self, language: &str) -> Result<bool, EngineError> {
        self.ensure_ready()?;
        Ok(self.available.iter().any(|tag| tag == language))
    }

    /// Change feed: one snapshot per successful mutation, `None` before
    /// initialization and after disposal. Reactive adapters hook here.
    pub fn subscribe(&self) -> watch::Receiver<Option<Snapshot>> {
        self.changes.subscribe()
    }

    /// Resolve the starting language and load its dictionary. Legal exactly
    /// once per instance. `force_preset` skips the recorded choice.
    pub async fn initialize(&mut self, force_preset: bool) -> Result<&mut Self, EngineError> {
        self.ensure_uninitialized()?;
        if self.driver.is_none() {
            return Err(EngineError::NoDriverConfigured);
        }
        let available = self.fetch_available().await?;
        let language = self.derive_language(&available, !force_preset).await?;
        let dictionary = self.fetch_dictionary(&language).await?;

        self.available = available;
        self.speaking = Some(language.clone());
        self.says = Some(dictionary);
        self.lifecycle = Lifecycle::Initialized;
        debug!(%language, "engine initialized");
        self.record(&language).await;
        self.publish();
        Ok(self)
    }

    /// [`initialize`](Langer::initialize) with a driver installed first;
    /// covers engines built without one configured.
    pub async fn initialize_with_driver(
        &mut self,
        driver: D,
        force_preset: bool,
    ) -> Result<&mut Self, EngineError> {
        self.ensure_uninitialized()?;
        self.driver = Some(driver);
        self.initialize(force_preset).await
    }

    /// Switch to `language` and load its dictionary. The switch is recorded
    /// best-effort once it has been applied.
    pub async fn speak(&mut self, language: &str) -> Result<(), EngineError> {
        self.ensure_ready()?;
        if !self.available.iter().any(|tag| tag == language) {
            return Err(EngineError::LanguageNotAvailable {
                language: language.to_string(),
                available: self.available.clone(),
            });
        }
        let dictionary = self.fetch_dictionary(language).await?;
        self.speaking = Some(language.to_string());
        self.says = Some(dictionary);
        debug!(language, "language switched");
        self.record(language).await;
        self.publish();
        Ok(())
    }

    /// Reset the current language to the preset resolution, ignoring any
    /// recorded choice. The recorder itself is left untouched. Idempotent
    /// for an unchanged driver.
    pub async fn restore(&mut self) -> Result<LanguageTag, EngineError> {
        self.ensure_ready()?;
        let language = self.derive_language(&self.available, false).await?;
        let dictionary = self.fetch_dictionary(&language).await?;
        self.speaking = Some(language.clone());
        self.says = Some(dictionary);
        debug!(%language, "restored to preset");
        self.publish();
        Ok(language)
    }

    /// Re-synchronize after the driver's backing data changed. Keeps the
    /// current language when it is still available (re-fetching its
    /// dictionary), otherwise falls back to preset resolution without
    /// consulting the recorder.
    pub async fn reset(&mut self, force_preset: bool) -> Result<&mut Self, EngineError> {
        self.ensure_ready()?;
        let available = self.fetch_available().await?;
        let language = match &self.speaking {
            Some(current) if !force_preset && available.contains(current) => current.clone(),
            _ => self.derive_language(&available, false).await?,
        };
        let dictionary = self.fetch_dictionary(&language).await?;

        self.available = available;
        self.speaking = Some(language.clone());
        self.says = Some(dictionary);
        debug!(%language, "state re-synchronized");
        self.publish();
        Ok(self)
    }

    /// [`reset`](Langer::reset) with a replacement driver installed first.
    /// The previous driver is torn down best-effort.
    pub async fn reset_with_driver(
        &mut self,
        driver: D,
        force_preset: bool,
    ) -> Result<&mut Self, EngineError> {
        self.ensure_ready()?;
        if let Some(mut previous) = self.driver.replace(driver) {
            if let Err(error) = previous.dispose().await {
                warn!(%error, "replaced driver teardown failed");
            }
        }
        self.reset(force_preset).await
    }

    /// Replace the driver's backing data in place, then re-synchronize.
    pub async fn update(
        &mut self,
        source: D::Source,
        force_preset: bool,
    ) -> Result<&mut Self, EngineError> {
        self.ensure_ready()?;
        match self.driver.as_mut() {
            Some(driver) => {
                driver.update(source);
            }
            None => return Err(EngineError::NoDriverConfigured),
        }
        self.reset(force_preset).await
    }

    /// Tear down both capabilities best-effort and clear the cached state.
    /// Terminal: every later operation fails, including a second `dispose`.
    pub async fn dispose(&mut self) -> Result<(), EngineError> {
        match self.lifecycle {
            Lifecycle::Uninitialized => return Err(EngineError::NotReady),
            Lifecycle::Disposed => return Err(EngineError::Disposed),
            Lifecycle::Initialized => {}
        }
        if let Some(driver) = self.driver.as_mut() {
            if let Err(error) = driver.dispose().await {
                warn!(%error, "driver teardown failed");
            }
        }
        if let Some(recorder) = self.recorder.as_mut() {
            if let Err(error) = recorder.dispose().await {
                warn!(%error, "recorder teardown failed");
            }
        }
        self.driver = None;
        self.recorder = None;
        self.available.clear();
        self.speaking = None;
        self.says = None;
        self.lifecycle = Lifecycle::Disposed;
        debug!("engine disposed");
        self.changes.send_replace(None);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), EngineError> {
        if self.lifecycle.is_initialized() {
            Ok(())
        } else {
            Err(EngineError::NotReady)
        }
    }

    fn ensure_uninitialized(&self) -> Result<(), EngineError> {
        match self.lifecycle {
            Lifecycle::Uninitialized => Ok(()),
            Lifecycle::Initialized => Err(EngineError::AlreadyInitialized),
            Lifecycle::Disposed => Err(EngineError::Disposed),
        }
    }

    fn driver(&self) -> Result<&D, EngineError> {
        self.driver.as_ref().ok_or(EngineError::NoDriverConfigured)
    }

    async fn fetch_available(&self) -> Result<Vec<LanguageTag>, EngineError> {
        let available = self.driver()?.available_languages().await?;
        if available.is_empty() {
            return Err(EngineError::InvalidDriverContract(
                "the available-language list is empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        if !available.iter().all(|tag| seen.insert(tag)) {
            return Err(EngineError::InvalidDriverContract(
                "the available-language list contains duplicates".to_string(),
            ));
        }
        Ok(available)
    }

    /// Starting-language resolution: the configured preset, then (when
    /// consulted) the recorded choice, then the driver preset. Recorder
    /// read failures degrade to "nothing saved".
    async fn derive_language(
        &self,
        available: &[LanguageTag],
        consult_recorder: bool,
    ) -> Result<LanguageTag, EngineError> {
        if let Some(preset) = &self.preset {
            if !available.contains(preset) {
                return Err(EngineError::PresetLanguageUnavailable {
                    code: preset.clone(),
                    available: available.to_vec(),
                });
            }
            return Ok(preset.clone());
        }
        if consult_recorder {
            if let Some(recorder) = &self.recorder {
                match recorder.get().await {
                    Ok(Some(saved)) if available.contains(&saved) => return Ok(saved),
                    Ok(_) => {}
                    Err(error) => {
                        warn!(%error, "recorder read failed, falling back to preset")
                    }
                }
            }
        }
        let code = self.driver()?.preset_language(available).await?;
        if !available.contains(&code) {
            return Err(EngineError::PresetLanguageUnavailable {
                code,
                available: available.to_vec(),
            });
        }
        Ok(code)
    }

    async fn fetch_dictionary(&self, language: &str) -> Result<Dictionary, EngineError> {
        let dictionary = self.driver()?.dictionary_for(language).await?;
        if dictionary.is_empty() {
            return Err(EngineError::EmptyDictionary(language.to_string()));
        }
        Ok(dictionary)
    }

    /// Best-effort persistence of the chosen language.
    async fn record(&mut self, language: &str) {
        if let Some(recorder) = self.recorder.as_mut() {
            if let Err(error) = recorder.set(language).await {
                warn!(%error, language, "failed to record the chosen language");
            }
        }
    }

    fn publish(&self) {
        let snapshot = match (&self.speaking, &self.says) {
            (Some(speaking), Some(says)) => Some(Snapshot {
                available_languages: self.available.clone(),
                speaking: speaking.clone(),
                says: says.clone(),
            }),
            _ => None,
        };
        self.changes.send_replace(snapshot);
    }
}

// Manual impl: the driver and recorder capabilities need not be Debug.
impl<D: Driver> fmt::Debug for Langer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Langer")
            .field("lifecycle", &self.lifecycle)
            .field("available", &self.available)
            .field("speaking", &self.speaking)
            .field("preset", &self.preset)
            .finish_non_exhaustive()
    }
}
