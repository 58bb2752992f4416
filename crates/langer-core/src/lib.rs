pub mod engine;
pub mod error;
pub mod state;

pub use engine::{Langer, Options};
pub use error::EngineError;
pub use state::{Lifecycle, Snapshot};
