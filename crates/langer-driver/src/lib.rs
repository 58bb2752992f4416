pub mod driver;
pub mod error;
pub mod fetch;
pub mod map;
pub mod recorder;

pub use driver::Driver;
pub use error::{DriverError, RecorderError};
pub use fetch::{FetchDriver, FetchFn, FetchFuture, FetchSource};
pub use map::{Catalog, MapDriver};
pub use recorder::Recorder;
