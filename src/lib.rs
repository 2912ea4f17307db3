pub mod counter;
pub mod demo;
pub mod error;
pub mod telemetry;


pub use counter::{BoundedCounter, CounterConfig, CounterOverrides, Operation};
pub use error::{CounterError, Result};
