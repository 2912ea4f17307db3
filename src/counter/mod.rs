pub mod config;
pub mod operation;

use tracing::instrument;

use crate::error::Result;

pub use config::{CounterConfig, CounterOverrides};
pub use operation::Operation;

/// A counter whose value never leaves the inclusive range `[min, max]`.
///
/// Arithmetic saturates at the `i64` limits and is then clamped to the
/// configured bounds, so no request is ever rejected once the counter exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i64,
    initial_value: i64,
    step: i64,
    min: i64,
    max: i64,
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self {
            value: 0,
            initial_value: 0,
            step: 1,
            min: i64::MIN,
            max: i64::MAX,
        }
    }
}

impl BoundedCounter {
    /// Builds a counter from `config`.
    ///
    /// Fails when `min > max`. An initial value outside the bounds is clamped,
    /// and the clamped value is what [`reset`](Self::reset) restores.
    pub fn new(config: CounterConfig) -> Result<Self> {
        config.validate()?;
        let (min, max) = config.bounds();
        let initial_value = config.initial_value.clamp(min, max);

        tracing::info!(
            "Creating a new counter with initial value: {} (step {}, bounds [{}, {}])",
            initial_value,
            config.step,
            min,
            max
        );
        Ok(Self {
            value: initial_value,
            initial_value,
            step: config.step,
            min,
            max,
        })
    }

    fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    #[instrument(name = "increment_counter", level = "debug", skip(self))]
    pub fn increment(&mut self, step_override: Option<i64>) -> i64 {
        let step = step_override.unwrap_or(self.step);
        self.value = self.clamp(self.value.saturating_add(step));
        tracing::info!("Counter incremented to: {}", self.value);
        self.value
    }

    #[instrument(name = "decrement_counter", level = "debug", skip(self))]
    pub fn decrement(&mut self, step_override: Option<i64>) -> i64 {
        let step = step_override.unwrap_or(self.step);
        self.value = self.clamp(self.value.saturating_sub(step));
        tracing::info!("Counter decremented to: {}", self.value);
        self.value
    }

    #[instrument(name = "set_counter", level = "debug", skip(self))]
    pub fn set(&mut self, value: i64) -> i64 {
        self.value = self.clamp(value);
        if self.value != value {
            tracing::debug!("Requested value {} clamped to {}", value, self.value);
        }
        tracing::info!("Counter set to: {}", self.value);
        self.value
    }

    #[instrument(name = "reset_counter", level = "debug", skip(self))]
    pub fn reset(&mut self) -> i64 {
        self.value = self.initial_value;
        tracing::info!("Counter reset to: {}", self.value);
        self.value
    }

    /// Resets to a one-off target instead of the configured start. The target
    /// is clamped and the configured initial value is kept for later resets.
    #[instrument(name = "reset_counter_to", level = "debug", skip(self))]
    pub fn reset_to(&mut self, value: i64) -> i64 {
        self.value = self.clamp(value);
        tracing::info!("Counter reset to: {}", self.value);
        self.value
    }

    #[instrument(name = "set_counter_step", level = "debug", skip(self))]
    pub fn set_step(&mut self, step: i64) -> i64 {
        self.step = step;
        tracing::info!("Counter step set to: {}", self.step);
        self.step
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}
