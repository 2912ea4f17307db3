use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::BoundedCounter;
use crate::error::Result;

/// One call against a [`BoundedCounter`], in a form that can be stored and
/// replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Increment,
    IncrementBy(i64),
    Decrement,
    DecrementBy(i64),
    Set(i64),
    Reset,
    ResetTo(i64),
    SetStep(i64),
    Value,
}

impl Operation {
    /// Runs the operation and returns whatever the underlying counter method
    /// returns. `SetStep` yields the new step, every other variant the value.
    pub fn apply(&self, counter: &mut BoundedCounter) -> i64 {
        match *self {
            Operation::Increment => counter.increment(None),
            Operation::IncrementBy(step) => counter.increment(Some(step)),
            Operation::Decrement => counter.decrement(None),
            Operation::DecrementBy(step) => counter.decrement(Some(step)),
            Operation::Set(value) => counter.set(value),
            Operation::Reset => counter.reset(),
            Operation::ResetTo(value) => counter.reset_to(value),
            Operation::SetStep(step) => counter.set_step(step),
            Operation::Value => counter.value(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(self)?;
        debug!("Serialized operation: {:?}", self);
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let operation = serde_json::from_slice(bytes)?;
        debug!("Deserialized operation: {:?}", operation);
        Ok(operation)
    }

    pub fn list_from_bytes(bytes: &[u8]) -> Result<Vec<Self>> {
        let operations: Vec<Self> = serde_json::from_slice(bytes)?;
        debug!("Deserialized {} operations", operations.len());
        Ok(operations)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Increment => write!(f, "increment"),
            Operation::IncrementBy(step) => write!(f, "increment by {step}"),
            Operation::Decrement => write!(f, "decrement"),
            Operation::DecrementBy(step) => write!(f, "decrement by {step}"),
            Operation::Set(value) => write!(f, "set {value}"),
            Operation::Reset => write!(f, "reset"),
            Operation::ResetTo(value) => write!(f, "reset to {value}"),
            Operation::SetStep(step) => write!(f, "set step {step}"),
            Operation::Value => write!(f, "value"),
        }
    }
}
