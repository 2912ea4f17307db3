use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CounterError, Result};

/// Construction parameters for a [`BoundedCounter`](super::BoundedCounter).
///
/// Every field is optional in a config file. Missing bounds mean the counter
/// is unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub initial_value: i64,
    pub step: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CounterSection {
    counter: CounterConfig,
}

/// Per-field replacements layered over a loaded [`CounterConfig`], e.g. from
/// command-line flags. `None` keeps the loaded value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterOverrides {
    pub initial_value: Option<i64>,
    pub step: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl CounterOverrides {
    pub fn apply(self, mut config: CounterConfig) -> CounterConfig {
        if let Some(initial_value) = self.initial_value {
            config = config.with_initial_value(initial_value);
        }
        if let Some(step) = self.step {
            config = config.with_step(step);
        }
        if let Some(min) = self.min {
            config = config.with_min(min);
        }
        if let Some(max) = self.max {
            config = config.with_max(max);
        }
        config
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_value: 0,
            step: 1,
            min: None,
            max: None,
        }
    }
}

impl CounterConfig {
    pub fn with_initial_value(mut self, initial_value: i64) -> Self {
        self.initial_value = initial_value;
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_bounds(self, min: i64, max: i64) -> Self {
        self.with_min(min).with_max(max)
    }

    /// Effective inclusive bounds, with missing sides widened to the full
    /// `i64` range.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min.unwrap_or(i64::MIN), self.max.unwrap_or(i64::MAX))
    }

    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.bounds();
        if min > max {
            return Err(CounterError::InvalidBounds { min, max });
        }
        Ok(())
    }

    /// Parses and validates a TOML document. The fields may sit at the top
    /// level or under a `[counter]` table, but not both.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Self::parse_toml(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_toml_str`](Self::from_toml_str) without the bounds check,
    /// for callers that still layer [`CounterOverrides`] on top.
    #[instrument(name = "parse_counter_config", level = "debug", skip(source))]
    pub fn parse_toml(source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source)?;

        let config: Self = if table.contains_key("counter") {
            let section: CounterSection = toml::Value::Table(table).try_into()?;
            section.counter
        } else {
            toml::Value::Table(table).try_into()?
        };

        debug!("Parsed counter config: {:?}", config);
        Ok(config)
    }

    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading counter config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::parse_toml(&source)
    }
}
