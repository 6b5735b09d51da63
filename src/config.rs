// Demo configuration loaded from TOML.

use crate::decorator::{BaseBeverage, CondimentKind};
use crate::error::PatternError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Filter directive used when `RUST_LOG` is not set, e.g. `"warn"` or
    /// `"design_patterns=debug"`.
    pub log_level: String,
    pub decorator: DecoratorConfig,
    pub observer: ObserverConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorConfig {
    pub base: BaseBeverage,
    pub condiments: Vec<CondimentKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Number of measurement rounds pushed through the weather station.
    pub iterations: usize,
    /// Inclusive lower bound for each generated reading.
    pub min_reading: i32,
    /// Exclusive upper bound for each generated reading.
    pub max_reading: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            decorator: DecoratorConfig::default(),
            observer: ObserverConfig::default(),
        }
    }
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            base: BaseBeverage::Espresso,
            condiments: vec![CondimentKind::Mocha, CondimentKind::Whip],
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            min_reading: 1,
            max_reading: 100,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PatternError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|err| PatternError::invalid_config("log_level", err.to_string()))?;
        self.observer.validate()
    }
}

impl ObserverConfig {
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.min_reading >= self.max_reading {
            return Err(PatternError::invalid_config(
                "observer.min_reading",
                format!(
                    "{} must be below observer.max_reading ({})",
                    self.min_reading, self.max_reading
                ),
            ));
        }
        Ok(())
    }
}
