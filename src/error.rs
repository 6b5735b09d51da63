use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to write to console: {0}")]
    Console(#[from] io::Error),

    #[error("Console is already in use")]
    ConsoleBusy,

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for config field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Observer '{observer}' failed: {reason}")]
    ObserverFailed {
        observer: &'static str,
        reason: String,
    },

    #[error("Observer at position {position} is already being updated")]
    ObserverBusy { position: usize },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl PatternError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn observer_failed(observer: &'static str, reason: impl Into<String>) -> Self {
        Self::ObserverFailed {
            observer,
            reason: reason.into(),
        }
    }
}
