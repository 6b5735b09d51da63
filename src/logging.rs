use crate::error::PatternError;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (the configured
/// `log_level`) is used. Logs go to stderr so demo output on stdout stays
/// exactly as printed.
pub fn init(default_directive: &str) -> Result<(), PatternError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|e| {
                PatternError::Logging(format!("invalid filter '{default_directive}': {e}"))
            })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PatternError::Logging(e.to_string()))
}
