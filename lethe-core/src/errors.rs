//! Error taxonomy. Configuration problems fail fast before the first tick;
//! evidence-log I/O failures abort the run. The scoring pipeline itself is
//! total over its inputs and never produces an error.

/// Top-level error type for the simulator.
#[derive(Debug, thiserror::Error)]
pub enum LetheError {
    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("evidence log I/O failure: {0}")]
    Evidence(#[from] std::io::Error),
}

impl LetheError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result alias used across the workspace.
pub type LetheResult<T> = Result<T, LetheError>;
