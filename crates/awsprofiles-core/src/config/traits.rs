//! Configuration errors

/// Errors that can occur while loading settings or resolving paths
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
