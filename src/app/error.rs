//! Application Error Types

use crate::core::error_handling::ContextualError;
use crate::core::version::VersionError;
use std::path::Path;

/// Problems with the TOML configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Error reading configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Parse { message: String },

    #[error("{message}")]
    InvalidValue { message: String },
}

impl ConfigError {
    pub fn not_found(path: &Path) -> Self {
        ConfigError::NotFound {
            message: format!(
                "The specified configuration file does not exist: {}",
                path.display()
            ),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn parse(path: &Path, source: &toml::de::Error) -> Self {
        ConfigError::Parse {
            message: format!(
                "Error parsing configuration file {}: {}",
                path.display(),
                source
            ),
        }
    }

    pub fn invalid_value(key: &str, expected: &str) -> Self {
        ConfigError::InvalidValue {
            message: format!("Configuration key '{}' must be {}", key, expected),
        }
    }
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Io { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { message }
            | ConfigError::Parse { message }
            | ConfigError::InvalidValue { message } => Some(message),
            ConfigError::Io { .. } => None,
        }
    }
}

/// Anything that stops the command from printing its line
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },

    #[error("Failed to render build information: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ContextualError for StartupError {
    fn is_user_actionable(&self) -> bool {
        match self {
            StartupError::Config(e) => e.is_user_actionable(),
            _ => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            StartupError::Config(e) => e.user_message(),
            _ => None,
        }
    }
}

pub type StartupResult<T> = Result<T, StartupError>;
