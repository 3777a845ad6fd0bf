//! Error types
//!
//! The simulation itself cannot fail. Errors only come from loading
//! configuration and from binding to the host at startup.

use thiserror::Error;

/// Configuration could not be parsed or failed validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Fatal problems binding to the host environment
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("canvas element #{0} not found")]
    MissingCanvas(String),
    #[error("element #{0} is not a <canvas>")]
    NotACanvas(String),
    #[error("2D rendering context unavailable")]
    NoContext2d,
    #[error("failed to create GPU surface: {0}")]
    Surface(String),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    Device(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_error_messages() {
        let err = StartupError::MissingCanvas("gameCanvas".into());
        assert_eq!(err.to_string(), "canvas element #gameCanvas not found");

        let err = StartupError::from(ConfigError::Invalid("arena width must be positive".into()));
        assert_eq!(
            err.to_string(),
            "invalid config: arena width must be positive"
        );
    }
}
