use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while building [`crate::SearchFilters`] from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("location must not be empty")]
    EmptyLocation,

    #[error("at least one place type must be selected")]
    NoPlaceTypes,

    #[error("unknown place type: {0}")]
    UnknownPlaceType(String),

    #[error("unsupported search radius {0}m (expected one of 200, 400, 800, 1600)")]
    UnsupportedRadius(u32),

    #[error("unknown price level: {0}")]
    UnknownPriceLevel(String),

    #[error("invalid coordinates \"{input}\": {reason}")]
    InvalidCoordinates { input: String, reason: String },
}
