use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VetterError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("Semantic Versioning Error: {0}")]
    SemVer(#[from] Arc<semver::Error>),

    #[error("TOML Parsing Error: {0}")]
    Toml(#[from] Arc<toml::de::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Parsing Error in {0}: {1}")]
    ParseError(&'static str, String),

    #[error("Version error: {0}")]
    VersionError(String),
}

impl From<std::io::Error> for VetterError {
    fn from(err: std::io::Error) -> Self {
        VetterError::Io(Arc::new(err))
    }
}

impl From<semver::Error> for VetterError {
    fn from(err: semver::Error) -> Self {
        VetterError::SemVer(Arc::new(err))
    }
}

impl From<toml::de::Error> for VetterError {
    fn from(err: toml::de::Error) -> Self {
        VetterError::Toml(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, VetterError>;
