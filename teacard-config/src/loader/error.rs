use std::path::PathBuf;

use teacard_core::CarouselError;
use teacard_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse configuration {origin}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid configuration value {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    #[error(transparent)]
    Field(#[from] ModelError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
