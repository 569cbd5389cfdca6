use thiserror::Error;

/// Errors raised while constructing a carousel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel can't be in loop mode and in infinite mode at the same time")]
    ConflictingModes,

    #[error("invalid carousel option {name}: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: String,
    },
}

/// Errors raised by record stores.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to persist store file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Corrupt store file {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("missing required fields: {}", .fields.join(", "))]
    MissingRequired { fields: Vec<String> },
}

/// Top-level error for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
