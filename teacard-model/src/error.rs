use std::fmt::{self, Display};

/// Errors produced by model parsing and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownCardPosition(String),
    UnknownCardRole(String),
    InvalidField(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownCardPosition(raw) => {
                write!(f, "unknown card position: {raw}")
            }
            ModelError::UnknownCardRole(raw) => {
                write!(f, "unknown card role: {raw}")
            }
            ModelError::InvalidField(msg) => write!(f, "invalid field: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
