//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, degenerate sampling volumes, snapshot lookup and
//! persistence failures, IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("degenerate {shape}: no sample accepted after {attempts} attempts")]
    DegenerateVolume { shape: &'static str, attempts: usize },

    #[error("preset placement requires a transform snapshot")]
    MissingSnapshot,

    #[error("unknown snapshot handle '{handle}'")]
    UnknownSnapshot { handle: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
