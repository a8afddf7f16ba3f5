use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the team sorter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    #[error("no player with id `{0}`")]
    PlayerNotFound(String),

    #[error("failed to access roster file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed roster file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_team_count(value: impl std::fmt::Display) -> Self {
        Error::InvalidArgument {
            name: "num_teams",
            message: format!("team count must be a positive integer, got {value}"),
        }
    }
}
