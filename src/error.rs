use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse controls config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid controls config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
