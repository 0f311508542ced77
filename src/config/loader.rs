//! Reading [`RemovalOptions`] from TOML.
//!
//! Keys use snake_case, with `loggingObjectName` accepted as an alias.
//! Options are validated before they are handed out.

use crate::config::schema::{RemovalOptions, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read removal options from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse removal options TOML: {0}")]
    Toml(#[from] toml_edit::de::Error),

    #[error("invalid removal options: {0}")]
    Invalid(#[from] ValidationError),

    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },
}

pub fn load_from_str(input: &str) -> Result<RemovalOptions, ConfigError> {
    let options: RemovalOptions = toml_edit::de::from_str(input)?;
    options.validate()?;
    Ok(options)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<RemovalOptions, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents).map_err(|error| ConfigError::InFile {
        path: path.to_path_buf(),
        source: Box::new(error),
    })
}
