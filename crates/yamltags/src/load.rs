//! # Document Loading
//!
//! Glue for configuration pipelines: deserialize a YAML or JSON document
//! with `serde`, then run [`crate::process`] on the result so the caller
//! only ever sees validated values with their defaults filled.
//!
//! Parsing belongs to `serde_yaml` / `serde_json`; nothing here inspects
//! the document text. Fields that may be absent from the document need
//! `#[serde(default)]` (or a container-level `#[serde(default)]`) so that
//! they deserialize to their zero value and reach the `required` /
//! `default` rules.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::error::TagError;
use crate::process::process;
use crate::value::TagValue;

/// Document format accepted by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension: `.yaml`/`.yml` are YAML,
    /// everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}

/// Error loading a configuration document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be read.
        reason: String,
    },

    /// The document is not valid for the target type.
    #[error("invalid {format}: {reason}")]
    Parse {
        /// Format the document was parsed as.
        format: Format,
        /// Deserializer message.
        reason: String,
    },

    /// The deserialized value violates its field constraints.
    #[error("validation failed: {0}")]
    Validation(#[from] TagError),
}

/// Deserialize a YAML document and process its annotations.
///
/// # Errors
///
/// [`LoadError::Parse`] if the YAML does not deserialize into `T`,
/// [`LoadError::Validation`] if the result violates its constraints.
pub fn from_yaml_str<T>(content: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned + TagValue,
{
    let value = serde_yaml::from_str(content).map_err(|e| LoadError::Parse {
        format: Format::Yaml,
        reason: e.to_string(),
    })?;
    finish(value, Format::Yaml)
}

/// Deserialize a JSON document and process its annotations.
///
/// # Errors
///
/// [`LoadError::Parse`] if the JSON does not deserialize into `T`,
/// [`LoadError::Validation`] if the result violates its constraints.
pub fn from_json_str<T>(content: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned + TagValue,
{
    let value = serde_json::from_str(content).map_err(|e| LoadError::Parse {
        format: Format::Json,
        reason: e.to_string(),
    })?;
    finish(value, Format::Json)
}

/// Read a document from disk, choosing the format with [`Format::from_path`].
///
/// # Errors
///
/// [`LoadError::DocumentLoad`] if the file cannot be read, otherwise as
/// [`from_yaml_str`] / [`from_json_str`].
pub fn from_path<T>(path: impl AsRef<Path>) -> Result<T, LoadError>
where
    T: DeserializeOwned + TagValue,
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    match Format::from_path(path) {
        Format::Yaml => from_yaml_str(&content),
        Format::Json => from_json_str(&content),
    }
}

fn finish<T: TagValue>(mut value: T, format: Format) -> Result<T, LoadError> {
    debug!(%format, type_name = std::any::type_name::<T>(), "deserialized document");
    process(&mut value)?;
    Ok(value)
}
