//! Format-agnostic configuration loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Format-agnostic configuration store.
///
/// Detects format from the file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => {
                // An empty YAML document deserializes as unit; treat it as `{}`
                let content = if content.trim().is_empty() { "{}" } else { content.as_str() };
                serde_yaml::from_str(content).map_err(|e| parse_error(path, "YAML", e))
            }
            "toml" => toml::from_str(&content).map_err(|e| parse_error(path, "TOML", e)),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, "JSON", e)),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Save configuration to a file atomically.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let extension = path.extension().unwrap_or("");

        let content = match extension.to_lowercase().as_str() {
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(path, "YAML", e))?
            }
            "toml" => {
                toml::to_string_pretty(value).map_err(|e| serialize_error(path, "TOML", e))?
            }
            "json" => serde_json::to_string_pretty(value)
                .map_err(|e| serialize_error(path, "JSON", e))?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        io::write_atomic(path, content.as_bytes())
    }
}

fn parse_error(path: &NormalizedPath, format: &str, e: impl std::fmt::Display) -> Error {
    Error::ConfigParse {
        path: path.to_native(),
        format: format.into(),
        message: e.to_string(),
    }
}

fn serialize_error(path: &NormalizedPath, format: &str, e: impl std::fmt::Display) -> Error {
    Error::ConfigSerialize {
        path: path.to_native(),
        format: format.into(),
        message: e.to_string(),
    }
}
