// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::ast::{Document, Table, Value};
use crate::parser;
use crate::ConfigError;

mod access;
mod conversion;
mod helpers;
mod mutation;

impl Document {
    /// Parse a config from a string (no file I/O).
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut parser = parser::Parser::new(content)?;
        parser.parse_document()
    }

    /// Load and parse a config file. A leading `~/` expands to the home
    /// directory.
    ///
    /// # Example
    /// ```no_run
    /// # use tablecfg::Document;
    /// let doc = Document::from_file("settings.conf")?;
    /// let port = doc.get_int("server", "port");
    /// # Ok::<(), tablecfg::ConfigError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let resolved = helpers::resolve_path(path.as_ref())?;

        let content = fs::read_to_string(&resolved).map_err(|e| ConfigError::IoFailure {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        debug!("loaded {} bytes from {}", content.len(), resolved.display());
        Self::parse(&content)
    }

    /// Load a config file with fallback support
    ///
    /// Tries the primary path first. If it cannot be read, the fallback path
    /// is tried instead. Parse errors in the primary file are returned as-is.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, ConfigError> {
        match Self::from_file(&primary) {
            Ok(doc) => Ok(doc),
            Err(ConfigError::IoFailure { .. }) => {
                warn!(
                    "could not read {}, falling back to {}",
                    primary.as_ref().display(),
                    fallback.as_ref().display()
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    ConfigError::IoFailure { message, .. } => ConfigError::IoFailure {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Serialize the document and write it to `path`, replacing any existing
    /// file. The document itself is never modified.
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let resolved = helpers::resolve_path(path.as_ref())?;

        fs::write(&resolved, self.to_config_string()).map_err(|e| ConfigError::IoFailure {
            message: format!("Failed to write file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(302),
        })?;

        debug!("wrote config to {}", resolved.display());
        Ok(())
    }
}

impl FromStr for Document {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}
