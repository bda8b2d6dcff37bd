//! Error handling types for a11y-canon
//!
//! Role normalization and language resolution never fail; these errors only
//! surface at construction and configuration boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// A language tag string that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageTagError {
    /// Nothing left after trimming
    #[error("Language tag is empty")]
    Empty,

    /// A subtag contains characters other than ASCII letters and digits
    #[error("Invalid subtag '{subtag}' in language tag '{tag}'")]
    InvalidSubtag { tag: String, subtag: String },
}

/// A default language mapping that disagrees with the available languages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefaultMapError {
    /// The mapped tag is not something the synthesizer can produce
    #[error("Default language '{key}' maps to unsupported language '{tag}'")]
    UnsupportedTarget { key: String, tag: String },

    /// The key is itself an available language, so the mapping would hide it
    #[error("Default language key '{key}' is also an available language")]
    ShadowedKey { key: String },
}

/// Unknown `aria-live` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown aria-live politeness: {0}")]
pub struct LivePolitenessError(pub String);

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config file as TOML
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A platform role key that is not a non-negative integer
    #[error("Invalid platform role id '{0}': expected a non-negative integer")]
    InvalidPlatformRoleId(String),

    /// A language listed in the config could not be parsed
    #[error("Invalid language in config: {0}")]
    Language(#[from] LanguageTagError),
}

impl ConfigError {
    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for the given path
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
