//! Result and Error types for the crate.
use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Result containing an error variant from this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Which layer of a configuration failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Main,
    Overlay,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Main => write!(f, "main"),
            ConfigKind::Overlay => write!(f, "overlay"),
        }
    }
}

/// Configuration error, tagged with the [`Config::PATH`](crate::Config::PATH) it belongs to.
#[derive(Error, Diagnostic, Debug)]
#[error("failed to load config `{name}`")]
pub struct Error {
    pub name: String,
    #[source]
    #[diagnostic_source]
    pub kind: ErrorKind,
}

/// Configuration error variants
#[derive(Error, Diagnostic, Debug)]
pub enum ErrorKind {
    /// The file could not be read, this wraps a [`std::io::Error`]
    #[error("failed to read {config_kind} config from `{path}`")]
    #[diagnostic(code(odal::load), help("does the config directory contain this file?"))]
    Load {
        path: String,
        config_kind: ConfigKind,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, this wraps a [`toml::de::Error`]
    #[error("failed to parse {config_kind} config `{path}`")]
    #[diagnostic(code(odal::parse))]
    Parse {
        path: String,
        config_kind: ConfigKind,
        #[source]
        source: toml::de::Error,
    },

    /// The merged table does not match the config struct, this wraps a [`toml::de::Error`]
    #[error("config does not match the expected layout")]
    #[diagnostic(code(odal::deserialize), help("check for typos or unknown keys"))]
    Deserialize(#[source] toml::de::Error),
}
