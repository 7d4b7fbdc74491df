//! Layered configuration files.
//!
//! A config is stored as a TOML file in a main directory. An overlay directory may hold a file
//! with the same name containing only the keys that differ, which are merged over the main file
//! when loading.
use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use toml::Table;

mod error;

pub use error::{ConfigKind, Error, ErrorKind, Result};

/// A configuration struct backed by a TOML file.
///
/// ```no_run
/// use odal::Config;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// #[serde(deny_unknown_fields)]
/// pub struct MeowConfig {
///     count: u32,
/// }
///
/// impl Config for MeowConfig {
///     const PATH: &'static str = "meow.toml";
/// }
///
/// // loads `config/meow.toml`
/// let config = MeowConfig::load("config").unwrap();
/// ```
pub trait Config: DeserializeOwned {
    /// File name of the config, relative to the config directories.
    const PATH: &'static str;

    /// Load the config from `main_dir` without any overlay.
    fn load(main_dir: impl AsRef<Path>) -> Result<Self> {
        let main = read_table::<Self>(main_dir.as_ref(), ConfigKind::Main)?;
        tracing::info!("loaded config `{}`", Self::PATH);

        deserialize::<Self>(main)
    }

    /// Load the config from `main_dir`, with the file in `overlay_dir` merged over it.
    ///
    /// Keys in the overlay that do not exist in the main file are ignored.
    fn load_with_overlay(
        main_dir: impl AsRef<Path>,
        overlay_dir: impl AsRef<Path>,
    ) -> Result<Self> {
        let main = read_table::<Self>(main_dir.as_ref(), ConfigKind::Main)?;
        let overlay = read_table::<Self>(overlay_dir.as_ref(), ConfigKind::Overlay)?;
        tracing::info!("loaded config `{}` with overlay", Self::PATH);

        deserialize::<Self>(merge_tables(main, overlay, false))
    }
}

fn read_table<T: Config>(dir: &Path, config_kind: ConfigKind) -> Result<Table> {
    let path = dir.join(T::PATH);
    let error = |kind| Error {
        name: T::PATH.to_string(),
        kind,
    };

    let contents = fs::read_to_string(&path).map_err(|source| {
        error(ErrorKind::Load {
            path: path.display().to_string(),
            config_kind,
            source,
        })
    })?;

    contents.parse::<Table>().map_err(|source| {
        error(ErrorKind::Parse {
            path: path.display().to_string(),
            config_kind,
            source,
        })
    })
}

fn deserialize<T: Config>(table: Table) -> Result<T> {
    toml::Value::Table(table).try_into().map_err(|source| Error {
        name: T::PATH.to_string(),
        kind: ErrorKind::Deserialize(source),
    })
}

/// Recursively merge `overlay` over `main`.
///
/// Values in `overlay` replace the values in `main`, nested tables are merged key by key. Keys
/// only present in `overlay` are added when `add_keys` is set.
#[must_use]
pub fn merge_tables(main: Table, mut overlay: Table, add_keys: bool) -> Table {
    let mut merged = Table::new();

    for (key, value) in main {
        let merged_value = match (value, overlay.remove(&key)) {
            (toml::Value::Table(main_table), Some(toml::Value::Table(overlay_table))) => {
                toml::Value::Table(merge_tables(main_table, overlay_table, add_keys))
            }
            // a table can't be replaced by a plain value, keep the main one
            (value @ toml::Value::Table(_), Some(_)) => value,
            (_, Some(overlay_value)) => overlay_value,
            (value, None) => value,
        };

        merged.insert(key, merged_value);
    }

    if add_keys {
        merged.extend(overlay);
    }

    merged
}
