//! Errors raised by the per-vault settings store.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing under `~/.wintitle/vaults/` failed.
    #[error("vault settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be encoded for writing.
    #[error("could not encode vault settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A stored settings file is not valid YAML or has wrongly typed keys.
    #[error("vault settings file {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// No settings file has been saved for the vault yet.
    #[error("settings not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// The vault name cannot be used as a settings file name.
    #[error("invalid vault name '{name}': must be non-empty and contain no '/', '\\' or '..'")]
    InvalidVaultName { name: String },
}
