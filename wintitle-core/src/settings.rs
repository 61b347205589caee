//! Per-vault YAML settings store.
//!
//! # Storage layout
//!
//! ```text
//! ~/.wintitle/
//!   vaults/
//!     <vault>.yaml     (one file per vault — mode 0600)
//! ```
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::SettingsError;
use crate::template;
use crate::types::{TitleSettings, VaultName};

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.wintitle/vaults/`
pub fn vaults_dir_at(home: &Path) -> PathBuf {
    home.join(".wintitle").join("vaults")
}

/// `<home>/.wintitle/vaults/<vault>.yaml` — pure, no I/O.
///
/// Fails with `InvalidVaultName` for names that would escape `vaults/`.
pub fn settings_path_at(home: &Path, vault: &VaultName) -> Result<PathBuf, SettingsError> {
    check_vault_name(vault)?;
    Ok(vaults_dir_at(home).join(format!("{}.yaml", vault.0)))
}

/// Empty names, path separators and `..` are rejected.
pub fn check_vault_name(vault: &VaultName) -> Result<(), SettingsError> {
    let name = vault.0.as_str();
    if name.trim().is_empty() || name.contains(['/', '\\']) || name.contains("..") {
        return Err(SettingsError::InvalidVaultName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Names of all vaults with a stored settings file, sorted.
pub fn list_vaults_at(home: &Path) -> Result<Vec<VaultName>, SettingsError> {
    let dir = vaults_dir_at(home);
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut names: Vec<VaultName> = std::fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            name.strip_suffix(".yaml").map(VaultName::from)
        })
        .filter(|vault| check_vault_name(vault).is_ok())
        .collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(names)
}

/// `list_vaults_at` convenience wrapper.
pub fn list_vaults() -> Result<Vec<VaultName>, SettingsError> {
    list_vaults_at(&home()?)
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load the settings stored for `vault`.
///
/// Returns `SettingsError::SettingsNotFound` if absent,
/// `SettingsError::Parse` (with path + line context) if malformed YAML.
/// The template is canonicalized on the way in, so hand-edited files render
/// the same as saved ones.
pub fn load_at(home: &Path, vault: &VaultName) -> Result<TitleSettings, SettingsError> {
    let path = settings_path_at(home, vault)?;
    if !path.exists() {
        return Err(SettingsError::SettingsNotFound { path });
    }
    let contents = std::fs::read_to_string(&path)?;
    let mut settings: TitleSettings =
        serde_yaml::from_str(&contents).map_err(|e| SettingsError::Parse { path, source: e })?;
    settings.template = template::sanitize(&settings.template);
    Ok(settings)
}

/// `load_at` convenience wrapper.
pub fn load(vault: &VaultName) -> Result<TitleSettings, SettingsError> {
    load_at(&home()?, vault)
}

/// Like [`load_at`], but a missing file yields [`TitleSettings::default`].
pub fn load_or_default_at(home: &Path, vault: &VaultName) -> Result<TitleSettings, SettingsError> {
    match load_at(home, vault) {
        Err(SettingsError::SettingsNotFound { .. }) => Ok(TitleSettings::default()),
        other => other,
    }
}

/// `load_or_default_at` convenience wrapper.
pub fn load_or_default(vault: &VaultName) -> Result<TitleSettings, SettingsError> {
    load_or_default_at(&home()?, vault)
}

// ---------------------------------------------------------------------------
// 3. Save (atomic)
// ---------------------------------------------------------------------------

/// Canonicalize and atomically save `settings` for `vault`.
///
/// Write flow: sanitize template → stamp `updated_at` → serialize →
/// `.yaml.tmp` sibling → `chmod 0600` → `rename`.
/// Returns the settings exactly as written.
pub fn save_at(
    home: &Path,
    vault: &VaultName,
    settings: &TitleSettings,
) -> Result<TitleSettings, SettingsError> {
    let path = settings_path_at(home, vault)?;
    let dir = vaults_dir_at(home);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        set_dir_permissions(&dir)?;
    }

    let mut stored = settings.clone();
    stored.template = template::sanitize(&stored.template);
    stored.updated_at = Some(Utc::now());

    let tmp_path = path.with_file_name(format!("{}.yaml.tmp", vault.0));

    let yaml = serde_yaml::to_string(&stored)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(stored)
}

/// `save_at` convenience wrapper.
pub fn save(vault: &VaultName, settings: &TitleSettings) -> Result<TitleSettings, SettingsError> {
    save_at(&home()?, vault, settings)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, SettingsError> {
    dirs::home_dir().ok_or(SettingsError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), SettingsError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), SettingsError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), SettingsError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), SettingsError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
