//! Domain types shared by the renderer, the session and the CLI.
//!
//! Document paths are vault-relative and always `/`-separated regardless of
//! platform, so they are kept as `String` rather than `PathBuf`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Application name emitted by `{{app}}` and used as the program-info fallback.
pub const APP_NAME: &str = "Obsidian";

/// Extension stripped from document paths.
pub const MARKDOWN_EXTENSION: &str = ".md";

static PROGRAM_INFO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i){}(\s+v[\d.]+)?", regex::escape(APP_NAME)))
        .expect("program-info pattern is valid")
});

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+(?:\.\d+)*").expect("version pattern is valid"));

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of the vault (the container/workspace a document lives in).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultName(pub String);

impl fmt::Display for VaultName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VaultName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VaultName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Application name plus optional version, e.g. `"Obsidian v1.5.3"`.
///
/// Extracted once per session from the host's native window title and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramInfo(pub String);

impl ProgramInfo {
    /// Wrap an already-formatted program-info string.
    pub fn new(info: impl Into<String>) -> Self {
        Self(info.into())
    }

    /// Extract program info from a native title such as
    /// `"Notes - Work - Obsidian v1.5.3"`.
    ///
    /// Falls back to the bare [`APP_NAME`] when the title has no match.
    pub fn from_native_title(title: &str) -> Self {
        match PROGRAM_INFO_RE.find(title) {
            Some(m) => Self(m.as_str().to_string()),
            None => Self(APP_NAME.to_string()),
        }
    }

    /// The `v<digits>(.<digits>)*` portion, if any.
    pub fn version(&self) -> Option<&str> {
        VERSION_RE.find(&self.0).map(|m| m.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProgramInfo {
    fn default() -> Self {
        Self(APP_NAME.to_string())
    }
}

impl fmt::Display for ProgramInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ProgramInfo {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// File context
// ---------------------------------------------------------------------------

/// Location of a document inside the vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileContext {
    /// Slash-separated vault-relative path without the markdown extension.
    pub path: String,
    /// Basename without extension.
    pub name: String,
    /// Directory names from the vault root down to the immediate parent.
    #[serde(default)]
    pub ancestors: Vec<String>,
}

impl FileContext {
    pub fn new(path: impl Into<String>, name: impl Into<String>, ancestors: Vec<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            ancestors,
        }
    }

    /// Build a context from a vault-relative path such as `"Projects/Alpha/Notes.md"`.
    ///
    /// Empty segments are dropped. Only a trailing `.md` is removed from
    /// `path`; `name` loses the last extension of the basename whatever it is.
    pub fn from_vault_path(vault_path: &str) -> Self {
        let segments: Vec<&str> = vault_path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((basename, parents)) = segments.split_last() else {
            return Self::default();
        };

        let path = segments.join("/");
        let path = match path.strip_suffix(MARKDOWN_EXTENSION) {
            Some(stripped) => stripped.to_string(),
            None => path,
        };

        Self {
            path,
            name: strip_extension(basename).to_string(),
            ancestors: parents.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Immediate parent directory name, or `""` at the vault root.
    pub fn parent_name(&self) -> &str {
        self.ancestors.last().map(String::as_str).unwrap_or("")
    }
}

fn strip_extension(basename: &str) -> &str {
    match basename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => basename,
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Built-in template choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TemplatePreset {
    /// `{{folder}}/{{file}} - {{vault}}`
    #[default]
    FolderFile,
    /// `{{path}}`
    Path,
}

impl TemplatePreset {
    pub fn template(&self) -> &'static str {
        match self {
            TemplatePreset::FolderFile => "{{folder}}/{{file}} - {{vault}}",
            TemplatePreset::Path => "{{path}}",
        }
    }
}

impl fmt::Display for TemplatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplatePreset::FolderFile => write!(f, "folder-file"),
            TemplatePreset::Path => write!(f, "path"),
        }
    }
}

/// Per-vault title settings as persisted on disk.
///
/// Keys missing from a stored file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
    pub template: String,
    pub inject_into_tabs: bool,
    pub show_folder_in_tabs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            template: TemplatePreset::default().template().to_string(),
            inject_into_tabs: false,
            show_folder_in_tabs: true,
            updated_at: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(VaultName::from("Work").to_string(), "Work");
        assert_eq!(ProgramInfo::from("App v1.0").to_string(), "App v1.0");
    }

    #[test]
    fn program_info_from_native_title_with_version() {
        let info = ProgramInfo::from_native_title("Todo - Work - Obsidian v1.5.3");
        assert_eq!(info.as_str(), "Obsidian v1.5.3");
        assert_eq!(info.version(), Some("v1.5.3"));
    }

    #[test]
    fn program_info_match_is_case_insensitive() {
        let info = ProgramInfo::from_native_title("obsidian V1.2");
        assert_eq!(info.as_str(), "obsidian V1.2");
    }

    #[test]
    fn program_info_falls_back_to_app_name() {
        let info = ProgramInfo::from_native_title("Untitled window");
        assert_eq!(info.as_str(), APP_NAME);
        assert_eq!(info.version(), None);
    }

    #[test]
    fn version_ignores_trailing_dot() {
        assert_eq!(ProgramInfo::from("App v2.3.").version(), Some("v2.3"));
        assert_eq!(ProgramInfo::from("App").version(), None);
    }

    #[test]
    fn file_context_from_nested_path() {
        let ctx = FileContext::from_vault_path("Projects/Alpha/Notes.md");
        assert_eq!(ctx.path, "Projects/Alpha/Notes");
        assert_eq!(ctx.name, "Notes");
        assert_eq!(ctx.ancestors, vec!["Projects", "Alpha"]);
        assert_eq!(ctx.parent_name(), "Alpha");
    }

    #[test]
    fn file_context_at_root() {
        let ctx = FileContext::from_vault_path("Todo.md");
        assert_eq!(ctx.path, "Todo");
        assert_eq!(ctx.name, "Todo");
        assert!(ctx.ancestors.is_empty());
        assert_eq!(ctx.parent_name(), "");
    }

    #[test]
    fn file_context_keeps_non_markdown_extension_in_path() {
        let ctx = FileContext::from_vault_path("Assets/diagram.canvas");
        assert_eq!(ctx.path, "Assets/diagram.canvas");
        assert_eq!(ctx.name, "diagram");
    }

    #[test]
    fn file_context_ignores_empty_segments() {
        let ctx = FileContext::from_vault_path("/A//B/c.md");
        assert_eq!(ctx.path, "A/B/c");
        assert_eq!(ctx.ancestors, vec!["A", "B"]);
    }

    #[test]
    fn file_context_from_empty_path_is_empty() {
        assert_eq!(FileContext::from_vault_path(""), FileContext::default());
    }

    #[test]
    fn settings_defaults() {
        let s = TitleSettings::default();
        assert_eq!(s.template, "{{folder}}/{{file}} - {{vault}}");
        assert!(!s.inject_into_tabs);
        assert!(s.show_folder_in_tabs);
    }

    #[test]
    fn settings_missing_keys_take_defaults() {
        let s: TitleSettings = serde_yaml::from_str("inject_into_tabs: true\n").expect("parse");
        assert!(s.inject_into_tabs);
        assert!(s.show_folder_in_tabs);
        assert_eq!(s.template, TemplatePreset::FolderFile.template());
    }

    #[test]
    fn preset_display() {
        assert_eq!(TemplatePreset::Path.to_string(), "path");
        assert_eq!(TemplatePreset::Path.template(), "{{path}}");
    }
}
