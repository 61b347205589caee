//! Render context — the fields a title template can reference.

use serde::{Deserialize, Serialize};

use wintitle_core::types::{FileContext, ProgramInfo, VaultName};

/// Flat substitution payload derived from the optional [`FileContext`].
///
/// Without a file context every document-derived field is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    pub file_name: String,
    pub path: String,
    /// Ancestor directories, root first.
    pub folders: Vec<String>,
    pub vault: String,
    pub program: String,
    /// Version portion of `program`, empty if none.
    pub version: String,
}

impl RenderContext {
    /// Build a [`RenderContext`] from the document, vault and program info.
    pub fn new(file: Option<&FileContext>, vault: &VaultName, program: &ProgramInfo) -> Self {
        let (file_name, path, folders) = match file {
            Some(f) => (f.name.clone(), f.path.clone(), f.ancestors.clone()),
            None => (String::new(), String::new(), Vec::new()),
        };
        RenderContext {
            file_name,
            path,
            folders,
            vault: vault.0.clone(),
            program: program.0.clone(),
            version: program.version().unwrap_or_default().to_string(),
        }
    }

    /// Ancestor bound to the `k`-th of `total` folder placeholders.
    ///
    /// Placeholders are right-aligned against the ancestor chain: the last
    /// one gets the deepest ancestor. Indices outside the chain yield `""`.
    pub fn folder_for(&self, k: usize, total: usize) -> &str {
        let depth = self.folders.len();
        (depth + k)
            .checked_sub(total)
            .and_then(|i| self.folders.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Left part of the fallback title: path, else file name, else `Untitled`.
    pub fn fallback_subject(&self) -> &str {
        if !self.path.is_empty() {
            &self.path
        } else if !self.file_name.is_empty() {
            &self.file_name
        } else {
            "Untitled"
        }
    }
}
