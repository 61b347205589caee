//! Host boundary — where documents come from and where titles go.

use std::fmt;

use serde::{Deserialize, Serialize};

use wintitle_core::types::FileContext;

/// Host-assigned identifier of an open document tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A document currently open in a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDocument {
    pub id: DocumentId,
    pub context: FileContext,
}

impl OpenDocument {
    pub fn new(id: impl Into<DocumentId>, context: FileContext) -> Self {
        Self {
            id: id.into(),
            context,
        }
    }
}

/// Supplies document contexts on demand.
pub trait Workspace {
    /// The focused document, if any.
    fn active_document(&self) -> Option<FileContext>;

    /// Every open markdown document, in tab order.
    fn open_documents(&self) -> Vec<OpenDocument>;
}

/// Receives rendered titles.
pub trait TitleSink {
    fn set_window_title(&mut self, title: &str);

    /// `None` removes a previously injected label.
    fn set_tab_label(&mut self, id: &DocumentId, label: Option<&str>);
}

/// Fixed in-memory [`Workspace`], built from vault-relative paths.
///
/// Used by the CLI preview and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticWorkspace {
    active: Option<FileContext>,
    documents: Vec<OpenDocument>,
}

impl StaticWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active document by path. It is not opened as a tab.
    pub fn with_active(mut self, vault_path: &str) -> Self {
        self.active = Some(FileContext::from_vault_path(vault_path));
        self
    }

    /// Open a tab for `vault_path`, using the path itself as its id.
    pub fn with_tab(mut self, vault_path: &str) -> Self {
        self.documents
            .push(OpenDocument::new(vault_path, FileContext::from_vault_path(vault_path)));
        self
    }
}

impl Workspace for StaticWorkspace {
    fn active_document(&self) -> Option<FileContext> {
        self.active.clone()
    }

    fn open_documents(&self) -> Vec<OpenDocument> {
        self.documents.clone()
    }
}
