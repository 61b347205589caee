//! [`TitleSession`] — recompute and publish titles for one vault.
//!
//! ## Refresh flow
//!
//! 1. Render the window title from the active document.
//! 2. Compare with the previously published title → `Updated` / `Unchanged`.
//! 3. Render one label per open tab (or clear them when injection is off).
//! 4. Notify observers with the freshly rendered title.

use std::path::Path;

use serde::Serialize;

use wintitle_core::{
    settings, template,
    types::{FileContext, ProgramInfo, TitleSettings, VaultName, APP_NAME},
};
use wintitle_renderer::Renderer;

use crate::error::SessionError;
use crate::observer::{ObserverId, Observers, TitleEvent, TitleObserver};
use crate::workspace::{DocumentId, OpenDocument, TitleSink, Workspace};

// ---------------------------------------------------------------------------
// Refresh results
// ---------------------------------------------------------------------------

/// Whether a refresh changed the window title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleChange {
    /// Title differs from the last published one (or is the first).
    Updated,
    /// Rendered title matches the last published one.
    Unchanged,
}

/// Label for a single tab. `None` means no injected label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabLabel {
    pub id: DocumentId,
    pub label: Option<String>,
}

/// Outcome of [`TitleSession::refresh`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleUpdate {
    pub window_title: String,
    pub change: TitleChange,
    pub tabs: Vec<TabLabel>,
}

// ---------------------------------------------------------------------------
// TitleSession
// ---------------------------------------------------------------------------

/// Title state for one vault.
pub struct TitleSession {
    vault: VaultName,
    program: ProgramInfo,
    settings: TitleSettings,
    renderer: Renderer,
    observers: Observers,
    last_title: Option<String>,
}

impl TitleSession {
    /// Create a session. The settings template is canonicalized immediately.
    pub fn new(vault: VaultName, program: ProgramInfo, mut settings: TitleSettings) -> Self {
        settings.template = template::sanitize(&settings.template);
        TitleSession {
            vault,
            program,
            settings,
            renderer: Renderer::new(),
            observers: Observers::default(),
            last_title: None,
        }
    }

    /// Create a session from the settings stored under `home`, or defaults.
    pub fn load_at(
        home: &Path,
        vault: VaultName,
        program: ProgramInfo,
    ) -> Result<Self, SessionError> {
        let stored = settings::load_or_default_at(home, &vault)?;
        Ok(Self::new(vault, program, stored))
    }

    /// [`load_at`](Self::load_at) under the user's home directory.
    pub fn load(vault: VaultName, program: ProgramInfo) -> Result<Self, SessionError> {
        let stored = settings::load_or_default(&vault)?;
        Ok(Self::new(vault, program, stored))
    }

    /// Persist the current settings under `home`.
    pub fn save_at(&mut self, home: &Path) -> Result<(), SessionError> {
        self.settings = settings::save_at(home, &self.vault, &self.settings)?;
        tracing::debug!(vault = %self.vault, "saved title settings");
        Ok(())
    }

    /// Replace the default renderer, e.g. to enable separator tidying.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        tracing::debug!(
            tidy_separators = renderer.options().tidy_separators,
            "session renderer replaced"
        );
        self.renderer = renderer;
        self
    }

    pub fn vault(&self) -> &VaultName {
        &self.vault
    }

    pub fn program(&self) -> &ProgramInfo {
        &self.program
    }

    pub fn settings(&self) -> &TitleSettings {
        &self.settings
    }

    /// Last window title published by `refresh`, if any.
    pub fn current_title(&self) -> Option<&str> {
        self.last_title.as_deref()
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Replace the template with its canonical form.
    pub fn set_template(&mut self, raw: &str) {
        self.settings.template = template::sanitize(raw);
    }

    pub fn set_inject_into_tabs(&mut self, enabled: bool) {
        self.settings.inject_into_tabs = enabled;
    }

    pub fn set_show_folder_in_tabs(&mut self, enabled: bool) {
        self.settings.show_folder_in_tabs = enabled;
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    pub fn subscribe(&mut self, observer: impl TitleObserver + 'static) -> ObserverId {
        let id = self.observers.add(Box::new(observer));
        tracing::debug!(?id, observers = self.observers.len(), "title observer subscribed");
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let removed = self.observers.remove(id);
        tracing::debug!(?id, removed, "title observer unsubscribed");
        removed
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the configured template for `file`.
    pub fn render_for(&self, file: Option<&FileContext>) -> String {
        self.renderer
            .render(&self.settings.template, file, &self.vault, &self.program)
    }

    /// Label injected into a document's tab, or `None` when injection is off.
    pub fn tab_label(&self, document: &OpenDocument) -> Option<String> {
        if !self.settings.inject_into_tabs {
            return None;
        }
        if self.settings.show_folder_in_tabs {
            Some(self.render_for(Some(&document.context)))
        } else {
            Some(document.context.name.clone())
        }
    }

    /// Recompute the window title and tab labels for `workspace`.
    pub fn refresh(&mut self, workspace: &dyn Workspace) -> TitleUpdate {
        let active = workspace.active_document();
        let window_title = self.render_for(active.as_ref());

        let change = if self.last_title.as_deref() == Some(window_title.as_str()) {
            TitleChange::Unchanged
        } else {
            TitleChange::Updated
        };
        tracing::debug!(vault = %self.vault, ?change, "window title recomputed");
        if change == TitleChange::Updated {
            tracing::info!(title = %window_title, "window title updated");
        }

        let tabs = workspace
            .open_documents()
            .iter()
            .map(|doc| TabLabel {
                id: doc.id.clone(),
                label: self.tab_label(doc),
            })
            .collect();

        self.last_title = Some(window_title.clone());
        self.observers.notify(&TitleEvent::Recomputed {
            title: window_title.clone(),
        });

        TitleUpdate {
            window_title,
            change,
            tabs,
        }
    }

    /// [`refresh`](Self::refresh), then push the result into `sink`.
    ///
    /// The window title is written only when it changed; every tab label is
    /// written so stale injections get cleared.
    pub fn apply(&mut self, workspace: &dyn Workspace, sink: &mut dyn TitleSink) -> TitleUpdate {
        let update = self.refresh(workspace);
        if update.change == TitleChange::Updated {
            sink.set_window_title(&update.window_title);
        }
        for tab in &update.tabs {
            sink.set_tab_label(&tab.id, tab.label.as_deref());
        }
        update
    }

    /// Hand the window back to the host: default title, no tab labels.
    ///
    /// Returns the restored title, `"<app> - <vault>"`.
    pub fn unload(&mut self, workspace: &dyn Workspace, sink: &mut dyn TitleSink) -> String {
        let title = self.restore_title();
        sink.set_window_title(&title);
        for doc in workspace.open_documents() {
            sink.set_tab_label(&doc.id, None);
        }
        title
    }

    /// The host's default title, `"<app> - <vault>"`. Forgets the last
    /// published title and notifies observers.
    pub fn restore_title(&mut self) -> String {
        let title = format!("{APP_NAME} - {}", self.vault);
        self.last_title = None;
        self.observers.notify(&TitleEvent::Restored {
            title: title.clone(),
        });
        title
    }

    /// Line shown under the template field in a settings view.
    pub fn preview_line(title: &str) -> String {
        if title.is_empty() {
            "Preview: (empty)".to_string()
        } else {
            format!("Preview: {title}")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
