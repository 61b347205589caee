//! `wintitle preview` — render a vault's stored settings against a workspace.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use wintitle_core::types::VaultName;
use wintitle_renderer::{RenderOptions, Renderer};
use wintitle_session::{StaticWorkspace, TitleSession, TitleUpdate};

use crate::program_info;

/// Arguments for `wintitle preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Vault whose stored settings are used (defaults when none are stored).
    #[arg(long)]
    pub vault: String,

    /// Vault-relative path of the active document.
    #[arg(long)]
    pub file: Option<String>,

    /// Vault-relative path of an open tab. Repeatable.
    #[arg(long = "tab")]
    pub tabs: Vec<String>,

    /// Program info used verbatim, e.g. "Obsidian v1.5.3".
    #[arg(long, conflicts_with = "native_title")]
    pub program: Option<String>,

    /// Host's native window title; program info is extracted from it.
    #[arg(long)]
    pub native_title: Option<String>,

    /// Drop a dangling '/' left in front of a separator by an empty folder.
    #[arg(long)]
    pub tidy: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PreviewJson {
    vault: String,
    template: String,
    preview: String,
    #[serde(flatten)]
    update: TitleUpdate,
}

#[derive(Tabled)]
struct TabRow {
    #[tabled(rename = "tab")]
    tab: String,
    #[tabled(rename = "label")]
    label: String,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        let vault = VaultName::from(self.vault.as_str());
        let program = program_info(self.program.as_deref(), self.native_title.as_deref());

        let renderer = Renderer::with_options(RenderOptions {
            tidy_separators: self.tidy,
        });
        let mut session = TitleSession::load(vault, program)
            .with_context(|| format!("failed to load settings for vault '{}'", self.vault))?
            .with_renderer(renderer);

        let mut workspace = StaticWorkspace::new();
        if let Some(file) = self.file.as_deref() {
            workspace = workspace.with_active(file);
        }
        for tab in &self.tabs {
            workspace = workspace.with_tab(tab);
        }

        let update = session.refresh(&workspace);
        let preview = TitleSession::preview_line(&update.window_title);

        if self.json {
            let payload = PreviewJson {
                vault: session.vault().to_string(),
                template: session.settings().template.clone(),
                preview,
                update,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload)
                    .context("failed to serialize preview JSON")?
            );
            return Ok(());
        }

        println!(
            "{} | template: {}",
            session.vault().to_string().bold(),
            session.settings().template
        );
        println!("{}", update.window_title);
        println!("{}", preview.bright_black());

        if update.tabs.is_empty() {
            return Ok(());
        }
        let rows: Vec<TabRow> = update
            .tabs
            .into_iter()
            .map(|tab| TabRow {
                tab: tab.id.to_string(),
                label: tab.label.unwrap_or_else(|| "(not injected)".to_string()),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
