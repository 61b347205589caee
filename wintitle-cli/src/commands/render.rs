//! `wintitle render` — one-off rendering of a template.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wintitle_core::{
    template,
    types::{FileContext, VaultName},
};
use wintitle_renderer::{Markers, RenderContext, RenderOptions, Renderer};

use crate::program_info;

/// Arguments for `wintitle render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template, e.g. "{{folder}}/{{file}} - {{vault}}".
    pub template: String,

    /// Vault-relative path of the active document. Omit for no document.
    #[arg(long)]
    pub file: Option<String>,

    /// Vault name.
    #[arg(long, default_value = "Vault")]
    pub vault: String,

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
struct RenderJson {
    title: String,
    template: String,
    fell_back: bool,
    markers: Markers,
    context: RenderContext,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let file = self.file.as_deref().map(FileContext::from_vault_path);
        let vault = VaultName::from(self.vault.as_str());
        let program = program_info(self.program.as_deref(), self.native_title.as_deref());
        let renderer = Renderer::with_options(RenderOptions {
            tidy_separators: self.tidy,
        });

        let context = RenderContext::new(file.as_ref(), &vault, &program);
        let rendered = renderer.render_with_context(&self.template, &context);
        tracing::debug!(title = %rendered.title, fell_back = rendered.fell_back, "rendered");

        if !self.json {
            println!("{}", rendered.title);
            return Ok(());
        }

        let payload = RenderJson {
            title: rendered.title,
            template: template::sanitize(&self.template),
            fell_back: rendered.fell_back,
            markers: rendered.markers,
            context,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("failed to serialize render JSON")?
        );
        Ok(())
    }
}
