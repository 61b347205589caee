//! `wintitle config` — inspect and edit stored vault settings.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use wintitle_core::{
    settings,
    types::{TemplatePreset, TitleSettings, VaultName},
};

use crate::PresetArg;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print a vault's settings (defaults when none are stored).
    Show(ShowArgs),
    /// Update a vault's settings. Unset flags keep their stored value.
    Set(SetArgs),
    /// List vaults with stored settings.
    List,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(long)]
    pub vault: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[arg(long)]
    pub vault: String,

    /// New window title template. Stored in canonical form.
    #[arg(long, conflicts_with = "preset")]
    pub template: Option<String>,

    /// Replace the template with a preset: folder-file, path.
    #[arg(long)]
    pub preset: Option<PresetArg>,

    #[arg(long)]
    pub inject_into_tabs: Option<bool>,

    #[arg(long)]
    pub show_folder_in_tabs: Option<bool>,
}

#[derive(Tabled)]
struct VaultRow {
    #[tabled(rename = "vault")]
    vault: String,
    #[tabled(rename = "template")]
    template: String,
    #[tabled(rename = "tabs")]
    tabs: String,
    #[tabled(rename = "updated")]
    updated: String,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show(args) => show(args),
        ConfigCommand::Set(args) => set(args),
        ConfigCommand::List => list(),
    }
}

fn show(args: ShowArgs) -> Result<()> {
    let vault = VaultName::from(args.vault.as_str());
    let stored = settings::load_or_default(&vault)
        .with_context(|| format!("failed to load settings for vault '{vault}'"))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stored).context("failed to serialize settings JSON")?
        );
        return Ok(());
    }

    println!("{}", vault.to_string().bold());
    println!("  template:            {}", stored.template);
    println!("  inject_into_tabs:    {}", stored.inject_into_tabs);
    println!("  show_folder_in_tabs: {}", stored.show_folder_in_tabs);
    println!("  updated:             {}", updated_label(&stored).bright_black());
    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    if args.template.is_none()
        && args.preset.is_none()
        && args.inject_into_tabs.is_none()
        && args.show_folder_in_tabs.is_none()
    {
        bail!(
            "nothing to set; pass --template, --preset, --inject-into-tabs or \
             --show-folder-in-tabs"
        );
    }

    let vault = VaultName::from(args.vault.as_str());
    let mut updated = settings::load_or_default(&vault)
        .with_context(|| format!("failed to load settings for vault '{vault}'"))?;

    if let Some(template) = args.template {
        updated.template = template;
    }
    if let Some(preset) = args.preset {
        updated.template = TemplatePreset::from(preset).template().to_string();
    }
    if let Some(enabled) = args.inject_into_tabs {
        updated.inject_into_tabs = enabled;
    }
    if let Some(enabled) = args.show_folder_in_tabs {
        updated.show_folder_in_tabs = enabled;
    }

    let stored = settings::save(&vault, &updated)
        .with_context(|| format!("failed to save settings for vault '{vault}'"))?;
    tracing::info!(vault = %vault, template = %stored.template, "settings saved");

    println!("Saved settings for {}", vault.to_string().bold());
    println!("  template: {}", stored.template);
    Ok(())
}

fn list() -> Result<()> {
    let vaults = settings::list_vaults().context("failed to list vault settings")?;
    if vaults.is_empty() {
        println!("No vault settings stored.");
        return Ok(());
    }

    let mut rows = Vec::with_capacity(vaults.len());
    for vault in vaults {
        let stored = settings::load(&vault)
            .with_context(|| format!("failed to load settings for vault '{vault}'"))?;
        rows.push(VaultRow {
            vault: vault.0,
            tabs: tabs_label(&stored).to_string(),
            updated: updated_label(&stored),
            template: stored.template,
        });
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}

fn tabs_label(settings: &TitleSettings) -> &'static str {
    match (settings.inject_into_tabs, settings.show_folder_in_tabs) {
        (false, _) => "off",
        (true, true) => "title",
        (true, false) => "name",
    }
}

fn updated_label(settings: &TitleSettings) -> String {
    settings
        .updated_at
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "never".to_string())
}
