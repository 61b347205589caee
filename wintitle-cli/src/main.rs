//! wintitle — window and tab title templates for note vaults.
//!
//! # Usage
//!
//! ```text
//! wintitle render <template> [--file <path>] [--vault <name>] [--native-title <title>] [--tidy] [--json]
//! wintitle sanitize <template>
//! wintitle preview --vault <name> [--file <path>] [--tab <path>]... [--tidy] [--json]
//! wintitle config show --vault <name> [--json]
//! wintitle config set --vault <name> [--template <t>] [--preset folder-file|path] [--inject-into-tabs <bool>] [--show-folder-in-tabs <bool>]
//! wintitle config list
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    config::ConfigCommand, preview::PreviewArgs, render::RenderArgs, sanitize::SanitizeArgs,
};
use wintitle_core::types::{ProgramInfo, TemplatePreset};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "wintitle",
    version,
    about = "Render window and tab titles from placeholder templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a template for a single document.
    Render(RenderArgs),

    /// Print the canonical form of a template.
    Sanitize(SanitizeArgs),

    /// Render the stored vault settings for an active document and open tabs.
    Preview(PreviewArgs),

    /// Show or edit stored vault settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `TemplatePreset` from CLI args.
#[derive(Debug, Clone, Copy)]
pub struct PresetArg(pub TemplatePreset);

impl FromStr for PresetArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "folder-file" => Ok(Self(TemplatePreset::FolderFile)),
            "path" => Ok(Self(TemplatePreset::Path)),
            other => Err(format!(
                "unknown preset '{other}'; expected: folder-file, path"
            )),
        }
    }
}

impl fmt::Display for PresetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<PresetArg> for TemplatePreset {
    fn from(p: PresetArg) -> Self {
        p.0
    }
}

/// Program info from `--program` as given, else extracted from
/// `--native-title`, else the bare application name.
pub fn program_info(program: Option<&str>, native_title: Option<&str>) -> ProgramInfo {
    match (program, native_title) {
        (Some(p), _) => ProgramInfo::new(p),
        (None, Some(title)) => ProgramInfo::from_native_title(title),
        (None, None) => ProgramInfo::default(),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Sanitize(args) => args.run(),
        Commands::Preview(args) => args.run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
