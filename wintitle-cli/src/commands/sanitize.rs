//! `wintitle sanitize <template>`

use anyhow::Result;
use clap::Args;

use wintitle_core::template;

/// Print the canonical form of a template.
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Raw template, e.g. "{{file}}{{file}} - {{vault}}".
    pub template: String,
}

impl SanitizeArgs {
    pub fn run(self) -> Result<()> {
        println!("{}", template::sanitize(&self.template));
        Ok(())
    }
}
