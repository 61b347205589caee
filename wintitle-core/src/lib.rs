//! wintitle core library — domain types, template lexer, settings persistence.
//!
//! - [`types`] — newtypes, [`FileContext`] and [`TitleSettings`]
//! - [`template`] — placeholder lexer and the shared `sanitize` step
//! - [`settings`] — load / save per-vault settings
//! - [`error`] — [`SettingsError`]

pub mod error;
pub mod settings;
pub mod template;
pub mod types;

pub use error::SettingsError;
pub use template::{Placeholder, Token};
pub use types::{
    FileContext, ProgramInfo, TemplatePreset, TitleSettings, VaultName, APP_NAME,
};
