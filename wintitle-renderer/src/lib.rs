//! # wintitle-renderer
//!
//! Renders a window or tab title from a placeholder template and the active
//! document's location. Rendering is a pure function and never fails: every
//! degenerate input ends in the canonical fallback title.
//!
//! ## Usage
//!
//! ```rust
//! use wintitle_core::{FileContext, ProgramInfo, VaultName};
//! use wintitle_renderer::render;
//!
//! let file = FileContext::from_vault_path("Projects/Alpha/Notes.md");
//! let title = render(
//!     "{{folder}}/{{file}}",
//!     Some(&file),
//!     &VaultName::from("Work"),
//!     &ProgramInfo::from("Obsidian v1.5.3"),
//! );
//! assert_eq!(title, "Alpha/Notes - Obsidian v1.5.3");
//! ```

pub mod context;
pub mod engine;

pub use context::RenderContext;
pub use engine::{render, Markers, RenderOptions, RenderedTitle, Renderer};
