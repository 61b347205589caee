//! Title rendering engine — [`Renderer`] and the free [`render`] function.
//!
//! # Pipeline
//!
//! | Step        | What happens                                                    |
//! |-------------|-----------------------------------------------------------------|
//! | sanitize    | adjacent repeats of non-repeatable placeholders collapse        |
//! | tokenize    | literal runs and placeholders, order preserved                  |
//! | substitute  | placeholders replaced, `folder` right-aligned to the ancestors  |
//! | fallback    | blank template or blank result → `<subject> - <vault> - <program>` |
//! | auto-suffix | program info appended unless an app marker was emitted         |
//! | normalize   | `//` → `/`, trailing `/` stripped                               |

use serde::Serialize;

use wintitle_core::template::{self, Placeholder, Token};
use wintitle_core::types::{FileContext, ProgramInfo, VaultName, APP_NAME};

use crate::context::RenderContext;

/// Characters treated as a trailing separator when appending program info.
pub const SUFFIX_SEPARATORS: [char; 5] = ['-', '\u{2013}', '\u{2014}', '|', ':'];

// ---------------------------------------------------------------------------
// Options and results
// ---------------------------------------------------------------------------

/// Cosmetic switches that do not change the core contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Drop a `/` that is followed (after optional whitespace) by a
    /// separator, e.g. `"Alpha/ - App"` → `"Alpha - App"`. Cleans up after a
    /// trailing `{{folder}}` that resolved empty.
    pub tidy_separators: bool,
}

/// Which app-related placeholders were seen during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Markers {
    pub app: bool,
    pub version: bool,
    pub suppress_suffix: bool,
}

impl Markers {
    /// Any marker suppresses the automatic program-info suffix.
    pub fn any(&self) -> bool {
        self.app || self.version || self.suppress_suffix
    }

    fn record(&mut self, kind: Placeholder) {
        match kind {
            Placeholder::App => self.app = true,
            Placeholder::Version => self.version = true,
            Placeholder::AppNone => self.suppress_suffix = true,
            _ => {}
        }
    }
}

/// A rendered title plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTitle {
    pub title: String,
    pub markers: Markers,
    /// `true` when the canonical fallback string was returned.
    pub fell_back: bool,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Stateless title renderer.
///
/// Cheap to copy and safe to share between threads; every call depends only
/// on its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    options: RenderOptions,
    app_name: &'static str,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Renderer with default options, emitting [`APP_NAME`] for `{{app}}`.
    pub fn new() -> Self {
        Renderer {
            options: RenderOptions::default(),
            app_name: APP_NAME,
        }
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Renderer {
            options,
            ..Self::new()
        }
    }

    /// Override the name emitted for `{{app}}`.
    pub fn with_app_name(mut self, app_name: &'static str) -> Self {
        self.app_name = app_name;
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render `template` for `file` and return only the title.
    pub fn render(
        &self,
        template: &str,
        file: Option<&FileContext>,
        vault: &VaultName,
        program: &ProgramInfo,
    ) -> String {
        self.render_detailed(template, file, vault, program).title
    }

    /// Render `template` for `file`, reporting markers and fallback use.
    pub fn render_detailed(
        &self,
        template: &str,
        file: Option<&FileContext>,
        vault: &VaultName,
        program: &ProgramInfo,
    ) -> RenderedTitle {
        let ctx = RenderContext::new(file, vault, program);
        self.render_with_context(template, &ctx)
    }

    /// Render against a caller-provided [`RenderContext`].
    pub fn render_with_context(&self, template: &str, ctx: &RenderContext) -> RenderedTitle {
        let template = template::sanitize(template);
        let tokens = template::tokenize(&template);
        let (body, markers) = self.substitute(&tokens, ctx);

        if template.trim().is_empty() || body.trim().is_empty() {
            return RenderedTitle {
                title: fallback_title(ctx),
                markers,
                fell_back: true,
            };
        }

        let titled = if markers.any() {
            body
        } else {
            append_program(&body, &ctx.program)
        };

        RenderedTitle {
            title: normalize(&titled, self.options),
            markers,
            fell_back: false,
        }
    }

    fn substitute(&self, tokens: &[Token<'_>], ctx: &RenderContext) -> (String, Markers) {
        let total_folders = template::count(tokens, Placeholder::Folder);
        let mut folder_index = 0;
        let mut markers = Markers::default();
        let mut out = String::new();

        for token in tokens {
            match *token {
                Token::Literal(text) => out.push_str(text),
                Token::Placeholder(kind) => {
                    markers.record(kind);
                    match kind {
                        Placeholder::File => out.push_str(&ctx.file_name),
                        Placeholder::Vault => out.push_str(&ctx.vault),
                        Placeholder::Path => out.push_str(&ctx.path),
                        Placeholder::Folder => {
                            out.push_str(ctx.folder_for(folder_index, total_folders));
                            folder_index += 1;
                        }
                        Placeholder::App => out.push_str(self.app_name),
                        Placeholder::Version => out.push_str(&ctx.version),
                        Placeholder::AppNone => {}
                    }
                }
            }
        }
        (out, markers)
    }
}

/// Render with a default [`Renderer`].
pub fn render(
    template: &str,
    file: Option<&FileContext>,
    vault: &VaultName,
    program: &ProgramInfo,
) -> String {
    Renderer::new().render(template, file, vault, program)
}

// ---------------------------------------------------------------------------
// Post-processing
// ---------------------------------------------------------------------------

/// `"<subject> - <vault> - <program>"`, returned for blank templates or results.
pub fn fallback_title(ctx: &RenderContext) -> String {
    format!("{} - {} - {}", ctx.fallback_subject(), ctx.vault, ctx.program)
}

/// Append program info, reusing a separator the title already ends with.
fn append_program(title: &str, program: &str) -> String {
    let trimmed = title.trim_end();
    if trimmed.ends_with(&SUFFIX_SEPARATORS[..]) {
        format!("{trimmed} {program}")
    } else {
        format!("{trimmed} - {program}")
    }
}

/// Collapse `//` runs into one `/` and strip trailing slashes.
pub fn normalize(title: &str, options: RenderOptions) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_slash = false;
    for c in title.chars() {
        let slash = c == '/';
        if !(slash && prev_slash) {
            out.push(c);
        }
        prev_slash = slash;
    }

    if options.tidy_separators {
        out = drop_slash_before_separator(&out);
    }

    out.trim_end_matches('/').to_string()
}

fn drop_slash_before_separator(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for (i, c) in title.char_indices() {
        if c == '/' && title[i + 1..].trim_start().starts_with(&SUFFIX_SEPARATORS[..]) {
            continue;
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
