//! Parameterised tests for file-context and program-info extraction.
//!
//! Each `#[case]` is isolated — no shared state.

use rstest::rstest;
use wintitle_core::{FileContext, ProgramInfo, APP_NAME};

#[rstest]
#[case("Todo.md", "Todo", "Todo", &[])]
#[case("Notes/Todo.md", "Notes/Todo", "Todo", &["Notes"])]
#[case("Projects/Alpha/Notes.md", "Projects/Alpha/Notes", "Notes", &["Projects", "Alpha"])]
#[case("a/b/c/d/e.md", "a/b/c/d/e", "e", &["a", "b", "c", "d"])]
#[case("Daily/2024-01-01.md", "Daily/2024-01-01", "2024-01-01", &["Daily"])]
#[case("Boards/plan.excalidraw.md", "Boards/plan.excalidraw", "plan.excalidraw", &["Boards"])]
#[case("Attachments/photo.png", "Attachments/photo.png", "photo", &["Attachments"])]
#[case(".hidden", ".hidden", ".hidden", &[])]
fn file_context_from_vault_path(
    #[case] input: &str,
    #[case] path: &str,
    #[case] name: &str,
    #[case] ancestors: &[&str],
) {
    let ctx = FileContext::from_vault_path(input);
    assert_eq!(ctx.path, path);
    assert_eq!(ctx.name, name);
    assert_eq!(ctx.ancestors, ancestors);
}

#[rstest]
#[case("Todo - Work - Obsidian v1.5.3", "Obsidian v1.5.3", Some("v1.5.3"))]
#[case("Obsidian v1.4", "Obsidian v1.4", Some("v1.4"))]
#[case("Obsidian", "Obsidian", None)]
#[case("Work - Obsidian   v0.15.9 (Insider)", "Obsidian   v0.15.9", Some("v0.15.9"))]
#[case("", APP_NAME, None)]
#[case("Some other editor 2.0", APP_NAME, None)]
fn program_info_from_native_title(
    #[case] title: &str,
    #[case] expected: &str,
    #[case] version: Option<&str>,
) {
    let info = ProgramInfo::from_native_title(title);
    assert_eq!(info.as_str(), expected);
    assert_eq!(info.version(), version);
}

#[test]
fn file_context_serializes_with_ancestors() {
    let ctx = FileContext::from_vault_path("A/B/c.md");
    let yaml = serde_yaml::to_string(&ctx).expect("serialize");
    let back: FileContext = serde_yaml::from_str(&yaml).expect("deserialize");
    assert_eq!(back, ctx);
}
