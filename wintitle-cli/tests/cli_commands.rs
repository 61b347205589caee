use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use wintitle_core::{settings, types::VaultName};

fn wintitle_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wintitle"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run wintitle");
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ---------------------------------------------------------------------------
// render / sanitize
// ---------------------------------------------------------------------------

#[test]
fn render_appends_program_suffix() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args([
            "render",
            "{{folder}}/{{file}}",
            "--file",
            "Projects/Alpha/Notes.md",
            "--vault",
            "Work",
            "--program",
            "Obsidian v1.5.3",
        ])
        .assert()
        .success()
        .stdout("Alpha/Notes - Obsidian v1.5.3\n");
}

#[test]
fn render_extracts_program_from_native_title() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args([
            "render",
            "{{file}} ({{app}} {{version}})",
            "--file",
            "Notes.md",
            "--native-title",
            "Notes - V - Obsidian v1.5.3",
        ])
        .assert()
        .success()
        .stdout("Notes (Obsidian v1.5.3)\n");
}

#[test]
fn render_without_document_falls_back() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["render", "{{file}}", "--vault", "Work"])
        .assert()
        .success()
        .stdout("Untitled - Work - Obsidian\n");
}

#[test]
fn render_tidy_drops_dangling_slash() {
    let home = TempDir::new().expect("home");
    let args = ["render", "{{file}}/{{folder}}", "--file", "Notes.md", "--program", "App"];

    wintitle_cmd(home.path())
        .args(args)
        .assert()
        .success()
        .stdout("Notes/ - App\n");
    wintitle_cmd(home.path())
        .args(args)
        .arg("--tidy")
        .assert()
        .success()
        .stdout("Notes - App\n");
}

#[test]
fn render_json_reports_canonical_template() {
    let home = TempDir::new().expect("home");
    let json = stdout_json(wintitle_cmd(home.path()).args([
        "render",
        "{{file}}{{file}} | {{vault}}{{app:none}}",
        "--file",
        "A/B/Todo.md",
        "--vault",
        "Work",
        "--json",
    ]));
    assert_eq!(json["title"], "Todo | Work");
    assert_eq!(json["template"], "{{file}} | {{vault}}{{app:none}}");
    assert_eq!(json["fell_back"], false);
    assert_eq!(json["markers"]["suppress_suffix"], true);
    assert_eq!(json["context"]["folders"], serde_json::json!(["A", "B"]));
}

#[test]
fn program_and_native_title_conflict() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["render", "{{file}}", "--program", "A", "--native-title", "B"])
        .assert()
        .failure();
}

#[test]
fn sanitize_collapses_repeats() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["sanitize", "{{vault}}{{vault}}{{vault}} {{folder}}{{folder}}"])
        .assert()
        .success()
        .stdout("{{vault}} {{folder}}{{folder}}\n");
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_set_persists_canonical_template() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args([
            "config",
            "set",
            "--vault",
            "Work",
            "--template",
            "{{path}}{{path}} | {{vault}}",
            "--inject-into-tabs",
            "true",
        ])
        .assert()
        .success()
        .stdout(contains("{{path}} | {{vault}}"));

    assert!(home.path().join(".wintitle/vaults/Work.yaml").is_file());
    let stored = settings::load_at(home.path(), &VaultName::from("Work")).expect("stored");
    assert_eq!(stored.template, "{{path}} | {{vault}}");
    assert!(stored.inject_into_tabs);
    assert!(stored.show_folder_in_tabs);
    assert!(stored.updated_at.is_some());

    let json =
        stdout_json(wintitle_cmd(home.path()).args(["config", "show", "--vault", "Work", "--json"]));
    assert_eq!(json["template"], "{{path}} | {{vault}}");
    assert_eq!(json["inject_into_tabs"], true);
}

#[test]
fn config_show_defaults_for_unknown_vault() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "show", "--vault", "Fresh"])
        .assert()
        .success()
        .stdout(contains("{{folder}}/{{file}} - {{vault}}").and(contains("never")));
    assert!(!home.path().join(".wintitle/vaults/Fresh.yaml").exists());
}

#[test]
fn config_set_requires_a_change() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "set", "--vault", "Work"])
        .assert()
        .failure()
        .stderr(contains("nothing to set"));
}

#[test]
fn config_set_rejects_unknown_preset() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "set", "--vault", "Work", "--preset", "fancy"])
        .assert()
        .failure()
        .stderr(contains("unknown preset"));
}

#[test]
fn config_rejects_vault_names_outside_settings_dir() {
    let home = TempDir::new().expect("home");
    for vault in ["../escape", "", "a/b"] {
        wintitle_cmd(home.path())
            .args(["config", "set", "--vault", vault, "--preset", "path"])
            .assert()
            .failure()
            .stderr(contains("invalid vault name"));
    }
    wintitle_cmd(home.path())
        .args(["preview", "--vault", "../escape"])
        .assert()
        .failure()
        .stderr(contains("invalid vault name"));

    assert!(!home.path().join(".wintitle/escape.yaml").exists());
    assert!(!home.path().join(".wintitle/vaults/.yaml").exists());
}

#[test]
fn config_list_shows_stored_vaults() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(contains("No vault settings stored."));

    for vault in ["Work", "Home"] {
        wintitle_cmd(home.path())
            .args(["config", "set", "--vault", vault, "--preset", "path"])
            .assert()
            .success();
    }
    wintitle_cmd(home.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(contains("Work").and(contains("Home")).and(contains("{{path}}")));
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

#[test]
fn preview_uses_default_settings() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args([
            "preview",
            "--vault",
            "Work",
            "--file",
            "Projects/Alpha/Notes.md",
            "--program",
            "Obsidian v1.5.3",
        ])
        .assert()
        .success()
        .stdout(contains("Preview: Alpha/Notes - Work - Obsidian v1.5.3"));
}

#[test]
fn preview_follows_stored_preset_and_tab_settings() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args([
            "config",
            "set",
            "--vault",
            "Work",
            "--preset",
            "path",
            "--inject-into-tabs",
            "true",
            "--show-folder-in-tabs",
            "false",
        ])
        .assert()
        .success();

    let json = stdout_json(wintitle_cmd(home.path()).args([
        "preview",
        "--vault",
        "Work",
        "--file",
        "Notes/Todo.md",
        "--tab",
        "Notes/Todo.md",
        "--tab",
        "Inbox/Idea.md",
        "--json",
    ]));
    assert_eq!(json["window_title"], "Notes/Todo - Obsidian");
    assert_eq!(json["change"], "updated");
    assert_eq!(json["tabs"][0]["id"], "Notes/Todo.md");
    assert_eq!(json["tabs"][0]["label"], "Todo");
    assert_eq!(json["tabs"][1]["label"], "Idea");
}

#[test]
fn preview_tidy_drops_dangling_slash() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "set", "--vault", "Work", "--template", "{{file}}/{{folder}}"])
        .assert()
        .success();

    let args = ["preview", "--vault", "Work", "--file", "Notes.md", "--program", "App"];
    wintitle_cmd(home.path())
        .args(args)
        .assert()
        .success()
        .stdout(contains("Preview: Notes/ - App"));
    wintitle_cmd(home.path())
        .args(args)
        .arg("--tidy")
        .assert()
        .success()
        .stdout(contains("Preview: Notes - App"));
}

#[test]
fn preview_without_document_keeps_literals() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["preview", "--vault", "Work", "--tab", "Todo.md"])
        .assert()
        .success()
        .stdout(contains("Preview: / - Work - Obsidian").and(contains("(not injected)")));
}

#[test]
fn preview_falls_back_when_template_renders_blank() {
    let home = TempDir::new().expect("home");
    wintitle_cmd(home.path())
        .args(["config", "set", "--vault", "Work", "--template", "{{file}}"])
        .assert()
        .success();
    wintitle_cmd(home.path())
        .args(["preview", "--vault", "Work"])
        .assert()
        .success()
        .stdout(contains("Preview: Untitled - Work - Obsidian"));
}
