//! End-to-end runs of the ansifence binary against a throwaway home directory

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run ansifence with `home` as the home directory.
fn ansifence(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansifence"));
    cmd.env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("ANSIFENCE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn export_prints_placeholder_on_first_run() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout("```ansi\nWelcome to Discord Colored Text Generator!\n```\n");
}

#[test]
fn write_color_export_workflow() {
    let home = TempDir::new().unwrap();

    ansifence(home.path())
        .args(["write", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11 characters"));

    ansifence(home.path())
        .args(["color", "red", "--range", "0..5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied text color red."));

    ansifence(home.path())
        .args(["bold", "--range", "6..11"])
        .assert()
        .success();

    ansifence(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout(
            "```ansi\n\x1b[2;31mhello\x1b[0m \x1b[2;37m\x1b[1mworld\x1b[22m\x1b[0m\n```\n",
        )
        .stderr(predicate::str::contains("reset to placeholder"));

    // The export finalized the message.
    ansifence(home.path())
        .args(["export", "--keep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Discord Colored Text Generator!"));
}

#[test]
fn select_then_background() {
    let home = TempDir::new().unwrap();
    ansifence(home.path()).args(["write", "abc"]).assert().success();
    ansifence(home.path())
        .args(["select", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected 1..3"));
    ansifence(home.path())
        .args(["background", "orange"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied background orange."));

    ansifence(home.path())
        .args(["export", "--keep"])
        .assert()
        .success()
        .stdout("```ansi\na\x1b[2;37m\x1b[2;41mbc\x1b[0m\n```\n");
}

#[test]
fn keep_flag_preserves_document() {
    let home = TempDir::new().unwrap();
    ansifence(home.path()).args(["write", "draft"]).assert().success();
    for _ in 0..2 {
        ansifence(home.path())
            .args(["export", "--keep"])
            .assert()
            .success()
            .stdout("```ansi\ndraft\n```\n");
    }
}

#[test]
fn config_can_disable_reset_after_export() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("ansifence");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[export]\nreset_after_export = false\n",
    )
    .unwrap();

    ansifence(home.path()).args(["write", "stay"]).assert().success();
    ansifence(home.path()).arg("export").assert().success();
    ansifence(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout("```ansi\nstay\n```\n");
}

#[test]
fn render_reads_json_file_without_touching_session() {
    let home = TempDir::new().unwrap();
    let doc = home.path().join("message.json");
    fs::write(
        &doc,
        r##"[
  {"type": "text", "text": "plain "},
  {"type": "span", "foreground": "#00ffff", "underline": true, "text": "cyan"},
  {"type": "image"}
]"##,
    )
    .unwrap();

    ansifence(home.path())
        .arg("render")
        .arg(&doc)
        .assert()
        .success()
        .stdout("```ansi\nplain \x1b[2;36m\x1b[4mcyan\x1b[24m\x1b[0m\n```\n");

    let session = home
        .path()
        .join(".local/share/ansifence/session.json");
    assert!(!session.exists());
}

#[test]
fn render_from_stdin() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .args(["render", "-"])
        .write_stdin(r#"[{"type": "text", "text": "piped"}]"#)
        .assert()
        .success()
        .stdout("```ansi\npiped\n```\n");
}

#[test]
fn render_rejects_invalid_json() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .args(["render", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid document"));
}

#[test]
fn palette_lists_every_color() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .arg("palette")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("red")
                .and(predicate::str::contains("#ff0000"))
                .and(predicate::str::contains("firefly-dark-blue"))
                .and(predicate::str::contains("#0b3d91"))
                .and(predicate::str::contains("light-gray")),
        );
}

#[test]
fn unknown_color_fails() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .args(["color", "mauve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mauve"));
}

#[test]
fn show_json_dumps_nodes() {
    let home = TempDir::new().unwrap();
    ansifence(home.path()).args(["write", "abc"]).assert().success();
    ansifence(home.path())
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "text""#));
}

#[test]
fn reset_hard_removes_session() {
    let home = TempDir::new().unwrap();
    ansifence(home.path()).args(["write", "abc"]).assert().success();
    let session = home
        .path()
        .join(".local/share/ansifence/session.json");
    assert!(session.exists());

    ansifence(home.path())
        .args(["reset", "--hard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session cleared."));
    assert!(!session.exists());
}

#[test]
fn corrupt_session_is_reported() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".local/share/ansifence");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("session.json"), "garbage").unwrap();

    ansifence(home.path())
        .arg("export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reset --hard"));

    ansifence(home.path())
        .args(["reset", "--hard"])
        .assert()
        .success();
    ansifence(home.path()).arg("export").assert().success();
}

#[test]
fn config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/ansifence/config.toml"));
}

#[test]
fn config_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("ansifence");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[palette]\ntext_color = \"cyan\"\n",
    )
    .unwrap();

    ansifence(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#"text_color = "cyan""#)
                .and(predicate::str::contains("reset_after_export = true")),
        );
}

#[test]
fn render_reports_detached_session_dump() {
    let home = TempDir::new().unwrap();
    ansifence(home.path())
        .args(["render", "-"])
        .write_stdin(r#"{"document": null, "selection": null}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no document attached"));
}
