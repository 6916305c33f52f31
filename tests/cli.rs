use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn inkpad_cmd() -> Command {
    Command::cargo_bin("inkpad").expect("binary exists")
}

/// Writes a small config so runs never touch the user's real config.
fn write_config(dir: &TempDir, extra: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!("[canvas]\nwidth = 120\nheight = 80\ndisplay_width = 60.0\n{extra}"),
    )
    .unwrap();
    path
}

const STROKE: &str = r#"{"event":"pointer_down","device":"mouse","x":5,"y":5}
{"event":"pointer_move","device":"mouse","x":50,"y":30}
{"event":"pointer_up","device":"mouse"}
"#;

#[test]
fn inkpad_help_prints_usage() {
    inkpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand raster drawing surface with undo/redo and PNG export",
        ));
}

#[test]
fn no_arguments_prints_script_usage() {
    inkpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--script events.jsonl"));
}

#[test]
fn export_requires_script() {
    inkpad_cmd()
        .arg("--export")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_with_export_writes_picture() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "");
    let script = temp.path().join("events.jsonl");
    fs::write(&script, STROKE).unwrap();
    let out = temp.path().join("out");

    inkpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&out)
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("picture.png"));

    let bytes = fs::read(out.join("picture.png")).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn save_action_in_script_uses_configured_filename() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "[export]\nfilename = \"sketch.png\"\n");
    let script = temp.path().join("events.jsonl");
    fs::write(&script, format!("{STROKE}{{\"action\":\"save\"}}\n")).unwrap();

    inkpad_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("sketch.png"));

    assert!(temp.path().join("sketch.png").exists());
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp, "");
    let script = temp.path().join("events.jsonl");
    fs::write(&script, "{\"action\":\"undo\"}\n{\"event\":\"hover\"}\n").unwrap();

    inkpad_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
