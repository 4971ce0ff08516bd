#![cfg(all(unix, feature = "cli"))]

use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "frameforge-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn frameforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_frameforge"))
        .args(["--log-level", "error"])
        .args(args)
        .env_remove("FRAMEFORGE_HEADING")
        .env_remove("FRAMEFORGE_API_URL")
        .output()
        .expect("frameforge should run")
}

#[test]
fn render_prints_requested_frame() {
    let out = frameforge(&["render", "--heading", "Deck", "--keyboard", "--index", "1"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("stdout should be utf-8");
    assert!(stdout.starts_with(r#"<div class="keyboard">"#));
}

#[test]
fn render_without_index_prints_landing() {
    let out = frameforge(&["render", "--heading", "Deck", "--github", "octocat"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("stdout should be utf-8");
    assert!(stdout.contains("<h1>Deck</h1>"));
    assert!(stdout.contains("https://github.com/octocat"));
    assert!(stdout.contains("http://localhost:1001/img/gh"));
}

#[test]
fn render_readme_frame() {
    let dir = unique_temp_dir("readme");
    let readme = dir.join("README.md");
    std::fs::write(&readme, "# Notes\n\n| a | b |\n|---|---|\n| 1 | 2 |\n")
        .expect("readme should be writable");

    let out = frameforge(&[
        "render",
        "--no-landing",
        "--readme",
        readme.to_str().expect("temp path should be utf-8"),
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("stdout should be utf-8");
    assert!(stdout.contains(r#"<div class="text">"#));
    assert!(stdout.contains("<h1>Notes</h1>"));
    assert!(stdout.contains("<table>"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn strict_render_rejects_out_of_range_index() {
    let out = frameforge(&["render", "--strict", "--index", "-1"]);
    assert_eq!(out.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("error: render failed"));
}

#[test]
fn render_empty_deck_fails() {
    let out = frameforge(&["render", "--no-landing"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn frames_lists_deck_as_json() {
    let out = frameforge(&[
        "--format",
        "json",
        "frames",
        "--heading",
        "Deck",
        "--slides",
        "/srv/deck",
        "--keyboard",
    ]);
    assert!(out.status.success());
    let list: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("frames output should be JSON");
    assert_eq!(list["count"], 3);
    let classes: Vec<&str> = list["frames"]
        .as_array()
        .expect("frames should be an array")
        .iter()
        .map(|frame| frame["class"].as_str().unwrap_or(""))
        .collect();
    assert_eq!(classes, ["zero", "slides", "keyboard"]);
}

#[test]
fn version_prints_package_version() {
    let out = frameforge(&["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("stdout should be utf-8");
    assert_eq!(stdout.trim(), format!("frameforge {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn extended_version_reports_build_provenance() {
    let out = frameforge(&["version", "--extended"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("stdout should be utf-8");
    assert!(stdout.contains("name: frameforge"));
    assert!(stdout.contains("features: nav=true, templates=true, cli=true"));
    assert!(!stdout.contains("target: unknown"));
}
