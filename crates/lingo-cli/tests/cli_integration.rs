use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn lingo() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("lingo")
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

const WIDGET_PACK: &str = r#"
[[language]]
name = "Widget"
conforms_to = ["Text"]
extensions = [".wdg"]
"#;

#[test]
fn identify_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "script.py", b"print('hi')\n");

    lingo()
        .arg("identify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("via extension"));
}

#[test]
fn bare_paths_default_to_identify() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "style.css", b"body {}\n");

    lingo()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSS"));
}

#[test]
fn identify_by_shebang() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "installer", b"#!/bin/sh\necho hi\n");

    lingo()
        .arg("identify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bourne shell"))
        .stdout(predicate::str::contains("via magic"));
}

#[test]
fn unknown_file_is_success_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "blob.zzz", b"\x00\x01\x02\x03");

    lingo()
        .arg("identify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn identify_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "page.html", b"<html></html>");

    let output = lingo()
        .arg("identify")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["language"], "HTML");
    assert_eq!(results[0]["matched_by"], "extension");
    assert_eq!(results[0]["is_text"], true);
}

#[test]
fn shebang_only_ignores_byte_magic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "page", b"<html></html>");

    lingo()
        .arg("identify")
        .arg("--shebang-only")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn langs_lists_builtins() {
    lingo()
        .arg("langs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Makefile"))
        .stdout(predicate::str::contains("HTML"))
        .stdout(predicate::str::contains("Bourne shell"));
}

#[test]
fn langs_json_is_valid() {
    let output = lingo().arg("langs").arg("--format").arg("json").output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert!(rows.iter().any(|row| row["name"] == "Python"));
}

#[test]
fn pack_dir_adds_languages() {
    let packs = tempfile::tempdir().unwrap();
    write_file(packs.path(), "lingo_widget.toml", WIDGET_PACK.as_bytes());
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "thing.wdg", b"widget data");

    lingo()
        .arg("identify")
        .arg(&path)
        .arg("--pack-dir")
        .arg(packs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"));
}

#[test]
fn pack_dir_overrides_builtin_by_name() {
    let packs = tempfile::tempdir().unwrap();
    write_file(
        packs.path(),
        "lingo_python.toml",
        b"[[language]]\nname = \"Python\"\nextensions = [\".python\"]\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let renamed = write_file(dir.path(), "app.python", b"");
    let classic = write_file(dir.path(), "app.py", b"");

    lingo()
        .arg("identify")
        .arg(&renamed)
        .arg("--pack-dir")
        .arg(packs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"));

    // The replacement descriptor no longer claims .py.
    lingo()
        .arg("identify")
        .arg(&classic)
        .arg("--pack-dir")
        .arg(packs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
}

#[test]
fn broken_pack_is_skipped_not_fatal() {
    let packs = tempfile::tempdir().unwrap();
    write_file(packs.path(), "lingo_bad.toml", b"[[[ not toml");
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "ok.rb", b"");

    lingo()
        .arg("identify")
        .arg(&path)
        .arg("--pack-dir")
        .arg(packs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ruby"));
}

#[test]
fn scan_summarises_a_tree() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.py", b"");
    write_file(dir.path(), "b.py", b"");
    write_file(dir.path(), "c.css", b"");

    lingo()
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("CSS"))
        .stdout(predicate::str::contains("files scanned"));
}

#[test]
fn no_arguments_is_an_error() {
    lingo().assert().failure();
}
