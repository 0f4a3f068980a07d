#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("text_notes").unwrap();
    c.env("NO_COLOR", "1").env_remove("TEXT_NOTES_LOG");
    c
}

/// Full stdin script: the folder answer followed by menu input.
fn script(dir: &Path, rest: &str) -> String {
    format!("{}\n{}", dir.display(), rest)
}

fn write_notes(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), format!("{name} body\n")).unwrap();
    }
}

#[test]
fn creates_missing_folder_then_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let folder = temp.path().join("nested").join("notes");
    cmd()
        .write_stdin(script(&folder, "3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Welcome to the Notes Application ==="))
        .stdout(predicate::str::contains("Folder created at:"))
        .stdout(predicate::str::contains("=== MAIN MENU ==="))
        .stdout(predicate::str::contains("Goodbye!"));
    assert!(folder.is_dir());
}

#[test]
fn folder_failure_exits_with_status_one() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("occupied");
    fs::write(&file, "not a folder").unwrap();
    cmd()
        .write_stdin(script(&file, "3\n"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error creating/accessing folder:"))
        .stdout(predicate::str::contains("MAIN MENU").not());
}

#[test]
fn create_then_view_round_trip() {
    let temp = TempDir::new().unwrap();
    cmd()
        .write_stdin(script(temp.path(), "1\ntodo\nbuy milk\ncall mom\n\n2\n1\n1\n4\n8\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved successfully: todo.txt"))
        .stdout(predicate::str::contains("1. todo.txt"))
        .stdout(predicate::str::contains(
            "=== CONTENT OF: todo.txt ===\nbuy milk\ncall mom\n\n=== END OF NOTE ===",
        ));
    assert_eq!(
        fs::read_to_string(temp.path().join("todo.txt")).unwrap(),
        "buy milk\ncall mom\n"
    );
}

#[test]
fn empty_folder_reports_no_notes() {
    let temp = TempDir::new().unwrap();
    cmd()
        .write_stdin(script(temp.path(), "2\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."))
        .stdout(predicate::str::contains("NOTES LIST").not());
}

#[test]
fn pages_through_seven_notes() {
    let temp = TempDir::new().unwrap();
    write_notes(
        temp.path(),
        &["n1.txt", "n2.txt", "n3.txt", "n4.txt", "n5.txt", "n6.txt", "n7.txt"],
    );
    let out = cmd()
        .write_stdin(script(temp.path(), "2\n6\n6\n8\n3\n"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);
    let second = &out[out.find("(Page 2)").unwrap()..];
    let second = &second[..second.find("1-5:").unwrap()];
    assert!(second.contains("1. n6.txt"));
    assert!(second.contains("2. n7.txt"));
    assert!(second.contains("7. Previous page"));
    assert!(!second.contains("6. Next page"));
    assert!(out.contains("No more pages."));
    assert!(!out.contains("(Page 3)"));
}

#[test]
fn delete_requires_y() {
    let temp = TempDir::new().unwrap();
    write_notes(temp.path(), &["keep.txt", "drop.txt"]);

    cmd()
        .write_stdin(script(temp.path(), "2\n2\n3\nnope\n8\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));
    assert_eq!(
        fs::read_to_string(temp.path().join("keep.txt")).unwrap(),
        "keep.txt body\n"
    );

    // Sorted order is drop.txt, keep.txt.
    cmd()
        .write_stdin(script(temp.path(), "2\n1\n3\ny\n8\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted successfully."));
    assert!(!temp.path().join("drop.txt").exists());
    assert!(temp.path().join("keep.txt").exists());
}

#[test]
fn edit_overwrites_note() {
    let temp = TempDir::new().unwrap();
    write_notes(temp.path(), &["a.txt"]);
    cmd()
        .write_stdin(script(temp.path(), "2\n1\n2\nrewritten\n\n4\n8\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Current content:\na.txt body\n"))
        .stdout(predicate::str::contains("Note updated successfully."));
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).unwrap(),
        "rewritten\n"
    );
}

#[test]
fn closed_input_ends_quietly() {
    let temp = TempDir::new().unwrap();
    cmd()
        .write_stdin(script(temp.path(), "2\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn only_txt_files_are_listed() {
    let temp = TempDir::new().unwrap();
    write_notes(temp.path(), &["b.TXT", "a.txt", "skip.md"]);
    fs::create_dir(temp.path().join("folder.txt")).unwrap();
    cmd()
        .write_stdin(script(temp.path(), "2\n8\n3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. a.txt\n2. b.TXT\n"))
        .stdout(predicate::str::contains("skip.md").not())
        .stdout(predicate::str::contains("folder.txt").not());
}

#[test]
fn no_folder_answer_exits_with_status_one() {
    cmd()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error creating/accessing folder:"));
}

#[test]
fn latin1_body_is_saved_not_fatal() {
    let temp = TempDir::new().unwrap();
    let mut input = script(temp.path(), "1\nmenu\n").into_bytes();
    input.extend_from_slice(b"caf\xE9\n\n3\n");
    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Note saved successfully: menu.txt"))
        .stdout(predicate::str::contains("Goodbye!"));
    assert!(temp.path().join("menu.txt").is_file());
}
