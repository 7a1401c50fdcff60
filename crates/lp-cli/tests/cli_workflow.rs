//! End-to-end runs of the `lpad` binary against a temp project.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

fn lpad(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lpad"))
        .arg("--project")
        .arg(project)
        .arg("--format")
        .arg("raw")
        .args(args)
        .env_remove("LAUNCHPAD_LOG")
        .output()
        .expect("lpad should run")
}

fn json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "lpad failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn idea_add_then_list() {
    let temp = TempDir::new().unwrap();
    json(&lpad(temp.path(), &["init"]));

    let added = json(&lpad(
        temp.path(),
        &["idea", "add", "--name", "Ada", "--title", "Tiny CRM"],
    ));
    assert_eq!(added["title"], "Tiny CRM");

    let listed = json(&lpad(temp.path(), &["idea", "list"]));
    assert_eq!(listed[0]["position"], 1);
    assert_eq!(listed[0]["id"], added["id"]);
    assert!(temp.path().join(".launchpad/ideas.json").is_file());
}

#[test]
fn idea_update_by_id() {
    let temp = TempDir::new().unwrap();
    let added = json(&lpad(
        temp.path(),
        &["idea", "add", "--name", "Ada", "--title", "Old"],
    ));
    let id = added["id"].as_str().unwrap();

    let updated = json(&lpad(temp.path(), &["idea", "update", id, "--title", "New"]));
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["name"], "Ada");
}

#[test]
fn missing_target_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let output = lpad(temp.path(), &["link", "get", "3"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("lpad error:"), "{stderr}");
    assert!(stderr.contains("not found"), "{stderr}");
}

#[test]
fn link_with_note_is_not_fetched() {
    let temp = TempDir::new().unwrap();
    let link = json(&lpad(
        temp.path(),
        &["link", "add", "--url", "https://example.invalid", "--note", "pricing"],
    ));
    assert_eq!(link["note"], "pricing");
}

#[test]
fn link_without_note_stores_the_summary() {
    let temp = TempDir::new().unwrap();
    // Nothing listens on the discard port, so the summary is the fetch error.
    let link = json(&lpad(temp.path(), &["link", "add", "--url", "http://127.0.0.1:9/"]));
    let note = link["note"].as_str().unwrap();
    assert!(note.starts_with("Error fetching content: "), "{note}");

    let listed = json(&lpad(temp.path(), &["link", "list"]));
    assert_eq!(listed[0]["note"], link["note"]);
}

#[test]
fn blank_link_note_falls_back_to_the_summary() {
    let temp = TempDir::new().unwrap();
    for blank in ["", "   "] {
        let link = json(&lpad(
            temp.path(),
            &["link", "add", "--url", "http://127.0.0.1:9/", "--note", blank],
        ));
        let note = link["note"].as_str().unwrap();
        assert!(note.starts_with("Error fetching content: "), "{note:?}");
    }
}

#[test]
fn export_ideas_writes_csv() {
    let temp = TempDir::new().unwrap();
    json(&lpad(
        temp.path(),
        &["idea", "add", "--name", "Ada", "--title", "CRM, for bakers"],
    ));

    let report = json(&lpad(temp.path(), &["export", "ideas"]));
    assert_eq!(report[0]["rows"], 1);

    let csv = std::fs::read_to_string(temp.path().join(".launchpad/ideas_export.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("name,title,description,timestamp"));
    assert!(lines.next().unwrap().starts_with("Ada,\"CRM, for bakers\",,"));
}

#[test]
fn upload_rename_and_delete() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("deck.pdf");
    std::fs::write(&source, b"%PDF-1.7").unwrap();

    let uploaded = json(&lpad(temp.path(), &["file", "upload", source.to_str().unwrap()]));
    assert_eq!(uploaded["filename"], "deck.pdf");

    let renamed = json(&lpad(temp.path(), &["file", "rename", "1", "deck-v2.pdf"]));
    assert_eq!(renamed["filename"], "deck-v2.pdf");
    let stored = temp.path().join(".launchpad/uploads/deck-v2.pdf");
    assert_eq!(std::fs::read(&stored).unwrap(), b"%PDF-1.7");

    json(&lpad(temp.path(), &["file", "delete", "1"]));
    assert!(!stored.exists());
    assert_eq!(json(&lpad(temp.path(), &["file", "list"])), serde_json::json!([]));
}

#[test]
fn file_rename_onto_existing_upload_fails() {
    let temp = TempDir::new().unwrap();
    for (name, bytes) in [("a.txt", "AAA"), ("b.txt", "BBB")] {
        let source = temp.path().join(name);
        std::fs::write(&source, bytes).unwrap();
        json(&lpad(temp.path(), &["file", "upload", source.to_str().unwrap()]));
    }

    let output = lpad(temp.path(), &["file", "rename", "1", "b.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let uploads = temp.path().join(".launchpad/uploads");
    assert_eq!(std::fs::read_to_string(uploads.join("a.txt")).unwrap(), "AAA");
    assert_eq!(std::fs::read_to_string(uploads.join("b.txt")).unwrap(), "BBB");
}

fn shell(project: &Path, script: &str) -> (Output, Vec<Value>) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lpad"))
        .arg("--project")
        .arg(project)
        .args(["--format", "raw", "shell"])
        .env_remove("LAUNCHPAD_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("lpad shell should start");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let lines = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();
    (output, lines)
}

#[test]
fn shell_keeps_session_state_between_lines() {
    let temp = TempDir::new().unwrap();
    let (output, lines) = shell(
        temp.path(),
        "phase check 2\nnote add 'first run'\nbogus\nphase list\nnote list\nexit\n",
    );
    assert_eq!(lines.len(), 4);

    let phases = &lines[2];
    assert_eq!(phases[1]["completed"], true);
    assert_eq!(phases[0]["completed"], false);
    assert_eq!(lines[3][0]["note"], "first run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lpad error:"), "{stderr}");
}

#[test]
fn shell_updates_notes_by_listed_position() {
    let temp = TempDir::new().unwrap();
    let (_, lines) = shell(
        temp.path(),
        "note add older\nnote add newer\nnote update 2 'older, reworded'\nnote list\n",
    );
    assert_eq!(lines[2]["note"], "older, reworded");
    assert_eq!(lines[3][0]["note"], "newer");
    assert_eq!(lines[3][1]["note"], "older, reworded");
}

#[test]
fn shell_sees_writes_from_other_commands_and_releases_the_lock() {
    let temp = TempDir::new().unwrap();
    json(&lpad(temp.path(), &["idea", "add", "--name", "Ada", "--title", "Before"]));

    let (_, lines) = shell(
        temp.path(),
        "idea add --name Bo --title During\nidea list\n",
    );
    assert_eq!(lines[1][0]["title"], "Before");
    assert_eq!(lines[1][1]["title"], "During");
    assert!(!temp.path().join(".launchpad/launchpad.write.lock").exists());
}
