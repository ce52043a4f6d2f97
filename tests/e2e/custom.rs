use std::fs;

use serial_test::serial;

use crate::harness::{combined, stdout, TuiTestHarness};

#[test]
#[serial]
fn test_new_creates_placeholder() {
    let h = TuiTestHarness::new("custom_new");

    let output = h.run_cli(&["new", "work", "--no-edit"]);
    assert!(
        output.status.success(),
        "gic new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Created custom template"));

    let path = h.custom_dir().join("work.gitignore");
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "# custom .gitignore template #"
    );

    let list = h.run_cli(&["list"]);
    assert!(stdout(&list).contains("work (custom)"));
}

#[test]
#[serial]
fn test_new_runs_editor() {
    let h = TuiTestHarness::new("custom_new_editor");

    // EDITOR=true in the harness, so this exits cleanly
    let output = h.run_cli(&["new", "tools"]);
    assert!(output.status.success(), "{}", combined(&output));
    assert!(h.custom_dir().join("tools.gitignore").is_file());
}

#[test]
#[serial]
fn test_new_collision_keeps_content() {
    let h = TuiTestHarness::new("custom_collision");
    let path = h.write_custom("work", "*.log\n");

    let output = h.run_cli(&["new", "work", "--no-edit"]);
    assert!(!output.status.success());
    assert!(combined(&output).contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "*.log\n");

    let forced = h.run_cli(&["new", "work", "--no-edit", "--force"]);
    assert!(forced.status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# custom .gitignore template #"
    );
}

#[test]
#[serial]
fn test_edit_existing_and_missing() {
    let h = TuiTestHarness::new("custom_edit");
    h.write_custom("work", "*.log\n");

    let output = h.run_cli(&["edit", "work (custom)"]);
    assert!(output.status.success(), "{}", combined(&output));

    let missing = h.run_cli(&["edit", "nope"]);
    assert!(!missing.status.success());
    assert!(combined(&missing).contains("Template not found: nope"));
}

#[test]
#[serial]
fn test_delete_twice() {
    let h = TuiTestHarness::new("custom_delete");
    let path = h.write_custom("work", "*.log\n");

    let first = h.run_cli(&["delete", "work"]);
    assert!(first.status.success());
    assert!(stdout(&first).contains("Deleted custom template: work"));
    assert!(!path.exists());

    let second = h.run_cli(&["rm", "work"]);
    assert!(second.status.success());
    assert!(stdout(&second).contains("already gone"));
}
