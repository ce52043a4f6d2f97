use std::fs;

use serial_test::serial;

use crate::harness::{stdout, TuiTestHarness};

#[test]
#[serial]
fn test_compose_to_stdout() {
    let h = TuiTestHarness::new("compose_stdout");

    let output = h.run_cli(&["compose", "-t", "Node (Global)", "-t", "Rust", "--stdout"]);
    assert!(
        output.status.success(),
        "compose failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Blocks follow catalog order, not the order given on the command line
    assert_eq!(
        stdout(&output),
        "### Rust ### \n\ntarget/\n\n\n### Node (Global) ### \n\nnode_modules/\n"
    );
    assert!(h.read_output().is_none());
}

#[test]
#[serial]
fn test_compose_writes_file() {
    let h = TuiTestHarness::new("compose_file");

    let output = h.run_cli(&["compose", "-t", "macOS"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("(1 template)"));
    assert_eq!(
        h.read_output().as_deref(),
        Some("### macOS ### \n\n.DS_Store\n")
    );
}

#[test]
#[serial]
fn test_compose_includes_custom_templates() {
    let h = TuiTestHarness::new("compose_custom");
    h.write_custom("work", "*.log\n");

    let output = h.run_cli(&["compose", "-t", "work (custom)", "--stdout"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "### work (custom) ### \n\n*.log\n");
}

#[test]
#[serial]
fn test_compose_force_replaces() {
    let h = TuiTestHarness::new("compose_force");
    let target = h.project_path().join(".gitignore");
    fs::write(&target, "old\n").unwrap();

    let output = h.run_cli(&["compose", "-t", "Rust", "--force"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "### Rust ### \n\ntarget/\n"
    );
}

#[test]
#[serial]
fn test_compose_into_output_dir() {
    let h = TuiTestHarness::new("compose_outdir");
    let dir = h.project_path().join("sub");
    fs::create_dir_all(&dir).unwrap();

    let output = h.run_cli(&["compose", "-t", "Rust", "-o", dir.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(dir.join(".gitignore").is_file());
    assert!(h.read_output().is_none());
}

#[test]
#[serial]
fn test_stdout_is_document_verbatim() {
    let h = TuiTestHarness::new("compose_verbatim");
    h.write_custom("bare", "*.log");

    let output = h.run_cli(&["compose", "-t", "bare (custom)", "--stdout"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "### bare (custom) ### \n\n*.log");
}
