use serial_test::serial;

use crate::harness::{stdout, TuiTestHarness};

#[test]
#[serial]
fn test_cli_list_in_catalog_order() {
    let h = TuiTestHarness::new("cli_list");
    h.write_custom("work", "*.log\n");

    let output = h.run_cli(&["list"]);
    assert!(
        output.status.success(),
        "gic list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let names: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(names, vec!["Rust", "macOS", "Node (Global)", "work (custom)"]);
}

#[test]
#[serial]
fn test_cli_list_json() {
    let h = TuiTestHarness::new("cli_list_json");

    let output = h.run_cli(&["list", "--json"]);
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["display_name"], "Rust");
    assert_eq!(entries[0]["origin"], "bundled");
    assert!(entries[2]["locator"]
        .as_str()
        .unwrap()
        .ends_with("Node.gitignore"));
}

#[test]
#[serial]
fn test_cli_list_custom_only() {
    let h = TuiTestHarness::new("cli_list_custom");

    let empty = h.run_cli(&["list", "--custom"]);
    assert!(empty.status.success());
    assert!(stdout(&empty).contains("No templates found."));

    h.write_custom("work", "*.log\n");
    let output = h.run_cli(&["ls", "--custom", "--long"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("work (custom)"), "output:\n{}", text);
    assert!(text.contains("custom"));
    assert!(!text.contains("Rust"));
}

#[test]
#[serial]
fn test_cli_completions() {
    let h = TuiTestHarness::new("cli_completions");

    let output = h.run_cli(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("gic"));
}

#[test]
#[serial]
fn test_cli_config_show_and_init() {
    let h = TuiTestHarness::new("cli_config");

    let show = h.run_cli(&["config"]);
    assert!(show.status.success());
    let text = stdout(&show);
    assert!(text.contains("not present, using defaults"), "output:\n{}", text);
    assert!(text.contains(&h.bundled_root().display().to_string()));

    let init = h.run_cli(&["config", "--init"]);
    assert!(init.status.success());
    let written = std::fs::read_to_string(h.home().join("config.toml")).unwrap();
    assert!(written.contains("output_name = \".gitignore\""));

    let again = h.run_cli(&["config", "--init"]);
    assert!(!again.status.success());
    assert!(h.run_cli(&["config", "--init", "--force"]).status.success());
}
