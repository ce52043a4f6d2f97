use std::time::Duration;

use serial_test::serial;

use crate::harness::{require_tmux, TuiTestHarness};

#[test]
#[serial]
fn test_pick_then_done_writes_file() {
    require_tmux!();

    let mut h = TuiTestHarness::new("tui_pick");
    h.spawn_tui(&["compose"]);
    h.wait_for("Compose .gitignore");
    h.assert_screen_contains("done");
    h.assert_screen_contains("Node (Global)");

    // Filter down to Rust and pick it
    h.send_keys("Rust");
    h.wait_for("target/");
    h.send_keys("Enter");

    // The picker reopens with the pick marked; finish with the sentinel
    h.wait_for("✓");
    h.send_keys("done");
    h.send_keys("Enter");

    h.wait_for_exit(Duration::from_secs(10));
    assert_eq!(h.read_output().as_deref(), Some("### Rust ### \n\ntarget/\n"));
}

#[test]
#[serial]
fn test_escape_writes_nothing() {
    require_tmux!();

    let mut h = TuiTestHarness::new("tui_escape");
    h.spawn_tui(&[]);
    h.wait_for("Compose .gitignore");

    h.send_keys("Escape");
    h.wait_for_exit(Duration::from_secs(10));
    assert!(h.read_output().is_none());
}
