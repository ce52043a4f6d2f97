//! End-to-end tests for gitignore-composer.
//!
//! These tests exercise the full `gic` binary -- both the TUI picker (via
//! tmux) and the CLI subcommands (via subprocess). Each test gets its own
//! bundled template tree, data root and project directory.
//!
//! # Running
//!
//! ```sh
//! cargo test --test e2e              # run all e2e tests
//! cargo test --test e2e -- --nocapture  # with screen dumps on failure
//! ```
//!
//! TUI tests require tmux and are skipped automatically if it is not installed.

mod harness;

mod cli;
mod compose;
mod custom;
mod tui;
