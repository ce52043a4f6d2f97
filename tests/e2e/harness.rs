//! Shared fixture for the end-to-end tests.
//!
//! Every harness owns a temp dir holding a data root (`GIC_HOME`), a bundled
//! template tree and a project directory. CLI runs are plain subprocesses;
//! TUI runs happen inside a detached tmux session whose pane is polled.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_gic");
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const POLL: Duration = Duration::from_millis(100);

pub const FIXTURES: [(&str, &str); 3] = [
    ("Rust.gitignore", "target/\n"),
    ("Global/macOS.gitignore", ".DS_Store\n"),
    ("community/Global/Node.gitignore", "node_modules/\n"),
];

pub fn tmux_available() -> bool {
    Command::new("tmux")
        .arg("-V")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

macro_rules! require_tmux {
    () => {
        if !$crate::harness::tmux_available() {
            eprintln!("Skipping: tmux not installed");
            return;
        }
    };
}
pub(crate) use require_tmux;

pub struct TuiTestHarness {
    _tmp: TempDir,
    root: PathBuf,
    session: String,
    spawned: bool,
}

impl TuiTestHarness {
    pub fn new(name: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();

        for dir in ["home", "bundled", "project"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for (rel, content) in FIXTURES {
            let path = root.join("bundled").join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        Self {
            _tmp: tmp,
            root,
            session: format!("gic_e2e_{}_{}", name, std::process::id()),
            spawned: false,
        }
    }

    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    pub fn bundled_root(&self) -> PathBuf {
        self.root.join("bundled")
    }

    pub fn custom_dir(&self) -> PathBuf {
        self.home().join("CustomGitignoreTemplates")
    }

    pub fn project_path(&self) -> PathBuf {
        self.root.join("project")
    }

    pub fn write_custom(&self, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(self.custom_dir()).unwrap();
        let path = self.custom_dir().join(format!("{}.gitignore", name));
        fs::write(&path, content).unwrap();
        path
    }

    fn env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("GIC_HOME", self.home().display().to_string()),
            ("GIC_TEMPLATES", self.bundled_root().display().to_string()),
            ("GIC_LOG", "warn".to_string()),
            ("EDITOR", "true".to_string()),
        ]
    }

    pub fn run_cli(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(BIN);
        cmd.args(args)
            .current_dir(self.project_path())
            .env_remove("GIC_CONFIG")
            .env_remove("GIC_CUSTOM_DIR")
            .env_remove("VISUAL")
            .stdin(Stdio::null());
        for (key, value) in self.env() {
            cmd.env(key, value);
        }
        cmd.output().expect("run gic")
    }

    pub fn spawn_tui(&mut self, args: &[&str]) {
        let mut cmd = Command::new("tmux");
        cmd.args(["new-session", "-d", "-s", &self.session, "-x", "120", "-y", "40"])
            .arg("-c")
            .arg(self.project_path())
            .arg("env");
        for (key, value) in self.env() {
            cmd.arg(format!("{}={}", key, value));
        }
        cmd.arg(BIN).args(args);

        let status = cmd.status().expect("spawn tmux");
        assert!(status.success(), "tmux new-session failed");
        self.spawned = true;
    }

    pub fn capture(&self) -> String {
        let output = Command::new("tmux")
            .args(["capture-pane", "-p", "-t", &self.session])
            .output()
            .expect("capture pane");
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn send_keys(&self, keys: &str) {
        let status = Command::new("tmux")
            .args(["send-keys", "-t", &self.session, keys])
            .status()
            .expect("send keys");
        assert!(status.success(), "tmux send-keys {} failed", keys);
        // Give the event loop a chance to redraw
        thread::sleep(POLL);
    }

    pub fn wait_for(&self, text: &str) {
        let start = Instant::now();
        while start.elapsed() < DEFAULT_TIMEOUT {
            if self.capture().contains(text) {
                return;
            }
            thread::sleep(POLL);
        }
        panic!(
            "timed out waiting for {:?}.\nScreen:\n{}",
            text,
            self.capture()
        );
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.capture();
        assert!(
            screen.contains(text),
            "expected screen to contain {:?}.\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn session_alive(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.session])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    pub fn wait_for_exit(&self, timeout: Duration) {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if !self.session_alive() {
                return;
            }
            thread::sleep(POLL);
        }
        panic!("gic did not exit.\nScreen:\n{}", self.capture());
    }

    pub fn read_output(&self) -> Option<String> {
        read(&self.project_path().join(".gitignore"))
    }
}

impl Drop for TuiTestHarness {
    fn drop(&mut self) {
        if self.spawned {
            let _ = Command::new("tmux")
                .args(["kill-session", "-t", &self.session])
                .output();
        }
    }
}

pub fn read(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
