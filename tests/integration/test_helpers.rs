use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A throwaway Keki home directory plus helpers to drive the real binary in it
pub struct TestBakery {
    _temp_dir: TempDir,
    pub home: PathBuf,
}

impl TestBakery {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("Keki");
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    pub fn cake_path(&self, name: &str) -> PathBuf {
        self.home.join("cake").join(format!("{name}.txt"))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.home.join("settings.json")
    }

    /// Contents of a cake file, `None` when the file does not exist
    pub fn cake_file(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.cake_path(name)).ok()
    }

    /// Run keki with no stdin
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_input(args, None)
    }

    /// Run keki, feeding `input` on stdin when given
    pub fn run_with_input(&self, args: &[&str], input: Option<&str>) -> Output {
        run_keki(&self.home, args, input)
    }

    /// Run keki and return stdout, panicking with context on failure
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_cli_success(&output, &args.join(" "));
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_keki"))
}

pub fn run_keki(home: &Path, args: &[&str], input: Option<&str>) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .arg("--no-color")
        .env("KEKI_HOME", home)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("keki binary should start");

    if let Some(input) = input {
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("writing to keki stdin");
    }

    child.wait_with_output().expect("keki should finish")
}

/// Assert CLI command succeeds with helpful error messages
pub fn assert_cli_success(output: &Output, operation: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{operation} failed:\nExit code: {}\nStderr: {stderr}\nStdout: {stdout}",
            output.status.code().unwrap_or(-1)
        );
    }
}

/// Check if CLI command output contains expected content
pub fn assert_output_contains(output: &Output, expected_content: &str, context: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stderr.contains(expected_content) || stdout.contains(expected_content),
        "{context}: Expected to find '{expected_content}' in output.\nStderr: {stderr}\nStdout: {stdout}"
    );
}
