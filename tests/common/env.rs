//! Isolated test environment for running the mddbl binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an mddbl CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// A temporary project folder the binary runs in.
pub struct TestEnv {
    pub project_root: TempDir,
    /// Extra directory prepended to PATH (fake SDK tools)
    pub bin_dir: TempDir,
    mddbl_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            bin_dir: tempfile::tempdir().expect("Failed to create bin dir"),
            mddbl_bin: PathBuf::from(env!("CARGO_BIN_EXE_mddbl")),
        }
    }

    /// A project with `mddbl.json` already written.
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_config(config);
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_path("mddbl.json")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write mddbl.json");
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read mddbl.json")
    }

    pub fn config_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_config()).expect("mddbl.json is not valid JSON")
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.project_path(relative);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Install an executable shell script named `name` on the test PATH.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", script)).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod tool");
    }

    /// Run mddbl from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let path = match std::env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir.path().to_path_buf()];
                dirs.extend(std::env::split_paths(&existing));
                std::env::join_paths(dirs).expect("Failed to build PATH")
            }
            None => self.bin_dir.path().as_os_str().to_owned(),
        };

        let mut cmd = Command::new(&self.mddbl_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PATH", path)
            .env("NO_COLOR", "1")
            .env_remove("MDDBL_CONFIG")
            .env_remove("RUST_LOG")
            .env_remove("VISUAL")
            .env_remove("EDITOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mddbl");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
