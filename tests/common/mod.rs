// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides isolated working directories, custom catalogs and a runner for the init binary

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory inside the environment, created on demand
    pub fn dir(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }

    /// Command for the init binary inside `cwd` with an isolated home directory
    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_init"));
        command
            .args(args)
            .current_dir(cwd)
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("INIT_AUTHOR")
            .env_remove("INIT_TEMPLATE_DIR")
            .env_remove("INIT_LOG_LEVEL")
            .env_remove("INIT_LOG_FORMAT");
        command
    }

    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> Output {
        self.command(cwd, args)
            .output()
            .expect("Failed to execute init binary")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_in(self.path(), args)
    }

    /// Run with extra environment variables set
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut command = self.command(self.path(), args);
        for (key, value) in vars {
            command.env(key, value);
        }
        command.output().expect("Failed to execute init binary")
    }

    /// Write a minimal catalog with a single `go` language
    pub fn write_go_catalog(&self) -> PathBuf {
        let root = self.dir("catalog");
        let go = root.join("go");
        std::fs::create_dir_all(go.join("cmd")).unwrap();

        std::fs::write(
            go.join("init.json"),
            r#"{
  "language": "Go",
  "files": ["go.mod", "main.go"],
  "filesContainingExtras": ["main.go"],
  "extras": [
    { "name": "cobra", "description": "Use cobra for commands", "files": ["cmd/root.go"] }
  ]
}"#,
        )
        .unwrap();
        std::fs::write(go.join("go.mod"), "module {{kebab projectName}}\r\n\r\ngo 1.22\r\n").unwrap();
        std::fs::write(
            go.join("main.go"),
            "package main\n\n#!startExtra \"cobra\"\nimport \"{{kebab projectName}}/cmd\"\n\n#!endExtra\nfunc main() {\n#!startExtra \"cobra\"\n\tcmd.Execute()\n#!endExtra\n}\n",
        )
        .unwrap();
        std::fs::write(go.join("cmd/root.go"), "package cmd\n\nfunc Execute() {}\n").unwrap();

        root
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
