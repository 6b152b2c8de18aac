#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Scratch home directory for `name`, so tests never read the user's config.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_journal_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_journal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Isolated environment for one test: its own database and home directory.
pub struct TestEnv {
    pub db_path: String,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        Self {
            db_path: setup_test_db(name),
            home: test_home(name),
        }
    }

    /// `journal --db <test db> <args...>`
    pub fn jn(&self, args: &[&str]) -> Command {
        let mut cmd = self.jn_default_db(&[]);
        cmd.args(["--db", &self.db_path]).args(args);
        cmd
    }

    /// `journal <args...>` using the database location of the scratch home.
    pub fn jn_default_db(&self, args: &[&str]) -> Command {
        let mut cmd = cargo_bin_cmd!("journal");
        cmd.env("HOME", &self.home)
            .env_remove("EDITOR")
            .env_remove("VISUAL")
            .args(args);
        cmd
    }

    /// Log one interruption and assert it was accepted.
    pub fn log(&self, name: &str, duration: &str, reason: &str) {
        self.jn(&["log", name, duration, reason]).assert().success();
    }

    /// Run a command and return its stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self.jn(args).output().expect("failed to run journal");
        assert!(out.status.success(), "journal {:?} failed: {:?}", args, out);
        String::from_utf8_lossy(&out.stdout).to_string()
    }

    /// Write a configuration file into the scratch home.
    pub fn write_config(&self, yaml: &str) {
        let dir = self.home.join(".journal");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("journal.conf"), yaml).expect("write config");
    }
}

/// The three entries used throughout the examples.
pub fn log_example_entries(env: &TestEnv) {
    env.log("ralph", "10", "asked about reports");
    env.log("sara", "5", "sql help");
    env.log("ralph", "17", "again");
}
