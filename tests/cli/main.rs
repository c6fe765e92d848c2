use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod defaults;
mod init;
mod translations;

const BIN_NAME: &str = "polycat";

/// A variable product (10) in English, its simple French translation draft
/// (20) and a plain simple product (30).
pub const CATALOG: &str = r#"{
  "languages": [
    {"slug": "en", "name": "English", "default": true},
    {"slug": "fr", "name": "Français"},
    {"slug": "de", "name": "Deutsch"}
  ],
  "taxonomies": ["pa_color"],
  "terms": [
    {"id": 1, "taxonomy": "pa_color", "slug": "red", "name": "Red",
     "translations": {"en": 1, "fr": 2}},
    {"id": 2, "taxonomy": "pa_color", "slug": "rouge", "name": "Rouge",
     "translations": {"en": 1, "fr": 2}}
  ],
  "products": [
    {"id": 10, "type": "variable",
     "defaultAttributes": {"pa_color": "Red", "custom": "Blue"},
     "variations": [11, 12],
     "translations": {"en": 10, "fr": 20}},
    {"id": 20, "type": "simple", "variations": [21],
     "translations": {"en": 10, "fr": 20}},
    {"id": 30, "type": "simple"}
  ]
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn with_catalog() -> Result<Self> {
        Self::with_file("catalog.json", CATALOG)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn defaults_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("defaults");
        cmd
    }

    pub fn pending_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("pending");
        cmd
    }

    pub fn translations_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("translations");
        cmd
    }

    pub fn init_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("init");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and return its exit code, stdout and stderr.
pub fn run<I, S>(mut cmd: Command, args: I) -> Result<(i32, String, String)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.args(args).output().context("Failed to run polycat")?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command(), ["--help"])?;

    assert_eq!(code, 0);
    for command in ["defaults", "pending", "translations", "init"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command(), [] as [&str; 0])?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"));

    Ok(())
}
