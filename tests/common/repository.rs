//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with various states
//! and configurations for comprehensive testing scenarios.

#![allow(dead_code)]

use assert_cmd::Command;
use git_permalink::core::error::{GitPermalinkError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in `repo_path`, failing if git exits unsuccessfully
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitPermalinkError::Io)?;

    if !output.status.success() {
        return Err(GitPermalinkError::Io(std::io::Error::other(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        ))));
    }
    Ok(())
}

/// Sets up a fresh git repository on branch `main` for testing
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitPermalinkError::Io)?;
    let repo_path = temp_dir.path().join("project");
    fs::create_dir_all(&repo_path)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with `src/lib.rs` committed
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    fs::create_dir_all(repo.path.join("src"))?;
    create_file(&repo.path, "src/lib.rs", "line 1\nline 2\nline 3\nline 4\n")?;
    git_add(&repo.path, "src/lib.rs")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

/// Adds a remote with the given fetch URL
pub fn add_remote(repo_path: &Path, name: &str, url: &str) -> Result<()> {
    git(repo_path, &["remote", "add", name, url])
}

/// Full commit id of HEAD
pub fn head_commit(repo_path: &Path) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Builds a git-permalink command isolated from the user's config file
pub fn permalink_cmd(repo: &TestRepo) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("git-permalink")?;
    cmd.current_dir(&repo.path)
        .env("GIT_PERMALINK_CONFIG", repo.temp_dir.path().join("config.json"));
    Ok(cmd)
}

/// Writes a config file where `permalink_cmd` will find it
pub fn write_config(repo: &TestRepo, json: &str) -> Result<()> {
    fs::write(repo.temp_dir.path().join("config.json"), json)?;
    Ok(())
}
