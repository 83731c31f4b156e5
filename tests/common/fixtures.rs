//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific remote layouts
//! to test the link pipeline against real git state.

#![allow(dead_code)]

use super::repository::*;
use git_permalink::core::error::Result;

pub const GITHUB_REMOTE: &str = "git@github.com:owner/repo.git";
pub const BITBUCKET_REMOTE: &str = "git@bitbucket.org:team/repo.git";

/// Scenario: committed `src/lib.rs` with a GitHub `origin`
pub fn create_github_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    add_remote(&repo.path, "origin", GITHUB_REMOTE)?;
    Ok(repo)
}

/// Scenario: committed `src/lib.rs` with a Bitbucket `origin`
pub fn create_bitbucket_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;
    add_remote(&repo.path, "origin", BITBUCKET_REMOTE)?;
    Ok(repo)
}
