//! Per-invocation repository state and link request data structures.
//!
//! This module defines the plain data the link pipeline operates on. A [`RepoSnapshot`]
//! is queried once from the repository at the start of a command and dropped at the end;
//! nothing here is cached between runs.
//!
//! # Public API
//! - [`RemoteEntry`]: A configured remote with its fetch and push URLs
//! - [`RepoSnapshot`]: Remotes, HEAD state, divergence and the linked file's status
//! - [`LinkRequest`]: What the user asked to link and how
//! - [`ResolvedRemote`]: The remote chosen for the link and the URL it resolved to

use crate::core::{file_status::FileStatus, selection::LineSelection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    pub fetch_url: Option<String>,
    pub push_url: Option<String>,
}

impl RemoteEntry {
    pub fn new(
        name: impl Into<String>,
        fetch_url: Option<&str>,
        push_url: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            fetch_url: fetch_url.map(str::to_string),
            push_url: push_url.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    /// Remotes in the order the repository reports them
    pub remotes: Vec<RemoteEntry>,
    pub upstream_remote_name: Option<String>,
    /// None when HEAD is detached
    pub head_branch_name: Option<String>,
    pub head_commit: String,
    pub ahead_count: usize,
    pub behind_count: usize,
    pub file_status: FileStatus,
}

impl RepoSnapshot {
    pub fn find_remote(&self, name: &str) -> Option<&RemoteEntry> {
        self.remotes.iter().find(|remote| remote.name == name)
    }

    /// The checked-out branch, or None when HEAD is detached
    pub fn head_branch(&self) -> Option<&str> {
        self.head_branch_name
            .as_deref()
            .filter(|branch| *branch != "HEAD")
    }

    pub fn is_detached(&self) -> bool {
        self.head_branch().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Path relative to the repository root, `/`-separated
    pub filepath: String,
    pub selection: LineSelection,
    pub permalink: bool,
    pub use_custom_url: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRemote {
    pub name: String,
    pub url: String,
}
