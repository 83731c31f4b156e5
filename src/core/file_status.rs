//! Type-safe status of the single file being linked.
//!
//! This module defines [`FileStatus`], which collapses the full set of git2 status flags
//! into the three states that matter when building a hosted URL: whether the file exists
//! on the remote at all, and whether its local line numbers can be trusted.
//!
//! # Public API
//! - [`FileStatus`]: Untracked, modified or clean
//!
//! # Key Features
//! - **git2 integration**: Direct conversion from `git2::Status` flags
//! - **Display formatting**: Consistent lowercase names for debug output and messages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Working-tree status of the linked file relative to HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Never committed: no hosted copy can exist
    Untracked,
    /// Committed, but with staged or unstaged local changes
    Modified,
    /// Identical to the committed version
    Clean,
}

impl FileStatus {
    /// Convert git2 status flags for one path into a FileStatus
    ///
    /// Files that are new in the index but absent from HEAD count as untracked, since
    /// the remote cannot know about them yet. Ignored files are treated the same way.
    pub fn from_git2(flags: git2::Status) -> FileStatus {
        if flags.intersects(git2::Status::WT_NEW | git2::Status::INDEX_NEW | git2::Status::IGNORED)
        {
            return FileStatus::Untracked;
        }

        let changed = git2::Status::INDEX_MODIFIED
            | git2::Status::INDEX_DELETED
            | git2::Status::INDEX_RENAMED
            | git2::Status::INDEX_TYPECHANGE
            | git2::Status::WT_MODIFIED
            | git2::Status::WT_DELETED
            | git2::Status::WT_RENAMED
            | git2::Status::WT_TYPECHANGE
            | git2::Status::CONFLICTED;

        if flags.intersects(changed) {
            FileStatus::Modified
        } else {
            FileStatus::Clean
        }
    }

    /// Get the string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Untracked => "untracked",
            FileStatus::Modified => "modified",
            FileStatus::Clean => "clean",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
