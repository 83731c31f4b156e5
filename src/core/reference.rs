//! Choice of the git reference embedded in a link.
//!
//! A permalink is pinned to the HEAD commit. A live link follows the current branch,
//! except on a detached HEAD where there is no branch to follow and the commit is used.

use crate::core::snapshot::RepoSnapshot;

pub fn resolve_ref(snapshot: &RepoSnapshot, permalink: bool) -> String {
    if permalink {
        return snapshot.head_commit.clone();
    }

    if snapshot.is_detached() {
        log::debug!("HEAD is detached, linking to commit {}", snapshot.head_commit);
        return snapshot.head_commit.clone();
    }

    snapshot.head_branch().unwrap_or(&snapshot.head_commit).to_string()
}
