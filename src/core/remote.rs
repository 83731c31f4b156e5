//! Selection of the remote that represents where the code lives online.
//!
//! # Priority
//! 1. The remote tracked by the current branch's upstream, if it still exists
//! 2. The configured preferred remote (usually `origin`)
//! 3. The first remote the repository reports
//!
//! Selection is a pure function of the snapshot. Turning the chosen remote into a URL
//! is a separate step because a remote can exist without any URL configured.

use crate::core::{
    error::{GitPermalinkError, Result},
    snapshot::{RemoteEntry, RepoSnapshot, ResolvedRemote},
};

/// Pick the remote to link against, or None when the repository has no remotes
pub fn select_remote<'a>(
    snapshot: &'a RepoSnapshot,
    preferred_remote_name: &str,
) -> Option<&'a RemoteEntry> {
    if let Some(upstream) = snapshot
        .upstream_remote_name
        .as_deref()
        .and_then(|name| snapshot.find_remote(name))
    {
        log::debug!("Selected upstream remote '{}'", upstream.name);
        return Some(upstream);
    }

    if let Some(preferred) = snapshot.find_remote(preferred_remote_name) {
        log::debug!("Selected preferred remote '{}'", preferred.name);
        return Some(preferred);
    }

    let first = snapshot.remotes.first();
    if let Some(remote) = first {
        log::debug!(
            "No upstream or '{preferred_remote_name}' remote, falling back to '{}'",
            remote.name
        );
    }
    first
}

/// Resolve a remote to its transport URL, preferring the fetch URL
pub fn resolve_remote_url(remote: &RemoteEntry) -> Result<ResolvedRemote> {
    let url = remote
        .fetch_url
        .as_deref()
        .or(remote.push_url.as_deref())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| GitPermalinkError::no_remote_url(&remote.name))?;

    Ok(ResolvedRemote {
        name: remote.name.clone(),
        url: url.trim().to_string(),
    })
}
