//! Rewriting of git remote URLs into hosted browsing URLs.
//!
//! This module turns a remote's transport URL plus a ref, a file path and a line
//! selection into a link on the hosting service. Two URL layouts are supported and are
//! modelled by the closed [`HostKind`] enum; every layout decision is an exhaustive match
//! on it, so adding a host convention is a single new variant.
//!
//! # Public API
//! - [`normalize_remote_url`]: Parse a transport URL into an https base URL
//! - [`HostKind`]: Hosting convention derived from the remote host
//! - [`synthesize`]: Build the final link
//!
//! # Supported remote URL formats
//! - `git@<host>:<owner>/<repo>.git`
//! - `<host>:<owner>/<repo>`
//! - `https://<host>/<owner>/<repo>.git` (also `http`, `ssh`, `git`, `git+ssh`, with or
//!   without user info)
//!
//! An explicit port is not handled: `ssh://git@host:2222/owner/repo` keeps `host:2222`
//! as its host.

use crate::core::{
    error::{GitPermalinkError, Result},
    selection::LineSelection,
};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static SCHEME_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://(?:[^@/]+@)?([^/]+)/(.+)$").unwrap()
});

static SCP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^@/:]+@)?([^:/]+):(.+)$").unwrap());

/// A remote URL reduced to the parts a browsing URL needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRemote {
    pub host: String,
    /// Repository path without leading slash or `.git` suffix, e.g. `owner/repo`
    pub path: String,
}

impl NormalizedRemote {
    pub fn base_url(&self) -> String {
        format!("https://{}/{}", self.host, self.path)
    }

    pub fn host_kind(&self) -> HostKind {
        HostKind::classify(&self.host)
    }
}

pub fn normalize_remote_url(remote_url: &str) -> Result<NormalizedRemote> {
    let url = remote_url.trim();

    let captures = SCHEME_URL
        .captures(url)
        .or_else(|| {
            if url.contains("://") {
                None
            } else {
                SCP_URL.captures(url)
            }
        })
        .ok_or_else(|| GitPermalinkError::unrecognized_remote_url(url))?;

    let host = captures[1].to_string();
    let path = captures[2].trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/');

    if host.is_empty() || path.is_empty() {
        return Err(GitPermalinkError::unrecognized_remote_url(url));
    }

    Ok(NormalizedRemote {
        host,
        path: path.to_string(),
    })
}

/// URL layout convention of a hosting service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HostKind {
    GitHub,
    Bitbucket,
}

impl HostKind {
    /// Substring heuristic on the host name; anything unrecognized uses GitHub layout
    pub fn classify(host: &str) -> HostKind {
        if host.to_ascii_lowercase().contains("bitbucket") {
            HostKind::Bitbucket
        } else {
            HostKind::GitHub
        }
    }

    pub fn format_lines(self, selection: &LineSelection) -> String {
        let LineSelection {
            line_start,
            line_end,
        } = *selection;
        match (self, selection.is_single_line()) {
            (HostKind::GitHub, true) => format!("L{line_start}"),
            (HostKind::GitHub, false) => format!("L{line_start}-L{line_end}"),
            (HostKind::Bitbucket, true) => format!("{line_start}"),
            (HostKind::Bitbucket, false) => format!("{line_start}:{line_end}"),
        }
    }
}

/// The ref a link points at, the commit HEAD resolves to, and the branch checked out
#[derive(Debug, Clone, Copy)]
pub struct LinkTarget<'a> {
    pub git_ref: &'a str,
    pub head_commit: &'a str,
    /// None when HEAD is detached
    pub branch: Option<&'a str>,
}

/// Build the hosted URL and report which host convention it follows
pub fn synthesize(
    remote_url: &str,
    target: LinkTarget<'_>,
    filepath: &str,
    selection: &LineSelection,
) -> Result<(String, HostKind)> {
    let filepath = filepath.trim_start_matches('/');
    if filepath.is_empty() {
        return Err(GitPermalinkError::EmptyFilePath);
    }

    let remote = normalize_remote_url(remote_url)?;
    let kind = remote.host_kind();
    let base = remote.base_url();
    let lines = kind.format_lines(selection);
    log::debug!("Normalized '{remote_url}' to {base} ({kind:?})");

    let url = match kind {
        HostKind::GitHub => format!("{base}/blob/{}/{filepath}#{lines}", target.git_ref),
        HostKind::Bitbucket => format!(
            "{base}/src/{}/{filepath}?at={}#lines-{lines}",
            target.head_commit,
            target.branch.unwrap_or_default()
        ),
    };

    Ok((url, kind))
}
