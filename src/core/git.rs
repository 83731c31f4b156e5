//! Repository queries that build a [`RepoSnapshot`].
//!
//! This module provides a high-level interface over `git2` through the [`GitRepo`] struct.
//! Everything the link pipeline needs to know about a repository is read here, once per
//! invocation, and handed over as plain data.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository queries
//!
//! # Key Features
//! - **Remotes**: Names with fetch and push URLs, read straight from git config
//! - **HEAD state**: Current branch, commit id, upstream remote and ahead/behind counts
//! - **File status**: Untracked/modified/clean for the single file being linked
//! - **Identity**: The configured `user.name`, local config taking precedence over global

use crate::core::{
    error::{GitPermalinkError, Result},
    file_status::FileStatus,
    snapshot::{RemoteEntry, RepoSnapshot},
};
use git2::{ErrorCode, Repository};
use std::path::{Component, Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

/// Branch name and commit id HEAD points at
struct HeadState {
    branch: Option<String>,
    commit: String,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Open the repository containing `file`
    pub fn open_for_file(file: &Path) -> Result<Self> {
        let start = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        GitRepo::open(&start).map_err(|e| {
            log::debug!("Repository discovery from {} failed: {e}", start.display());
            GitPermalinkError::NotAGitRepository
        })
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitPermalinkError::NotAGitRepository)
    }

    /// Name of the working tree's top-level directory
    pub fn workspace_folder_name(&self) -> Option<String> {
        let workdir = self.workdir().ok()?;
        let workdir = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());
        workdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Path of `file` relative to the working tree root, with `/` separators
    pub fn relative_path(&self, file: &Path) -> Result<String> {
        let workdir = self.workdir()?.canonicalize()?;
        let absolute = canonicalize_lenient(file)?;

        let relative = absolute
            .strip_prefix(&workdir)
            .map_err(|_| GitPermalinkError::file_outside_repository(file))?;

        let parts: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        Ok(parts.join("/"))
    }

    /// Query everything the link pipeline needs for `relative_file`
    pub fn snapshot(&self, relative_file: &str) -> Result<RepoSnapshot> {
        let file_status = self.get_file_status(relative_file)?;
        let head = match self.get_head_state() {
            Ok(head) => head,
            Err(GitPermalinkError::Git(e)) if e.code() == ErrorCode::UnbornBranch => {
                // Nothing has been committed, so nothing can exist on the remote
                return Err(GitPermalinkError::untracked_file(relative_file));
            }
            Err(e) => return Err(e),
        };

        let upstream_remote_name = head
            .branch
            .as_deref()
            .and_then(|branch| self.get_upstream_remote_name(branch));
        let (ahead_count, behind_count) = self.get_ahead_behind()?.unwrap_or((0, 0));

        Ok(RepoSnapshot {
            remotes: self.get_remotes()?,
            upstream_remote_name,
            head_branch_name: head.branch,
            head_commit: head.commit,
            ahead_count,
            behind_count,
            file_status,
        })
    }

    /// Remotes in the order libgit2 reports them
    pub fn get_remotes(&self) -> Result<Vec<RemoteEntry>> {
        let config = self.repo.config()?;
        let names = self.repo.remotes()?;

        let remotes = names
            .iter()
            .flatten()
            .map(|name| {
                let fetch_url = config.get_string(&format!("remote.{name}.url")).ok();
                let push_url = config.get_string(&format!("remote.{name}.pushurl")).ok();
                RemoteEntry::new(name, fetch_url.as_deref(), push_url.as_deref())
            })
            .collect();

        Ok(remotes)
    }

    fn get_head_state(&self) -> Result<HeadState> {
        let head = self.repo.head()?;
        let commit = head.peel_to_commit()?.id().to_string();
        let branch = if head.is_branch() {
            head.shorthand().map(str::to_string)
        } else {
            None
        };
        Ok(HeadState { branch, commit })
    }

    /// Name of the remote `branch` tracks, if an upstream is configured
    pub fn get_upstream_remote_name(&self, branch: &str) -> Option<String> {
        self.repo
            .branch_upstream_remote(&format!("refs/heads/{branch}"))
            .ok()
            .and_then(|buf| buf.as_str().map(str::to_string))
            .filter(|name| !name.is_empty())
    }

    /// Get ahead/behind information for the current branch relative to its upstream
    /// Returns (ahead, behind) counts, or None if no upstream is set
    pub fn get_ahead_behind(&self) -> Result<Option<(usize, usize)>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(_) => return Ok(None),
        };

        let local_oid = match head.target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        let branch_name = match head.shorthand() {
            Some(name) => name,
            None => return Ok(None),
        };

        let local_branch = match self.repo.find_branch(branch_name, git2::BranchType::Local) {
            Ok(branch) => branch,
            Err(_) => return Ok(None),
        };

        let upstream_branch = match local_branch.upstream() {
            Ok(upstream) => upstream,
            Err(_) => return Ok(None), // No upstream configured
        };

        let upstream_oid = match upstream_branch.get().target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        match self.repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok((ahead, behind)) => Ok(Some((ahead, behind))),
            Err(e) => {
                log::warn!("Could not compute ahead/behind for '{branch_name}': {e}");
                Ok(None)
            }
        }
    }

    pub fn get_file_status(&self, relative_file: &str) -> Result<FileStatus> {
        match self.repo.status_file(Path::new(relative_file)) {
            Ok(flags) => Ok(FileStatus::from_git2(flags)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(FileStatus::Untracked),
            Err(e) => Err(e.into()),
        }
    }

    /// Configured `user.name`; empty when unset
    pub fn identity_name(&self) -> String {
        self.repo
            .config()
            .and_then(|config| config.get_string("user.name"))
            .unwrap_or_default()
    }
}

/// Canonicalize `path`, tolerating a missing final component
fn canonicalize_lenient(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(parent.canonicalize()?.join(name)),
        _ => Ok(absolute),
    }
}
