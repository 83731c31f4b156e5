//! Git Permalink - turn a file and line selection in a git working tree into a URL on
//! the hosting service.
//!
//! This library provides the link pipeline behind the `git-permalink` binary: it reads a
//! snapshot of the repository, picks the remote and ref to link against, checks whether
//! the hosted file is likely to match the local one, and renders a GitHub-style or
//! Bitbucket-style URL (or a user-supplied template).
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository snapshots via [`GitRepo`]
//! - Pipeline stages and the combined [`build_link`]
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    build_link,
    check_consistency,
    normalize_remote_url,
    // Output
    print_error,
    print_warning,
    render_template,
    resolve_ref,
    select_remote,
    synthesize,

    ConsistencyReport,
    FileStatus,
    // Error handling
    GitPermalinkError,
    // Git operations
    GitRepo,
    HostKind,
    LineSelection,
    LinkConfig,
    LinkEnvironment,
    LinkReport,
    LinkRequest,
    LinkTarget,
    RemoteEntry,
    // Snapshot types
    RepoSnapshot,
    Result,
    TemplateContext,
    WarningKind,
};
