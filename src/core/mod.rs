//! Core functionality for the git-permalink tool.
//!
//! This module provides the building blocks of the link pipeline: repository queries,
//! remote and ref resolution, consistency checks, URL synthesis, and the configuration,
//! error and output plumbing around them.

pub mod clipboard;
pub mod command_init;
pub mod config;
pub mod consistency;
pub mod dirs;
pub mod error;
pub mod file_status;
pub mod git;
pub mod output;
pub mod pipeline;
pub mod reference;
pub mod remote;
pub mod selection;
pub mod snapshot;
pub mod templates;
pub mod url;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{FailureKind, GitPermalinkError, Result};

// === Git operations ===
// Repository interface that produces per-invocation snapshots
pub use git::GitRepo;

// === Snapshot and request types ===
// Plain data handed between pipeline stages
pub use file_status::FileStatus;
pub use selection::LineSelection;
pub use snapshot::{LinkRequest, RemoteEntry, RepoSnapshot, ResolvedRemote};

// === Pipeline stages ===
// Remote selection, ref resolution, consistency checks and URL synthesis
pub use consistency::{check_consistency, ConsistencyReport, WarningKind};
pub use pipeline::{build_link, LinkEnvironment, LinkReport};
pub use reference::resolve_ref;
pub use remote::{resolve_remote_url, select_remote};
pub use url::{normalize_remote_url, synthesize, HostKind, LinkTarget, NormalizedRemote};

// === Custom URL templates ===
pub use templates::{render_template, TemplateContext, TEMPLATE_VARIABLES};

// === Configuration and command initialization ===
pub use command_init::{LinkArgs, LinkCommandContext, LinkCommandInit, LinkOptions};
pub use config::{CustomUrlConfig, LinkConfig};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_success, print_warning};
