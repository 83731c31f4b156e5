//! Centralized initialization for link commands.
//!
//! This module provides [`LinkCommandInit`], which turns command-line input into
//! everything the pipeline needs. Every link command (open, copy, url, debug) starts
//! here, so repository discovery, path resolution and configuration layering happen in
//! one place.
//!
//! # Public API
//! - [`LinkArgs`]: Per-command arguments (file, line selection, permalink flag)
//! - [`LinkOptions`]: Global overrides for remote, template and folder name
//! - [`LinkCommandInit`]: Initializer
//! - [`LinkCommandContext`]: Initialized context ready for [`build_link`]
//!
//! # Initialization Steps
//! 1. **File check**: A file must be given
//! 2. **Git repository discovery**: Starting from the file's directory
//! 3. **Path resolution**: File path relative to the working tree root
//! 4. **Selection parsing**: `12`, `12-15` or `12:15`, defaulting to line 1
//! 5. **Configuration**: Config file, then command-line overrides
//! 6. **Snapshot**: One query pass over remotes, HEAD and file status

use crate::core::{
    config::LinkConfig,
    error::{GitPermalinkError, Result},
    git::GitRepo,
    pipeline::{build_link, LinkEnvironment, LinkReport},
    selection::LineSelection,
    snapshot::{LinkRequest, RepoSnapshot},
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    /// File to link (relative to the current directory or absolute)
    pub file: Option<PathBuf>,

    /// Line or range to link (e.g., "12", "12-15", "12:15")
    #[arg(short, long)]
    pub line: Option<String>,

    /// Pin the link to the current commit instead of the branch
    #[arg(short, long)]
    pub permalink: bool,
}

/// Overrides that apply to every link command
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    pub remote: Option<String>,
    pub template: Option<String>,
    pub folder_name: Option<String>,
}

pub struct LinkCommandContext {
    pub git_repo: GitRepo,
    pub snapshot: RepoSnapshot,
    pub request: LinkRequest,
    pub environment: LinkEnvironment,
}

impl LinkCommandContext {
    pub fn build(&self) -> Result<LinkReport> {
        build_link(&self.snapshot, &self.request, &self.environment)
    }
}

pub struct LinkCommandInit;

impl LinkCommandInit {
    pub fn initialize(args: LinkArgs, options: LinkOptions) -> Result<LinkCommandContext> {
        // Step 1: A file must be given
        let file = args.file.ok_or(GitPermalinkError::NoActiveEditor)?;

        // Step 2: Find the repository containing it
        let git_repo = GitRepo::open_for_file(&file)?;

        // Step 3: Resolve its path inside the working tree
        let filepath = git_repo.relative_path(&file)?;
        log::debug!("Linking {filepath} from {}", file.display());

        // Step 4: Parse the selection
        let selection = match args.line.as_deref() {
            Some(line) => LineSelection::parse(line)?,
            None => LineSelection::default(),
        };

        // Step 5: Layer configuration
        let config = LinkConfig::load()?.with_overrides(options.remote, options.template);
        let custom_template = config.custom_template().map(str::to_string);

        // Step 6: Query the repository once
        let snapshot = git_repo.snapshot(&filepath)?;

        let folder_name = options
            .folder_name
            .or_else(|| git_repo.workspace_folder_name());

        let request = LinkRequest {
            filepath,
            selection,
            permalink: args.permalink,
            use_custom_url: custom_template.is_some(),
        };
        let environment = LinkEnvironment {
            preferred_remote_name: config.preferred_remote_name,
            custom_template,
            identity_name: git_repo.identity_name(),
            folder_name,
        };

        Ok(LinkCommandContext {
            git_repo,
            snapshot,
            request,
            environment,
        })
    }
}
