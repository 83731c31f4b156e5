//! The link pipeline: from a repository snapshot and a request to a URL.
//!
//! Stages run in a fixed order and any failure ends the run without a URL:
//! 1. **Consistency checks**: untracked files abort, divergence and edits only warn
//! 2. **Remote selection**: upstream, preferred, then first remote
//! 3. **Reference resolution**: commit for permalinks and detached HEADs, else branch
//! 4. **Synthesis**: host-specific URL, or the user's custom template
//!
//! [`build_link`] is a pure function of its inputs. It does no I/O, so running it twice
//! on the same snapshot and request yields identical output.

use crate::core::{
    consistency::{check_consistency, WarningKind},
    error::{FailureKind, GitPermalinkError, Result},
    reference::resolve_ref,
    remote::{resolve_remote_url, select_remote},
    snapshot::{LinkRequest, RepoSnapshot, ResolvedRemote},
    templates::{render_template, TemplateContext},
    url::{synthesize, HostKind, LinkTarget},
};
use serde::Serialize;

/// Values from the environment and configuration that shape a link
#[derive(Debug, Clone, Serialize)]
pub struct LinkEnvironment {
    pub preferred_remote_name: String,
    /// Set when custom-URL mode is active
    pub custom_template: Option<String>,
    /// Configured git identity name as-is
    pub identity_name: String,
    pub folder_name: Option<String>,
}

/// Every intermediate value computed for one link, plus the result
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub snapshot: RepoSnapshot,
    pub request: LinkRequest,
    pub resolved_remote: Option<ResolvedRemote>,
    pub resolved_ref: String,
    pub host_kind: Option<HostKind>,
    pub url: String,
    pub warnings: Vec<WarningKind>,
}

impl LinkReport {
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

pub fn build_link(
    snapshot: &RepoSnapshot,
    request: &LinkRequest,
    environment: &LinkEnvironment,
) -> Result<LinkReport> {
    if request.filepath.trim_start_matches('/').is_empty() {
        return Err(GitPermalinkError::EmptyFilePath);
    }

    // An untracked file has nothing to link to, whatever the remotes look like
    let consistency = check_consistency(snapshot);
    if consistency.errors.contains(&FailureKind::UntrackedFile) {
        return Err(GitPermalinkError::untracked_file(&request.filepath));
    }

    let custom_template = environment
        .custom_template
        .as_deref()
        .filter(|_| request.use_custom_url);

    let selected = select_remote(snapshot, &environment.preferred_remote_name);
    let resolved_remote = match (selected, custom_template) {
        (Some(remote), None) => Some(resolve_remote_url(remote)?),
        (None, None) => return Err(GitPermalinkError::NoRemotes),
        // A custom template does not need a remote at all
        (Some(remote), Some(_)) => resolve_remote_url(remote).ok(),
        (None, Some(_)) => None,
    };

    let resolved_ref = resolve_ref(snapshot, request.permalink);
    log::debug!("Resolved ref '{resolved_ref}' (permalink: {})", request.permalink);

    let (url, host_kind) = match (custom_template, &resolved_remote) {
        (Some(template), _) => (
            render_custom_url(template, &resolved_ref, request, environment),
            None,
        ),
        (None, Some(remote)) => {
            let target = LinkTarget {
                git_ref: &resolved_ref,
                head_commit: &snapshot.head_commit,
                branch: snapshot.head_branch(),
            };
            let (url, kind) =
                synthesize(&remote.url, target, &request.filepath, &request.selection)?;
            (url, Some(kind))
        }
        (None, None) => return Err(GitPermalinkError::NoRemotes),
    };

    log::debug!("Built link {url}");
    Ok(LinkReport {
        snapshot: snapshot.clone(),
        request: request.clone(),
        resolved_remote,
        resolved_ref,
        host_kind,
        url,
        warnings: consistency.warnings,
    })
}

fn render_custom_url(
    template: &str,
    resolved_ref: &str,
    request: &LinkRequest,
    environment: &LinkEnvironment,
) -> String {
    let username: String = environment
        .identity_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let line_github = HostKind::GitHub.format_lines(&request.selection);
    let line_bitbucket = HostKind::Bitbucket.format_lines(&request.selection);

    let context = TemplateContext {
        username: Some(&username),
        git_ref: Some(resolved_ref),
        filepath: Some(&request.filepath),
        folder_name: environment.folder_name.as_deref(),
        line_github: Some(&line_github),
        line_bitbucket: Some(&line_bitbucket),
    };
    render_template(template, &context)
}
