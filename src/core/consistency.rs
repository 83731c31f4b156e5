//! Staleness and tracking checks run before a URL is synthesized.
//!
//! The hosted copy of a file only matches the local one when the file is committed,
//! unmodified, and HEAD agrees with its upstream. Nothing here diffs against the remote
//! blob: local modifications and divergence produce warnings, and only an untracked file
//! blocks the link outright.

use crate::core::{error::FailureKind, file_status::FileStatus, snapshot::RepoSnapshot};
use serde::Serialize;
use std::fmt;

/// Advisory conditions that may make the produced line numbers misleading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    AheadOfUpstream(usize),
    BehindUpstream(usize),
    ModifiedFile,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::AheadOfUpstream(count) => write!(
                f,
                "Local branch is {count} commit(s) ahead of upstream; line numbers may not match the hosted file"
            ),
            WarningKind::BehindUpstream(count) => write!(
                f,
                "Local branch is {count} commit(s) behind upstream; line numbers may not match the hosted file"
            ),
            WarningKind::ModifiedFile => write!(
                f,
                "File has local modifications; line numbers may not match the hosted file"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub errors: Vec<FailureKind>,
    pub warnings: Vec<WarningKind>,
}

impl ConsistencyReport {
    pub fn is_blocked(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn check_consistency(snapshot: &RepoSnapshot) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    if snapshot.ahead_count > 0 {
        report
            .warnings
            .push(WarningKind::AheadOfUpstream(snapshot.ahead_count));
    }
    if snapshot.behind_count > 0 {
        report
            .warnings
            .push(WarningKind::BehindUpstream(snapshot.behind_count));
    }

    match snapshot.file_status {
        FileStatus::Untracked => report.errors.push(FailureKind::UntrackedFile),
        FileStatus::Modified => report.warnings.push(WarningKind::ModifiedFile),
        FileStatus::Clean => {}
    }

    report
}
