//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-permalink command output
//! and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the untracked file error
pub fn untracked_file() -> impl Predicate<str> {
    predicates::str::contains("File is untracked")
}

/// Creates a predicate that checks for the missing remotes error
pub fn no_remotes() -> impl Predicate<str> {
    predicates::str::contains("no remotes configured")
}

/// Creates a predicate that checks for a warning line
pub fn has_warning(fragment: &str) -> impl Predicate<str> {
    predicates::str::contains("Warning:").and(predicates::str::contains(fragment.to_string()))
}
