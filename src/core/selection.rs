//! Parsing of user-provided line selections.
//!
//! This module provides [`LineSelection`], the 1-based inclusive line range a link points
//! at. Editors and scripts hand it over as a short string on the command line.
//!
//! # Supported Formats
//! - **Single line**: `12`
//! - **Dash range**: `12-15`
//! - **Colon range**: `12:15`
//!
//! Reversed ranges (`15-12`, as produced by a selection made bottom-up) are normalized so
//! that `line_start <= line_end` always holds.

use crate::core::error::{GitPermalinkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSelection {
    pub line_start: usize,
    pub line_end: usize,
}

impl LineSelection {
    /// Build a selection from two 1-based line numbers in either order
    pub fn new(first: usize, second: usize) -> Result<Self> {
        if first == 0 || second == 0 {
            return Err(GitPermalinkError::invalid_line_selection(format!(
                "{first}-{second}"
            )));
        }
        Ok(Self {
            line_start: first.min(second),
            line_end: first.max(second),
        })
    }

    pub fn single(line: usize) -> Result<Self> {
        Self::new(line, line)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GitPermalinkError::invalid_line_selection(input));
        }

        let parse_line = |part: &str| -> Result<usize> {
            part.trim()
                .parse()
                .map_err(|_| GitPermalinkError::invalid_line_selection(input))
        };

        match trimmed.split_once(['-', ':']) {
            Some((start, end)) => {
                let selection = Self::new(parse_line(start)?, parse_line(end)?);
                selection.map_err(|_| GitPermalinkError::invalid_line_selection(input))
            }
            None => Self::single(parse_line(trimmed)?)
                .map_err(|_| GitPermalinkError::invalid_line_selection(input)),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.line_start == self.line_end
    }
}

impl Default for LineSelection {
    fn default() -> Self {
        Self {
            line_start: 1,
            line_end: 1,
        }
    }
}

impl fmt::Display for LineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(f, "{}", self.line_start)
        } else {
            write!(f, "{}-{}", self.line_start, self.line_end)
        }
    }
}
