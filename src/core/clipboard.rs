//! Copying text to the system clipboard.
//!
//! The platform clipboard utility is run as a child process with the text on stdin, in
//! the same way git itself is invoked elsewhere. The first utility that can be spawned
//! wins; a missing utility moves on to the next candidate.

use crate::core::error::{GitPermalinkError, Result};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

const MACOS_UTILITIES: &[&[&str]] = &[&["pbcopy"]];
const WINDOWS_UTILITIES: &[&[&str]] = &[&["clip"]];
const UNIX_UTILITIES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

fn candidates() -> &'static [&'static [&'static str]] {
    match std::env::consts::OS {
        "macos" => MACOS_UTILITIES,
        "windows" => WINDOWS_UTILITIES,
        _ => UNIX_UTILITIES,
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates = candidates();

    for argv in candidates {
        let (program, args) = match argv.split_first() {
            Some(split) => split,
            None => continue,
        };

        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Clipboard utility '{program}' not found");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            log::debug!("Copied {} bytes with '{program}'", text.len());
            return Ok(());
        }
        log::warn!("Clipboard utility '{program}' exited with {status}");
    }

    let tried: Vec<&str> = candidates.iter().filter_map(|argv| argv.first().copied()).collect();
    Err(GitPermalinkError::clipboard_unavailable(&tried))
}
