//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all git-permalink output,
//! ensuring consistent colors and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Clean stdout**: Errors and warnings go to stderr so a printed URL can be piped
//! - **User-friendly formatting**: Clear visual hierarchy and readable output

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an advisory warning
///
/// # Format
/// ```text
/// ! Warning: <message>
/// ```
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "! Warning:".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
///
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}
