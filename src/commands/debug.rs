//! Inspection of the full link computation.
//!
//! Prints the snapshot, the configuration in effect, each pipeline stage's output and
//! the warnings as pretty JSON. A pipeline failure is reported inside the document
//! rather than aborting, so the state that led to it can still be inspected.

use crate::core::{
    command_init::{LinkArgs, LinkCommandInit, LinkOptions},
    error::Result,
};
use serde_json::json;

pub fn execute_debug(args: LinkArgs, options: LinkOptions) -> Result<()> {
    let context = LinkCommandInit::initialize(args, options)?;
    let repository = context
        .git_repo
        .workdir()
        .map(|path| path.display().to_string())
        .ok();

    let document = match context.build() {
        Ok(report) => {
            let warning_messages = report.warning_messages();
            json!({
                "repository": repository,
                "environment": context.environment,
                "report": report,
                "warningMessages": warning_messages,
            })
        }
        Err(e) => json!({
            "repository": repository,
            "environment": context.environment,
            "snapshot": context.snapshot,
            "request": context.request,
            "failureKind": e.failure_kind(),
            "error": e.to_string(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
