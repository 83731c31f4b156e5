use crate::commands::build_reported_link;
use crate::core::{
    command_init::{LinkArgs, LinkOptions},
    error::{GitPermalinkError, Result},
    print_success,
};

pub fn execute_open(args: LinkArgs, options: LinkOptions) -> Result<()> {
    let report = build_reported_link(args, options)?;

    log::debug!("Opening {} in the default browser", report.url);
    open::that(&report.url)
        .map_err(|e| GitPermalinkError::browser_open_failed(&report.url, e))?;

    print_success(&format!("Opened {}", report.url));
    Ok(())
}
