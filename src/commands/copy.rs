use crate::commands::build_reported_link;
use crate::core::{
    clipboard::copy_to_clipboard,
    command_init::{LinkArgs, LinkOptions},
    error::Result,
    print_success,
};

pub fn execute_copy(args: LinkArgs, options: LinkOptions) -> Result<()> {
    let report = build_reported_link(args, options)?;
    copy_to_clipboard(&report.url)?;
    print_success(&format!("Copied {}", report.url));
    Ok(())
}
