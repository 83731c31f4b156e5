use crate::commands::build_reported_link;
use crate::core::{
    command_init::{LinkArgs, LinkOptions},
    error::Result,
};

/// Print the link on stdout, for scripts and editor integrations
pub fn execute_url(args: LinkArgs, options: LinkOptions) -> Result<()> {
    let report = build_reported_link(args, options)?;
    println!("{}", report.url);
    Ok(())
}
