pub mod copy;
pub mod debug;
pub mod open;
pub mod url;

pub use self::copy::*;
pub use self::debug::*;
pub use self::open::*;
pub use self::url::*;

use crate::core::{
    command_init::{LinkArgs, LinkCommandInit, LinkOptions},
    error::Result,
    pipeline::LinkReport,
    print_warning,
};

/// Run the pipeline for a user-facing command and surface its warnings
fn build_reported_link(args: LinkArgs, options: LinkOptions) -> Result<LinkReport> {
    let context = LinkCommandInit::initialize(args, options)?;
    let report = context.build()?;

    for warning in report.warning_messages() {
        print_warning(&warning);
    }

    Ok(report)
}
