use clap::{Parser, Subcommand};
use git_permalink::commands::*;
use git_permalink::core::{
    command_init::{LinkArgs, LinkOptions},
    error::Result,
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "git-permalink")]
#[command(about = "Turn a file and line selection into a link on the git hosting service")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Remote to prefer when the branch has no upstream (default: origin)
    #[arg(long, global = true)]
    remote: Option<String>,

    /// Custom URL template, e.g. "https://code.example/{ref}/{filepath}#{lineGithub}"
    #[arg(long, global = true)]
    template: Option<String>,

    /// Workspace folder name for the {folderName} template variable
    #[arg(long, global = true)]
    folder_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the link in the default browser
    Open(LinkArgs),
    /// Copy the link to the clipboard
    Copy(LinkArgs),
    /// Print the link
    Url(LinkArgs),
    /// Print every intermediate value of the link computation as JSON
    Debug(LinkArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = LinkOptions {
        remote: cli.remote,
        template: cli.template,
        folder_name: cli.folder_name,
    };

    let result = match cli.command {
        Commands::Open(args) => execute_open(args, options),
        Commands::Copy(args) => execute_copy(args, options),
        Commands::Url(args) => execute_url(args, options),
        Commands::Debug(args) => execute_debug(args, options),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
