pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use pairname_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Rename {
            directory,
            data,
            extension,
            left_label,
            right_label,
            delimiter,
            dry_run,
            json,
        } => handlers::handle_rename(
            directory,
            data,
            extension,
            left_label,
            right_label,
            delimiter,
            dry_run,
            json,
        ),
        Commands::Check {
            directory,
            data,
            extension,
            left_label,
            right_label,
            delimiter,
            json,
        } => handlers::handle_check(
            directory,
            data,
            extension,
            left_label,
            right_label,
            delimiter,
            json,
        ),
    }
}
