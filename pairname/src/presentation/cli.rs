use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Rename paired class recordings from a metadata sheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename every pair of videos in DIRECTORY after the next metadata row
    Rename {
        directory: PathBuf,

        /// metadata file; defaults to `<DIRECTORY>.csv` next to the directory
        #[arg(long)]
        data: Option<PathBuf>,

        /// video extension (without the dot)
        #[arg(long = "ext", default_value = "mp4")]
        extension: String,

        /// label for the first file of each pair
        #[arg(long = "left", default_value = "esq")]
        left_label: String,

        /// label for the second file of each pair
        #[arg(long = "right", default_value = "dir")]
        right_label: String,

        #[arg(long, default_value = ";", value_parser = parse_delimiter)]
        delimiter: u8,

        /// print the plan, rename nothing
        #[arg(long)]
        dry_run: bool,

        /// print the plan as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Compare file names in DIRECTORY against the names the metadata calls for
    Check {
        directory: PathBuf,

        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long = "ext", default_value = "mp4")]
        extension: String,

        #[arg(long = "left", default_value = "esq")]
        left_label: String,

        #[arg(long = "right", default_value = "dir")]
        right_label: String,

        #[arg(long, default_value = ";", value_parser = parse_delimiter)]
        delimiter: u8,

        /// print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}
