use clap::{Parser, Subcommand};
use std::path::PathBuf;
use crate::utils::file_ops::DEFAULT_EXTENSIONS;

#[derive(Parser)]
#[command(name = "track-resolver")]
#[command(version)]
#[command(about = "Resolve track numbers, titles, durations and tags from audio files", long_about = None)]
pub struct Cli {
    /// ffprobe executable used to inspect files
    #[arg(long, global = true, env = "TRACK_RESOLVER_FFPROBE", default_value = "ffprobe")]
    pub ffprobe: PathBuf,

    /// Show ffprobe's own diagnostics
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve audio files and print one JSON descriptor per line
    Probe {
        /// Audio files to resolve
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Resolve every audio file in a directory
    Scan {
        /// Directory to scan
        #[arg(short = 'i', long = "input")]
        dir: PathBuf,

        /// Write a CSV report instead of printing JSON
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// File extensions to include
        #[arg(short = 'e', long = "ext", value_delimiter = ',', default_values_t = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()))]
        exts: Vec<String>,
    },

    /// Parse track numbers and titles from file names only
    Name {
        #[arg(required = true)]
        names: Vec<String>,
    },
}
