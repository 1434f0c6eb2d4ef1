use std::path::PathBuf;

use clap::Parser;

/// Scans a memory image for AES-128/AES-256 key schedules.
#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the raw memory image to scan.
    pub image: PathBuf,

    /// Print the full expanded schedule and constraint words for every match.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress the progress indicator on stderr.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Maximum tolerated bit-error count before a candidate is rejected.
    #[arg(short = 't', long = "threshold", default_value_t = 10)]
    pub threshold: u32,
}
