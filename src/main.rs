mod args;

use std::fs::File;
use std::io::{self, Write};
use std::process;

use args::Cli;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to map {path}: {source}")]
    Mmap {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Keyfind(#[from] keyfind::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap's own exit codes (0 for --help/--version, 2 for usage
            // errors) don't match this tool's contract, which exits
            // non-zero on every parse failure, help included.
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = keyfind_cli(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn keyfind_cli(args: Cli) -> Result<(), CliError> {
    let path = args.image.display().to_string();

    let file = File::open(&args.image).map_err(|source| CliError::Open {
        path: path.clone(),
        source,
    })?;
    // SAFETY: the image is treated as an immutable snapshot for the
    // duration of the scan; concurrent external writes to the backing
    // file are the caller's responsibility, same as any other
    // memory-mapped read-only tool.
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|source| CliError::Mmap {
        path: path.clone(),
        source,
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    keyfind::scan_with(&mmap, args.threshold, !args.quiet, |m| {
        if keyfind::print_match(&mut out, &m, args.verbose).is_err() {
            let _ = out.flush();
        }
    })?;

    out.flush()?;
    Ok(())
}
