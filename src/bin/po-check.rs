//! CLI tool to validate a fixed-width purchase order file.
//!
//! Usage:
//!   po-check <orders.txt>
//!   po-check                 (prompts for the file path)

use clap::Parser;
use purchase_orders_rs::{Batch, BatchError, ReportOptions, load_batch, render_report};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Parse and validate a purchase order file, then report each order.
#[derive(Parser)]
#[command(name = "po-check")]
struct Cli {
    /// Order file (fixed-width 100/200/300 records); prompted for if omitted
    input: Option<PathBuf>,

    /// Print only the final success/failure counts
    #[arg(short, long)]
    summary_only: bool,

    /// Print detail only for invalid orders
    #[arg(long)]
    invalid_only: bool,

    /// Log per-line decisions on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,purchase_orders_rs=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn prompt_for_path() -> Result<PathBuf, BatchError> {
    print!("Enter the path to the order file: ");
    io::stdout().flush().map_err(BatchError::Prompt)?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(BatchError::Prompt)?;
    Ok(PathBuf::from(line.trim()))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ReportOptions {
        summary_only: cli.summary_only,
        invalid_only: cli.invalid_only,
    };

    let loaded = match cli.input {
        Some(path) => Ok(path),
        None => prompt_for_path(),
    }
    .and_then(|path| {
        if cli.verbose {
            eprintln!("Input: {}", path.display());
        }
        load_batch(&path)
    });

    match loaded {
        Ok(batch) => {
            if let Err(e) = io::stdout().write_all(render_report(&batch, options).as_bytes()) {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "order file not processed");
            eprintln!("{e}");
            print!("{}", render_report(&Batch::default(), options));
            process::exit(1);
        }
    }
}
