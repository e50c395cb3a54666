//! cardlink CLI
//!
//! Builds the flat card lookup table (cards.tsv) the Discord card-linker
//! bot consumes, from the published per-side card-catalog JSON files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod error;

use commands::{run_build, run_fetch, run_sets};

#[derive(Parser)]
#[command(name = "cardlink")]
#[command(about = "Build the card-linker lookup table from published card catalogs", long_about = None)]
struct Cli {
    /// Directory holding the JSON datasets (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize the catalogs and write the lookup TSV
    Build {
        /// Output file
        #[arg(short, long, default_value = "cards.tsv")]
        out: PathBuf,

        /// Catalog files to process, in first-wins order
        /// (defaults to Light.json then Dark.json in the data directory)
        inputs: Vec<PathBuf>,

        /// Never download; fail if a dataset is missing locally
        #[arg(long)]
        offline: bool,
    },

    /// Download any missing datasets into the data directory
    Fetch,

    /// List the loaded set registry (id, abbreviation, name)
    Sets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Build {
            out,
            inputs,
            offline,
        } => run_build(&cli.data_dir, &out, inputs, offline),
        Commands::Fetch => run_fetch(&cli.data_dir),
        Commands::Sets => run_sets(&cli.data_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
