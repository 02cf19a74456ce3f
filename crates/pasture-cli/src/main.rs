//! CLI frontend for the pasture simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pasture",
    about = "Pasture: sheep, wolves, and a shepherd on a bounded field",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation and print a summary
    Simulate {
        /// Initial number of sheep
        sheep: usize,

        /// Initial number of wolves
        wolves: usize,

        /// Run length in seconds of simulated time
        seconds: u64,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON configuration file (missing fields take their defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Require the image files to exist under this directory
        #[arg(short, long)]
        media: Option<PathBuf>,

        /// Pace ticks against the wall clock instead of running flat out
        #[arg(long)]
        realtime: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Show every event, not just the totals (with --json: an "events" array)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the default configuration as JSON
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            sheep,
            wolves,
            seconds,
            seed,
            config,
            media,
            realtime,
            json,
            verbose,
        } => commands::simulate::run(&commands::simulate::SimulateArgs {
            sheep,
            wolves,
            seconds,
            seed,
            config: config.as_deref(),
            media: media.as_deref(),
            realtime,
            json,
            verbose,
        }),
        Commands::Config { output } => commands::config::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
