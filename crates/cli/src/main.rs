mod args;
mod commands;
mod defaults;
mod plot;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{OccupancyArgs, RunArgs};
use commands::{config, occupancy, run};

/// brt: lineage recovery after recurring mass extinctions
///
/// Runs replicated sweeps over the four evolutionary scenarios and writes
/// diversity series, a summary table and a comparison figure.
#[derive(Parser, Debug)]
#[command(name = "brt")]
#[command(author, version, about = "Simulates lineage recovery after mass extinctions", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run every scenario × replicate and save results.
    ///
    /// Writes raw diversity series, the summary table and the figure to
    /// the output directory.
    Run(Box<RunArgs>),

    /// Run the module-occupancy model.
    Occupancy(OccupancyArgs),

    /// Print the default simulation configuration as JSON.
    ///
    /// Save the output, edit it and pass it back with `brt run --config`.
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_sweep(&args)?;
        }
        Commands::Occupancy(args) => {
            occupancy::run_occupancy_model(&args)?;
        }
        Commands::Config => {
            config::print_default_config()?;
        }
    }

    Ok(())
}
