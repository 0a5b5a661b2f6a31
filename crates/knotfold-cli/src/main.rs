mod cli;
mod error;
mod logging;
mod progress;
mod report;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use clap::Parser;
use knotfold::core::sequence::RnaSequence;
use knotfold::engine::config::FoldConfig;
use knotfold::engine::error::FoldError;
use knotfold::engine::progress::ProgressReporter;
use knotfold::workflows::predict;
use std::time::Instant;
use tracing::{debug, info, warn};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("knotfold v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!("Setting the window-search pool to {} threads.", num_threads);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let sequence: RnaSequence = cli.sequence.parse().map_err(FoldError::from)?;

    let mut builder = FoldConfig::builder()
        .allow_ug(cli.allow_ug)
        .max_loop_size(cli.max_loop_size)
        .max_stem_allow_smaller(cli.max_stem_allow_smaller)
        .prune_early(cli.prune_early);
    if let Some(path) = cli.grammar.clone() {
        builder = builder.grammar_path(path);
    }
    if let Some(path) = cli.energy_params.clone() {
        builder = builder.energy_path(path);
    }
    let config = builder.build().map_err(FoldError::from)?;

    let handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let started = Instant::now();
    let prediction = predict::run(&sequence, &config, &reporter)?;
    let elapsed = started.elapsed();

    if let Some(path) = &cli.csv {
        report::write_records(path, &prediction.records)?;
    }
    if let Some(path) = &cli.results_csv {
        report::write_ranked(path, &prediction.ranked)?;
    }

    println!("Sequence:  {}", sequence);
    match prediction.best() {
        Some(best) => {
            println!("Structure: {}", best.dot_bracket());
            println!("Energy:    {:.3}", best.energy());
        }
        None => {
            warn!("No pseudoknot candidate was found for this sequence.");
            println!("Structure: no pseudoknot found");
        }
    }
    println!("Duration:  {:.3}s", elapsed.as_secs_f64());

    Ok(())
}
