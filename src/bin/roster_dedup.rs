// src/bin/roster_dedup.rs
//
// Sweeps a client roster for entries that look like the same organization,
// e.g. "Acme Corp" and "ACME, INC.", so they can be merged before defendant
// names are reconciled against it.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use reconcile_lib::matching::find_duplicate_pairs;
use reconcile_lib::utils::config::ReconcileConfig;
use reconcile_lib::utils::env::load_env;
use reconcile_lib::utils::progress_bars::progress_config::ProgressConfig;
use reconcile_lib::utils::roster::load_roster;

#[derive(Parser)]
#[command(author, version, about = "Find likely duplicate names within a roster", long_about = None)]
struct DedupArgs {
    /// Roster file, one name per line
    #[arg(short, long)]
    roster: PathBuf,

    /// Minimum confidence to report; defaults to the review threshold
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Print JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    load_env();
    env_logger::init();
    info!("Starting roster duplicate sweep...");

    let args = DedupArgs::parse();
    let config = ReconcileConfig::from_env();
    config.log_config();
    let progress_config = ProgressConfig::from_env();

    let roster = load_roster(&args.roster).context("Failed to load roster")?;
    if roster.len() < 2 {
        eprintln!("Not enough roster entries (need at least 2) to look for duplicates. Exiting.");
        return Ok(());
    }

    let min_confidence = args.min_confidence.unwrap_or(config.thresholds.review);
    let pairs = find_duplicate_pairs(roster.as_slice(), min_confidence, &progress_config);

    if args.json {
        let json = serde_json::to_string_pretty(&pairs).context("Failed to serialize pairs")?;
        println!("{}", json);
    } else {
        for pair in &pairs {
            println!(
                "{:>6.1}  {} ({})  <->  {} ({})  [{}]",
                pair.confidence,
                pair.left,
                pair.left_index + 1,
                pair.right,
                pair.right_index + 1,
                config.thresholds.classify(pair.confidence)
            );
        }
        info!("{} candidate duplicate pairs", pairs.len());
    }

    Ok(())
}
