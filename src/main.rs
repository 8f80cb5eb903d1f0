use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use reconcile_lib::matching::find_matches_parallel;
use reconcile_lib::models::matching::{MatchClassification, MatchResult};
use reconcile_lib::utils::config::{MatchThresholds, ReconcileConfig};
use reconcile_lib::utils::env::load_env;
use reconcile_lib::utils::roster::load_roster;

#[derive(Parser)]
#[command(author, version, about = "Rank a client roster against a defendant name", long_about = None)]
struct ReconcileArgs {
    /// Defendant name as it appears in the filing
    #[arg(short, long)]
    defendant: String,

    /// Roster file, one client name per line
    #[arg(short, long)]
    roster: PathBuf,

    /// Only print the best N results
    #[arg(long)]
    top: Option<usize>,

    /// Hide results below this confidence
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Override RECONCILE_CONFIRMED_THRESHOLD
    #[arg(long)]
    confirmed_threshold: Option<f64>,

    /// Override RECONCILE_REVIEW_THRESHOLD
    #[arg(long)]
    review_threshold: Option<f64>,

    /// Override RECONCILE_WORKERS
    #[arg(long)]
    workers: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ClassifiedMatch<'a> {
    #[serde(flatten)]
    result: &'a MatchResult,
    classification: MatchClassification,
}

fn main() -> Result<()> {
    load_env();
    env_logger::init();

    let args = ReconcileArgs::parse();

    let mut config = ReconcileConfig::from_env();
    config.thresholds = MatchThresholds::new(
        args.confirmed_threshold.unwrap_or(config.thresholds.confirmed),
        args.review_threshold.unwrap_or(config.thresholds.review),
    );
    if let Some(workers) = args.workers {
        config.workers = workers.max(1);
    }
    config.log_config();

    let roster = load_roster(&args.roster).context("Failed to load roster")?;
    info!("Loaded {} roster entries from {}", roster.len(), args.roster.display());

    let start = Instant::now();
    let results = find_matches_parallel(&args.defendant, roster.as_slice(), config.workers);
    info!(
        "Ranked {} candidates for '{}' in {:.2?}",
        results.len(),
        args.defendant,
        start.elapsed()
    );

    let min_confidence = args.min_confidence.unwrap_or(0.0);
    let shown: Vec<ClassifiedMatch> = results
        .above(min_confidence)
        .take(args.top.unwrap_or(usize::MAX))
        .map(|result| ClassifiedMatch {
            result,
            classification: config.thresholds.classify(result.confidence),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&shown).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        print_table(&shown);
    }

    Ok(())
}

fn print_table(rows: &[ClassifiedMatch]) {
    if rows.is_empty() {
        println!("No roster entries matched.");
        return;
    }
    println!(
        "{:>4}  {:>6}  {:<12}  {:<4}  {:<40}",
        "rank", "conf", "class", "flags", "customer"
    );
    for (rank, row) in rows.iter().enumerate() {
        let details = &row.result.match_details;
        let flags = format!(
            "{}{}{}",
            if details.soundex_match { "S" } else { "-" },
            if details.metaphone_match { "M" } else { "-" },
            if details.abbreviation_match { "A" } else { "-" },
        );
        println!(
            "{:>4}  {:>6.1}  {:<12}  {:<4}  {:<40}",
            rank + 1,
            row.result.confidence,
            row.classification.as_str(),
            flags,
            row.result.customer
        );
    }
}
