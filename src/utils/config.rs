//! Runtime configuration for the reconciliation binaries.
//! Values come from the environment (optionally a `.env` file) and can be
//! overridden by command line flags.

use log::{info, warn};
use std::env;
use std::str::FromStr;

use crate::models::matching::MatchClassification;

pub const DEFAULT_CONFIRMED_THRESHOLD: f64 = 90.0;
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 70.0;

/// Confidence cutoffs used to label ranked results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub confirmed: f64,
    pub review: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            confirmed: DEFAULT_CONFIRMED_THRESHOLD,
            review: DEFAULT_REVIEW_THRESHOLD,
        }
    }
}

impl MatchThresholds {
    /// Both values are clamped to [0, 100] and `review` never exceeds
    /// `confirmed`.
    pub fn new(confirmed: f64, review: f64) -> Self {
        let confirmed = confirmed.clamp(0.0, 100.0);
        let mut review = review.clamp(0.0, 100.0);
        if review > confirmed {
            warn!(
                "Review threshold {:.1} is above confirmed threshold {:.1}; using {:.1} for both",
                review, confirmed, confirmed
            );
            review = confirmed;
        }
        Self { confirmed, review }
    }

    pub fn classify(&self, confidence: f64) -> MatchClassification {
        if confidence >= self.confirmed {
            MatchClassification::Confirmed
        } else if confidence >= self.review {
            MatchClassification::NeedsReview
        } else {
            MatchClassification::NoMatch
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    pub thresholds: MatchThresholds,
    /// Threads used to score large rosters.
    pub workers: usize,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
            workers: num_cpus::get(),
        }
    }
}

impl ReconcileConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, missing or unparsable
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let confirmed = parse_or_default(
            &lookup,
            "RECONCILE_CONFIRMED_THRESHOLD",
            defaults.thresholds.confirmed,
        );
        let review = parse_or_default(
            &lookup,
            "RECONCILE_REVIEW_THRESHOLD",
            defaults.thresholds.review,
        );
        let workers = parse_or_default(&lookup, "RECONCILE_WORKERS", defaults.workers).max(1);

        Self {
            thresholds: MatchThresholds::new(confirmed, review),
            workers,
        }
    }

    pub fn log_config(&self) {
        info!(
            "⚙️  Thresholds: confirmed >= {:.1}, needs review >= {:.1}; workers: {}",
            self.thresholds.confirmed, self.thresholds.review, self.workers
        );
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
