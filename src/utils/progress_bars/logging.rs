// src/utils/progress_bars/logging.rs - Logging helpers for ranking and dedup runs
use log::{debug, info};
use std::time::Instant;
use uuid::Uuid;

use crate::models::matching::MatchResultSet;

#[derive(Clone)]
pub struct MatchingLogger {
    operation: &'static str,
    run_id: Uuid,
    start_time: Instant,
}

impl MatchingLogger {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            run_id: Uuid::new_v4(),
            start_time: Instant::now(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn log_start(&self, defendant: &str, roster_len: usize) {
        debug!(
            "[{}] 🚀 Run {}: ranking {} roster entries against '{}'",
            self.operation, self.run_id, roster_len, defendant
        );
    }

    pub fn log_completion(&self, results: &MatchResultSet) {
        let elapsed = self.start_time.elapsed();
        match results.best() {
            Some(best) => debug!(
                "[{}] ✅ Run {} finished in {:.3}s: {} results, best '{}' at {:.1}",
                self.operation,
                self.run_id,
                elapsed.as_secs_f32(),
                results.len(),
                best.customer,
                best.confidence
            ),
            None => debug!(
                "[{}] ✅ Run {} finished in {:.3}s: empty roster",
                self.operation,
                self.run_id,
                elapsed.as_secs_f32()
            ),
        }
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        let msg = if let Some(details) = details {
            format!(
                "[{}] 🔄 Phase: {} - {} [+{:.1}s]",
                self.operation, phase, details, elapsed.as_secs_f32()
            )
        } else {
            format!(
                "[{}] 🔄 Phase: {} [+{:.1}s]",
                self.operation, phase, elapsed.as_secs_f32()
            )
        };
        info!("{}", msg);
    }

    pub fn log_pair_generation(&self, total_pairs: usize, roster_len: usize) {
        info!(
            "[{}] 📈 Pairs to evaluate: {} (from {} roster entries)",
            self.operation, total_pairs, roster_len
        );
    }

    pub fn log_dedup_completion(&self, pairs_found: usize, min_confidence: f64) {
        let elapsed = self.start_time.elapsed();
        info!(
            "[{}] ✅ Run {} completed in {:.2}s: {} pairs at or above {:.1}",
            self.operation,
            self.run_id,
            elapsed.as_secs_f32(),
            pairs_found,
            min_confidence
        );
    }

    pub fn log_debug(&self, message: &str) {
        debug!("[{}] 🔍 {}", self.operation, message);
    }
}
