// src/matching/dedup.rs - Pairwise duplicate sweep over a single roster
use log::info;

use crate::matching::confidence::combine_confidence;
use crate::matching::normalize::normalize_name;
use crate::matching::similarity::score_names;
use crate::models::matching::{DuplicatePair, MatchDetails};
use crate::utils::progress_bars::logging::MatchingLogger;
use crate::utils::progress_bars::progress_config::ProgressConfig;

/// Compares every unordered pair of roster entries once and keeps those at or
/// above `min_confidence`. Output is sorted by descending confidence, then by
/// roster position.
pub fn find_duplicate_pairs<S: AsRef<str>>(
    roster: &[S],
    min_confidence: f64,
    progress_config: &ProgressConfig,
) -> Vec<DuplicatePair> {
    let logger = MatchingLogger::new("DEDUP");
    logger.log_phase("Normalizing roster", None);

    let normalized: Vec<String> = roster.iter().map(|n| normalize_name(n.as_ref())).collect();
    let total_pairs = roster.len() * roster.len().saturating_sub(1) / 2;
    logger.log_pair_generation(total_pairs, roster.len());

    let pb = progress_config.create_progress_bar(total_pairs as u64, "Comparing roster pairs...");
    let mut pairs = Vec::new();

    for left_index in 0..roster.len() {
        for right_index in (left_index + 1)..roster.len() {
            let metrics = score_names(&normalized[left_index], &normalized[right_index]);
            let confidence =
                combine_confidence(&metrics, &normalized[left_index], &normalized[right_index]);
            if confidence >= min_confidence {
                pairs.push(DuplicatePair {
                    left_index,
                    right_index,
                    left: roster[left_index].as_ref().to_string(),
                    right: roster[right_index].as_ref().to_string(),
                    confidence,
                    match_details: MatchDetails::from_metrics(
                        &metrics,
                        normalized[left_index].clone(),
                        normalized[right_index].clone(),
                    ),
                });
            }
        }
        if let Some(pb) = &pb {
            pb.inc((roster.len() - left_index - 1) as u64);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message(format!("Found {} candidate duplicates", pairs.len()));
    }

    pairs.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then(a.left_index.cmp(&b.left_index))
            .then(a.right_index.cmp(&b.right_index))
    });

    logger.log_dedup_completion(pairs.len(), min_confidence);
    if pairs.is_empty() {
        info!("No roster entries look like duplicates of each other");
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_suffix_variants() {
        let roster = ["Acme Corp", "Ajax Inc", "ACME, INC.", "Beta LLC"];
        let pairs = find_duplicate_pairs(&roster, 90.0, &ProgressConfig::disabled());
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].left_index, pairs[0].right_index), (0, 2));
        assert_eq!(pairs[0].confidence, 100.0);
        assert_eq!(pairs[0].match_details.normalized1, "acme");
    }

    #[test]
    fn test_every_pair_once_at_zero_threshold() {
        let roster = ["Acme", "Ajax", "Beta", "Gamma"];
        let pairs = find_duplicate_pairs(&roster, 0.0, &ProgressConfig::disabled());
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.left_index < p.right_index));
        assert!(pairs.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_ties_ordered_by_position() {
        let roster = ["Acme Corp", "Acme Inc", "Acme Ltd"];
        let pairs = find_duplicate_pairs(&roster, 100.0, &ProgressConfig::disabled());
        let positions: Vec<(usize, usize)> =
            pairs.iter().map(|p| (p.left_index, p.right_index)).collect();
        assert_eq!(positions, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_small_rosters() {
        let empty: [&str; 0] = [];
        assert!(find_duplicate_pairs(&empty, 0.0, &ProgressConfig::disabled()).is_empty());
        assert!(find_duplicate_pairs(&["Acme"], 0.0, &ProgressConfig::disabled()).is_empty());
    }
}
