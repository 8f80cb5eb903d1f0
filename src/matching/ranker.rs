// src/matching/ranker.rs - Ranks a roster against one defendant name
use chrono::{DateTime, Utc};
use std::thread;

use crate::matching::confidence::combine_confidence;
use crate::matching::normalize::normalize_name;
use crate::matching::similarity::score_names;
use crate::models::matching::{MatchDetails, MatchResult, MatchResultSet};
use crate::utils::constants::PARALLEL_ROSTER_THRESHOLD;
use crate::utils::progress_bars::logging::MatchingLogger;

/// Scores a single defendant/customer pair.
pub fn compare_names(defendant: &str, customer: &str, match_date: DateTime<Utc>) -> MatchResult {
    let normalized1 = normalize_name(defendant);
    let normalized2 = normalize_name(customer);
    compare_normalized(defendant, customer, normalized1, normalized2, match_date)
}

pub(crate) fn compare_normalized(
    defendant: &str,
    customer: &str,
    normalized1: String,
    normalized2: String,
    match_date: DateTime<Utc>,
) -> MatchResult {
    let metrics = score_names(&normalized1, &normalized2);
    let confidence = combine_confidence(&metrics, &normalized1, &normalized2);
    MatchResult {
        defendant: defendant.to_string(),
        customer: customer.to_string(),
        confidence,
        match_details: MatchDetails::from_metrics(&metrics, normalized1, normalized2),
        match_date,
    }
}

/// Scores every roster entry against `defendant` and returns them all,
/// highest confidence first. Ties keep roster order. Nothing is filtered out,
/// an empty roster gives an empty set and an empty defendant simply scores
/// low. All results share one `match_date`.
pub fn find_matches<S: AsRef<str>>(defendant: &str, roster: &[S]) -> MatchResultSet {
    let logger = MatchingLogger::new("RANK");
    logger.log_start(defendant, roster.len());

    let match_date = Utc::now();
    let results = score_chunk(defendant, roster, match_date);
    let result_set = MatchResultSet::from_roster_order(results);

    logger.log_completion(&result_set);
    result_set
}

/// Same output as [`find_matches`], with the roster split into contiguous
/// chunks scored on `workers` scoped threads. Small rosters and
/// `workers <= 1` stay on the calling thread.
pub fn find_matches_parallel<S: AsRef<str> + Sync>(
    defendant: &str,
    roster: &[S],
    workers: usize,
) -> MatchResultSet {
    if workers <= 1 || roster.len() < PARALLEL_ROSTER_THRESHOLD {
        return find_matches(defendant, roster);
    }

    let logger = MatchingLogger::new("RANK");
    logger.log_start(defendant, roster.len());

    let match_date = Utc::now();
    let chunk_size = roster.len().div_ceil(workers);
    logger.log_debug(&format!(
        "Scoring {} roster entries in chunks of {} across {} workers",
        roster.len(),
        chunk_size,
        workers
    ));

    // chunks are joined in spawn order, which keeps the merged vector in roster order
    let results: Vec<MatchResult> = thread::scope(|scope| {
        let handles: Vec<_> = roster
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || score_chunk(defendant, chunk, match_date)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    let result_set = MatchResultSet::from_roster_order(results);
    logger.log_completion(&result_set);
    result_set
}

fn score_chunk<S: AsRef<str>>(
    defendant: &str,
    roster: &[S],
    match_date: DateTime<Utc>,
) -> Vec<MatchResult> {
    let normalized_defendant = normalize_name(defendant);
    roster
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            compare_normalized(
                defendant,
                candidate,
                normalized_defendant.clone(),
                normalize_name(candidate),
                match_date,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers(set: &MatchResultSet) -> Vec<&str> {
        set.iter().map(|r| r.customer.as_str()).collect()
    }

    #[test]
    fn test_self_match_is_maximal() {
        let results = find_matches("Acme Corporation", &["Acme Corporation"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.as_slice()[0].confidence, 100.0);
    }

    #[test]
    fn test_ranking_order_with_ties() {
        let results = find_matches("Acme Corporation", &["Acme Corp", "Ajax Inc", "Acme Corporation"]);
        assert_eq!(customers(&results), vec!["Acme Corp", "Acme Corporation", "Ajax Inc"]);
        assert_eq!(results.as_slice()[0].confidence, 100.0);
        assert_eq!(results.as_slice()[1].confidence, 100.0);
        assert!(results.as_slice()[2].confidence < 100.0);
    }

    #[test]
    fn test_every_bonus_still_caps_at_100() {
        let results = find_matches("Acme Acmes Inc", &["Acme Acmes"]);
        let only = &results.as_slice()[0];
        assert!(only.match_details.soundex_match);
        assert!(only.match_details.metaphone_match);
        assert!(only.match_details.abbreviation_match);
        assert_eq!(only.match_details.normalized1, only.match_details.normalized2);
        assert_eq!(only.confidence, 100.0);
    }

    #[test]
    fn test_compare_names_single_pair() {
        let now = Utc::now();
        let result = compare_names("Beta LLC d/b/a Gamma Stores", "Beta, L.L.C.", now);
        assert_eq!(result.defendant, "Beta LLC d/b/a Gamma Stores");
        assert_eq!(result.customer, "Beta, L.L.C.");
        assert_eq!(result.match_details.normalized1, "beta");
        assert_eq!(result.match_details.normalized2, "beta l l c");
        assert_eq!(result.match_date, now);
        assert!(result.confidence > 40.0 && result.confidence < 100.0);
    }

    #[test]
    fn test_non_ascii_names_rank_without_failing() {
        let results = find_matches("Société Générale", &["Societe Generale SA", "日本電気"]);
        assert_eq!(customers(&results), vec!["Societe Generale SA", "日本電気"]);
        let cjk = &results.as_slice()[1];
        assert!(!cjk.match_details.soundex_match);
        assert!(!cjk.match_details.metaphone_match);
        assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.confidence)));

        let results = find_matches("日本電気", &["東芝"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results.as_slice()[0].confidence, 0.0);
    }

    #[test]
    fn test_numeric_names_get_no_phonetic_bonus() {
        let results = find_matches("123 Holdings", &["456 Group"]);
        let only = &results.as_slice()[0];
        assert!(!only.match_details.soundex_match);
        assert!(!only.match_details.metaphone_match);
        assert_eq!(only.confidence, 0.0);
    }

    #[test]
    fn test_empty_roster() {
        let roster: Vec<String> = Vec::new();
        assert!(find_matches("Any Name", roster.as_slice()).is_empty());
    }

    #[test]
    fn test_empty_defendant_degrades_gracefully() {
        let results = find_matches("", &["Acme Corp"]);
        assert_eq!(results.len(), 1);
        let only = &results.as_slice()[0];
        assert_eq!(only.confidence, 0.0);
        assert_eq!(only.match_details.normalized1, "");
        assert_eq!(only.match_details.normalized2, "acme");
    }

    #[test]
    fn test_end_to_end_scenario() {
        let results = find_matches(
            "The Acme Manufacturing Co.",
            &["Acme Mfg", "Ajax Corp", "Acme Manufacturing Company"],
        );
        assert_eq!(
            customers(&results),
            vec!["Acme Manufacturing Company", "Acme Mfg", "Ajax Corp"]
        );
        let scores: Vec<f64> = results.iter().map(|r| r.confidence).collect();
        assert_eq!(scores[0], 100.0);
        assert!(scores[1] > 50.0, "Acme Mfg scored {}", scores[1]);
        assert!(scores[2] < 30.0, "Ajax Corp scored {}", scores[2]);
    }

    #[test]
    fn test_determinism_and_shared_timestamp() {
        let roster = ["Acme Mfg", "Ajax Corp", "Acme Manufacturing Company", "Beta LLC"];
        let first = find_matches("Acme Manufacturing", &roster);
        let second = find_matches("Acme Manufacturing", &roster);

        let key = |set: &MatchResultSet| -> Vec<(String, f64)> {
            set.iter().map(|r| (r.customer.clone(), r.confidence)).collect()
        };
        assert_eq!(key(&first), key(&second));

        let date = first.as_slice()[0].match_date;
        assert!(first.iter().all(|r| r.match_date == date));
    }

    #[test]
    fn test_confidence_always_in_range() {
        let roster = [
            "Acme Intl",
            "Acme International Widgets",
            "",
            "A",
            "Acme Acme Acme",
            "Johnson & Johnson",
        ];
        for defendant in ["Acme Intl Widgets", "", "A An The", "Johnson and Johnson"] {
            for result in find_matches(defendant, &roster).iter() {
                assert!(
                    (0.0..=100.0).contains(&result.confidence),
                    "{} vs {} gave {}",
                    defendant,
                    result.customer,
                    result.confidence
                );
            }
        }
    }

    #[test]
    fn test_details_carry_metrics() {
        let results = find_matches("Acme Tech", &["Acme Technologies Holdings"]);
        let details = &results.as_slice()[0].match_details;
        assert_eq!(details.normalized1, "acme tech");
        assert_eq!(details.normalized2, "acme technologies");
        assert!(details.abbreviation_match);
        assert!(details.soundex_match);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let roster: Vec<String> = (0..(PARALLEL_ROSTER_THRESHOLD * 2 + 17))
            .map(|i| match i % 4 {
                0 => format!("Acme Manufacturing {}", i),
                1 => "Acme Corp".to_string(),
                2 => format!("Ajax Holdings {}", i),
                _ => "Acme Mfg".to_string(),
            })
            .collect();

        let sequential = find_matches("Acme Corporation", roster.as_slice());
        let parallel = find_matches_parallel("Acme Corporation", roster.as_slice(), 4);

        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(s.customer, p.customer);
            assert_eq!(s.confidence, p.confidence);
            assert_eq!(s.match_details, p.match_details);
        }
        let date = parallel.as_slice()[0].match_date;
        assert!(parallel.iter().all(|r| r.match_date == date));
    }

    #[test]
    fn test_parallel_small_roster_falls_back() {
        let results = find_matches_parallel("Acme", &["Acme Inc", "Beta"], 8);
        assert_eq!(customers(&results), vec!["Acme Inc", "Beta"]);
    }
}
