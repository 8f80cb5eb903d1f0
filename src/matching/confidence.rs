// src/matching/confidence.rs - Blends raw metrics into a single 0-100 confidence
use crate::models::matching::RawMetrics;

const TOKEN_SET_WEIGHT: f64 = 0.4;
const PARTIAL_WEIGHT: f64 = 0.3;
const TOKEN_SORT_WEIGHT: f64 = 0.3;

const SOUNDEX_BONUS: f64 = 7.5;
const METAPHONE_BONUS: f64 = 7.5;
const ABBREVIATION_BONUS_PER_MATCH: f64 = 5.0;
const ABBREVIATION_BONUS_CAP: f64 = 15.0;
const EXACT_MATCH_BONUS: f64 = 10.0;

pub const MAX_CONFIDENCE: f64 = 100.0;

/// Weighted lexical score before any bonus.
pub fn base_score(metrics: &RawMetrics) -> f64 {
    TOKEN_SET_WEIGHT * metrics.token_set_ratio
        + PARTIAL_WEIGHT * metrics.partial_ratio
        + TOKEN_SORT_WEIGHT * metrics.token_sort_ratio
}

/// Sum of the independent bonuses: phonetic agreement (soundex, metaphone),
/// abbreviation pairs (5 each, at most 15) and exact equality after
/// normalization.
pub fn bonus_score(metrics: &RawMetrics, normalized1: &str, normalized2: &str) -> f64 {
    let mut bonus = 0.0;
    if metrics.soundex_match {
        bonus += SOUNDEX_BONUS;
    }
    if metrics.metaphone_match {
        bonus += METAPHONE_BONUS;
    }
    if metrics.abbreviation_match_count > 0 {
        bonus += (metrics.abbreviation_match_count as f64 * ABBREVIATION_BONUS_PER_MATCH)
            .min(ABBREVIATION_BONUS_CAP);
    }
    if normalized1 == normalized2 {
        bonus += EXACT_MATCH_BONUS;
    }
    bonus
}

/// Final confidence, capped at 100.
pub fn combine_confidence(metrics: &RawMetrics, normalized1: &str, normalized2: &str) -> f64 {
    (base_score(metrics) + bonus_score(metrics, normalized1, normalized2)).min(MAX_CONFIDENCE)
}
