// src/models/matching.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw per-pair metrics produced by the similarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    pub token_sort_ratio: f64,
    pub token_set_ratio: f64,
    pub partial_ratio: f64,
    pub soundex_match: bool,
    pub metaphone_match: bool,
    /// Token pairs where one token is a strict prefix of the other.
    pub abbreviation_match_count: usize,
}

/// Breakdown attached to every [`MatchResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub token_sort_ratio: f64,
    pub token_set_ratio: f64,
    pub partial_ratio: f64,
    pub soundex_match: bool,
    pub metaphone_match: bool,
    pub abbreviation_match: bool,
    pub normalized1: String,
    pub normalized2: String,
}

impl MatchDetails {
    pub fn from_metrics(metrics: &RawMetrics, normalized1: String, normalized2: String) -> Self {
        Self {
            token_sort_ratio: metrics.token_sort_ratio,
            token_set_ratio: metrics.token_set_ratio,
            partial_ratio: metrics.partial_ratio,
            soundex_match: metrics.soundex_match,
            metaphone_match: metrics.metaphone_match,
            abbreviation_match: metrics.abbreviation_match_count > 0,
            normalized1,
            normalized2,
        }
    }
}

/// One defendant compared against one roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub defendant: String,
    pub customer: String,
    /// 0.0 to 100.0 inclusive.
    pub confidence: f64,
    pub match_details: MatchDetails,
    pub match_date: DateTime<Utc>,
}

/// How a caller should treat a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchClassification {
    Confirmed,
    NeedsReview,
    NoMatch,
}

impl MatchClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchClassification::Confirmed => "confirmed",
            MatchClassification::NeedsReview => "needs_review",
            MatchClassification::NoMatch => "no_match",
        }
    }
}

impl std::fmt::Display for MatchClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All roster entries for one defendant, sorted by descending confidence.
/// Equal confidences keep roster order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResultSet {
    results: Vec<MatchResult>,
}

impl MatchResultSet {
    /// Sorts `results` (given in roster order) into ranking order.
    pub fn from_roster_order(mut results: Vec<MatchResult>) -> Self {
        // sort_by is stable, ties stay in roster order
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.results.iter()
    }

    pub fn best(&self) -> Option<&MatchResult> {
        self.results.first()
    }

    /// Results with confidence at or above `min_confidence`, still ranked.
    pub fn above(&self, min_confidence: f64) -> impl Iterator<Item = &MatchResult> {
        self.results
            .iter()
            .take_while(move |r| r.confidence >= min_confidence)
    }

    pub fn as_slice(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn into_vec(self) -> Vec<MatchResult> {
        self.results
    }
}

impl IntoIterator for MatchResultSet {
    type Item = MatchResult;
    type IntoIter = std::vec::IntoIter<MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchResultSet {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Two roster entries that look like the same organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub left_index: usize,
    pub right_index: usize,
    pub left: String,
    pub right: String,
    pub confidence: f64,
    pub match_details: MatchDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(customer: &str, confidence: f64) -> MatchResult {
        MatchResult {
            defendant: "d".to_string(),
            customer: customer.to_string(),
            confidence,
            match_details: MatchDetails {
                token_sort_ratio: 0.0,
                token_set_ratio: 0.0,
                partial_ratio: 0.0,
                soundex_match: false,
                metaphone_match: false,
                abbreviation_match: false,
                normalized1: String::new(),
                normalized2: String::new(),
            },
            match_date: Utc::now(),
        }
    }

    #[test]
    fn test_stable_descending_sort() {
        let set = MatchResultSet::from_roster_order(vec![
            result("a", 50.0),
            result("b", 90.0),
            result("c", 50.0),
            result("d", 90.0),
        ]);
        let order: Vec<&str> = set.iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
        assert_eq!(set.best().map(|r| r.customer.as_str()), Some("b"));
    }

    #[test]
    fn test_above_threshold() {
        let set = MatchResultSet::from_roster_order(vec![
            result("a", 65.0),
            result("b", 95.0),
            result("c", 80.0),
        ]);
        let kept: Vec<&str> = set.above(80.0).map(|r| r.customer.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(result("Acme", 42.0)).unwrap();
        assert_eq!(json["customer"], "Acme");
        assert_eq!(json["confidence"], 42.0);
        assert!(json["match_details"]["abbreviation_match"].is_boolean());
        assert!(json["match_details"]["normalized1"].is_string());
        assert!(json["match_date"].is_string());
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(MatchClassification::NeedsReview.to_string(), "needs_review");
        assert_eq!(
            serde_json::to_value(MatchClassification::NoMatch).unwrap(),
            "no_match"
        );
    }
}
