// src/matching/similarity.rs - Lexical and phonetic metrics between normalized names
use rphonetic::{Encoder, Metaphone, Soundex};
use std::collections::BTreeSet;
use strsim::normalized_levenshtein;
use unicode_normalization::UnicodeNormalization;

use crate::matching::normalize::tokenize;
use crate::models::matching::RawMetrics;

/// Computes every metric the confidence combiner needs for one pair of
/// normalized names.
pub fn score_names(normalized1: &str, normalized2: &str) -> RawMetrics {
    RawMetrics {
        token_sort_ratio: token_sort_ratio(normalized1, normalized2),
        token_set_ratio: token_set_ratio(normalized1, normalized2),
        partial_ratio: partial_ratio(normalized1, normalized2),
        soundex_match: soundex_match(normalized1, normalized2),
        metaphone_match: metaphone_match(normalized1, normalized2),
        abbreviation_match_count: abbreviation_match_count(normalized1, normalized2),
    }
}

/// Edit-distance similarity on a 0-100 scale. Empty input on either side
/// scores 0.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(s1, s2) * 100.0
}

/// Best [`ratio`] of the shorter string against every window of the longer
/// string with the same length.
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let chars1: Vec<char> = s1.chars().collect();
    let chars2: Vec<char> = s2.chars().collect();
    let (shorter, longer) = if chars1.len() <= chars2.len() {
        (chars1, chars2)
    } else {
        (chars2, chars1)
    };

    if shorter.len() == longer.len() {
        return ratio(s1, s2);
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let candidate: String = window.iter().collect();
        let score = ratio(&needle, &candidate);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

/// [`ratio`] after sorting each side's tokens alphabetically.
pub fn token_sort_ratio(s1: &str, s2: &str) -> f64 {
    ratio(&sorted_tokens(s1), &sorted_tokens(s2))
}

/// Compares the shared tokens against each side's shared-plus-remaining
/// tokens, so extra, missing or repeated tokens cost little.
pub fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    let tokens1: BTreeSet<&str> = tokenize(s1).into_iter().collect();
    let tokens2: BTreeSet<&str> = tokenize(s2).into_iter().collect();
    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }

    let intersection = tokens1.intersection(&tokens2).copied().collect::<Vec<_>>().join(" ");
    let diff1 = tokens1.difference(&tokens2).copied().collect::<Vec<_>>().join(" ");
    let diff2 = tokens2.difference(&tokens1).copied().collect::<Vec<_>>().join(" ");

    let combined1 = format!("{} {}", intersection, diff1).trim().to_string();
    let combined2 = format!("{} {}", intersection, diff2).trim().to_string();

    ratio(&intersection, &combined1)
        .max(ratio(&intersection, &combined2))
        .max(ratio(&combined1, &combined2))
}

pub fn soundex_match(s1: &str, s2: &str) -> bool {
    let soundex = Soundex::default();
    phonetic_codes_match(s1, s2, |key| soundex.encode(key))
}

pub fn metaphone_match(s1: &str, s2: &str) -> bool {
    let metaphone = Metaphone::default();
    phonetic_codes_match(s1, s2, |key| metaphone.encode(key))
}

/// ASCII letters and single spaces only, accents folded ("générale" becomes
/// "generale"). Scripts with no Latin letters project to an empty key.
pub fn phonetic_key(s: &str) -> String {
    let folded: String = s
        .nfkd()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two empty names agree. A non-empty name whose key or code comes out empty
/// (digits only, non-Latin script) never matches anything.
fn phonetic_codes_match<F>(s1: &str, s2: &str, encode: F) -> bool
where
    F: Fn(&str) -> String,
{
    if s1.is_empty() && s2.is_empty() {
        return true;
    }
    let key1 = phonetic_key(s1);
    let key2 = phonetic_key(s2);
    if key1.is_empty() || key2.is_empty() {
        return false;
    }
    let code1 = encode(&key1);
    !code1.is_empty() && code1 == encode(&key2)
}

/// Counts token pairs where one token is a strict prefix of the other,
/// e.g. "tech"/"technologies" or "intl"/"intls". Short words like "a"/"an"
/// count too, "intl"/"international" does not.
pub fn abbreviation_match_count(s1: &str, s2: &str) -> usize {
    let tokens1 = tokenize(s1);
    let tokens2 = tokenize(s2);
    let mut count = 0;
    for w1 in &tokens1 {
        for w2 in &tokens2 {
            if w1.len() != w2.len() && (w1.starts_with(w2) || w2.starts_with(w1)) {
                count += 1;
            }
        }
    }
    count
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens = tokenize(s);
    tokens.sort_unstable();
    tokens.join(" ")
}
