// src/matching/normalize.rs - Company name canonicalization
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::constants::{
    ARTICLE_PREFIXES, CORPORATE_SUFFIXES, DIVISION_INDICATORS, RELATIONSHIP_INDICATORS,
};

static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static pattern is valid"));

/// Canonicalizes a company name as it appears in a filing or roster.
///
/// Steps run in a fixed order, later ones rely on the earlier canonicalization:
/// lowercase, drop one leading article, cut at the first relationship
/// indicator ("f/k/a", "d/b/a", "successor to", ...), cut at the first
/// division indicator ("division of", "subsidiary of", ...), strip a single
/// trailing corporate suffix, `&` to `and`, punctuation to spaces and finally
/// whitespace collapsing.
///
/// Empty input yields an empty string. A name whose normalized form still
/// starts with an article or ends with a suffix word (stacked suffixes such as
/// "acme holdings group") is not a fixed point: only one article and one
/// suffix are removed per call.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = name.to_lowercase();

    for prefix in ARTICLE_PREFIXES {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            normalized = rest.to_string();
            break;
        }
    }

    normalized = truncate_at_first_indicator(&normalized, &RELATIONSHIP_INDICATORS);
    normalized = truncate_at_first_indicator(&normalized, &DIVISION_INDICATORS);
    normalized = strip_corporate_suffix(&normalized);

    normalized = normalized.replace('&', "and");
    let normalized = NON_WORD_REGEX.replace_all(&normalized, " ");
    let normalized = WHITESPACE_REGEX.replace_all(&normalized, " ");
    normalized.trim().to_string()
}

/// Keeps the text before the earliest occurrence of any indicator.
fn truncate_at_first_indicator(name: &str, indicators: &[&str]) -> String {
    let first_hit = indicators
        .iter()
        .filter_map(|indicator| name.find(indicator).map(|pos| (pos, *indicator)))
        .min_by_key(|(pos, _)| *pos);

    match first_hit {
        Some((pos, indicator)) => {
            trace!("Truncating '{}' at '{}'", name, indicator.trim());
            name[..pos].to_string()
        }
        None => name.to_string(),
    }
}

/// Removes one trailing corporate suffix. Trailing periods, commas and
/// whitespace are ignored while matching so "acme, inc." loses its "inc".
fn strip_corporate_suffix(name: &str) -> String {
    let candidate = name.trim_end_matches(|c: char| c == '.' || c == ',' || c.is_whitespace());
    for suffix in CORPORATE_SUFFIXES {
        if let Some(stripped) = candidate.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    name.to_string()
}

/// Whitespace tokens of an already normalized name.
pub fn tokenize(normalized_name: &str) -> Vec<&str> {
    normalized_name.split_whitespace().collect()
}
