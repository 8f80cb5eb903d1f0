// src/utils/constants.rs

/// Leading articles stripped from a name, at most one per normalization.
pub const ARTICLE_PREFIXES: [&str; 3] = ["the ", "a ", "an "];

/// Phrases introducing a predecessor or alias name. Everything from the first
/// occurrence onwards is dropped so only the current operating name remains.
pub const RELATIONSHIP_INDICATORS: [&str; 8] = [
    " f/k/a ",
    " successor to ",
    " successor-in-interest to ",
    " successor by merger to ",
    " successor-by-merger to ",
    " d/b/a ",
    " a/k/a ",
    " n/k/a ",
];

/// Phrases naming a parent organization, e.g. "acme widgets division of acme".
pub const DIVISION_INDICATORS: [&str; 7] = [
    " division of ",
    " subsidiary of ",
    " unit of ",
    " part of ",
    " branch of ",
    " segment of ",
    " department of ",
];

/// Trailing corporate designators. Only the first one found is removed.
pub const CORPORATE_SUFFIXES: [&str; 16] = [
    " corporation",
    " corp",
    " incorporated",
    " inc",
    " company",
    " co",
    " limited",
    " ltd",
    " llc",
    " plc",
    " holdings",
    " group",
    " international",
    " industries",
    " industry",
    " industrial",
];

/// Rosters smaller than this are always scored on the calling thread.
pub const PARALLEL_ROSTER_THRESHOLD: usize = 256;
