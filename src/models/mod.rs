// src/models/mod.rs
pub mod matching;

pub use matching::{
    DuplicatePair, MatchClassification, MatchDetails, MatchResult, MatchResultSet, RawMetrics,
};
