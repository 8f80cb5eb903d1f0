//! Reconciles company names from legal filings against a client roster.
//!
//! Names are canonicalized ([`matching::normalize`]), compared with several
//! lexical and phonetic metrics ([`matching::similarity`]), blended into a
//! 0-100 confidence ([`matching::confidence`]) and ranked
//! ([`matching::ranker`]). Everything in [`matching`] is pure and safe to call
//! from many threads at once.

pub mod matching;
pub mod models;
pub mod utils;

pub use matching::{find_matches, find_matches_parallel, normalize_name};
pub use models::matching::{MatchClassification, MatchDetails, MatchResult, MatchResultSet};
