// src/matching/mod.rs
pub mod confidence;
pub mod dedup;
pub mod normalize;
pub mod ranker;
pub mod similarity;

pub use confidence::combine_confidence;
pub use dedup::find_duplicate_pairs;
pub use normalize::normalize_name;
pub use ranker::{compare_names, find_matches, find_matches_parallel};
pub use similarity::score_names;
