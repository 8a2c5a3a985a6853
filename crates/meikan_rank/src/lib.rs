//! Power-ranking aggregation over the five grades and the sub-analyses.
//!
//! Total points sum seven weighted contributions (fortune, stroke,
//! element, balance, in'yo, sansai, rarity), then map to a rank letter and
//! a 1-10 level through fixed descending threshold tables. Both mappings
//! are monotone in total points.

pub mod ranking;
pub mod ranking_types;

pub use ranking::{compute_power_ranking, rank_letter_for, rank_level_for};
pub use ranking_types::{PowerBreakdown, PowerInputs, PowerRankingResult, RankLetter};
