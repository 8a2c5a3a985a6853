//! Five-grade derivation, fortune classification, and overall scoring.
//!
//! This crate provides:
//! - The five grades (Ten/Jin/Chi/Gai/Sou) derived from per-character
//!   stroke counts, including the spirit-number rule
//! - The six-tier fortune scale and the stroke-count classification table
//!   with its two documented fallback paths
//! - The fixed-weight overall score
//!
//! All computations are pure functions over explicit inputs; the fortune
//! table is built once and only read afterwards.

pub mod error;
pub mod fortune;
pub mod grade;
pub mod score;

pub use error::{MAX_SEGMENT_CHARS, MeikanError};
pub use fortune::{ALL_TIERS, Classified, FortuneEntry, FortuneTable, FortuneTier};
pub use grade::{ALL_GRADES, GAI_CLAMP_VALUE, Grade, GradeStrokes, grade_strokes};
pub use score::{GRADE_WEIGHTS, WEIGHT_SUM, overall_score, weight_of};
