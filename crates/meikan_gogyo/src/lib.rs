//! Five-element, yin-yang, and three-talents analyses for name reading.
//!
//! This crate provides:
//! - The [`Gogyo`] element enum with its generation/destruction cycles and
//!   pairwise [`RelationVerdict`]
//! - Per-character and per-grade element assignment with balance profiling
//! - In'yo polarity sequence classification
//! - The sansai (three talents) decision table over Ten/Jin/Chi

pub mod element;
pub mod element_analyzer;
pub mod inyo;
pub mod sansai;

pub use element::{ALL_GOGYO, Gogyo, RelationVerdict, relation};
pub use element_analyzer::{
    CHAR_ELEMENT_OVERRIDES, ElementCount, ElementProfile, analyze_elements,
    analyze_grade_elements, element_of_char, element_of_strokes,
};
pub use inyo::{Inyo, InyoPattern, classify_inyo};
pub use sansai::{SansaiResult, analyze_sansai, combine_verdicts, sansai_element};
