//! Convenience facade for the meikan name-reading engine.
//!
//! Provides the high-level [`analyze`] and [`compute_power_ranking`] entry
//! points plus an optional bounded memo cache, re-exporting the types from
//! the lower crates so callers only need `use meikan_rs::*`.
//!
//! # Quick start
//!
//! ```rust
//! use meikan_rs::*;
//!
//! let table = FortuneTable::builtin();
//! let dict = StrokeDictionary::builtin();
//! let defaults = ScriptDefaults::default();
//!
//! let result = analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults).unwrap();
//! println!("overall {}/100, {}", result.overall, result.advice);
//! ```

pub mod analysis;
pub mod cache;
pub mod compat;

// Primary entry points.
pub use analysis::{
    AnalysisResult, CharDetail, Gender, GradeResult, SPIRIT_MARK, analyze, compute_power_ranking,
};
pub use cache::{AnalysisCache, CacheStats};
pub use compat::{CompatibilityResult, compatibility};

// Lower-crate types, re-exported for single-crate consumption.
pub use meikan_core::{
    ALL_GRADES, ALL_TIERS, FortuneEntry, FortuneTable, FortuneTier, Grade, GradeStrokes,
    MAX_SEGMENT_CHARS, MeikanError, grade_strokes, overall_score,
};
pub use meikan_gogyo::{
    ALL_GOGYO, ElementCount, ElementProfile, Gogyo, Inyo, InyoPattern, RelationVerdict,
    SansaiResult, analyze_elements, analyze_grade_elements, analyze_sansai, classify_inyo,
    relation, sansai_element,
};
pub use meikan_rank::{PowerBreakdown, PowerInputs, PowerRankingResult, RankLetter};
pub use meikan_strokes::{
    REPEAT_MARK, ResolvedStroke, ScriptDefaults, ScriptType, StrokeDictionary, StrokeSource,
    classify, resolve_segment, segment_strokes,
};
