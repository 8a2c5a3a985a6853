//! Character-to-stroke-count resolution for name reading.
//!
//! This crate provides:
//! - Named stroke sources merged into an immutable [`StrokeDictionary`]
//!   with explicit override precedence
//! - Script classification with configurable fallback defaults
//! - Pure per-character and per-segment resolution, including the
//!   repeat-mark (`々`) inheritance rule
//!
//! The dictionary is built once at startup and only ever read afterwards.

pub mod data;
pub mod dictionary;
pub mod resolver;
pub mod script;

pub use dictionary::{StrokeDictionary, StrokeSource};
pub use resolver::{
    LEADING_REPEAT_MARK_STROKES, REPEAT_MARK, ResolvedStroke, resolve_char, resolve_segment,
    segment_strokes,
};
pub use script::{ScriptDefaults, ScriptType, classify};
