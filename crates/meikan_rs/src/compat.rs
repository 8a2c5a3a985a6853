//! Compatibility comparison between two analyzed names.
//!
//! Scores the pair by the elemental relation of their dominant elements,
//! adjusted by how close the two overall scores sit.

use meikan_gogyo::{RelationVerdict, relation};

use crate::analysis::AnalysisResult;

/// Pairwise compatibility output.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityResult {
    /// Relation of a's dominant element toward b's.
    pub relation: RelationVerdict,
    pub score: u8,
    pub summary: String,
}

const fn base_score(verdict: RelationVerdict) -> u8 {
    match verdict {
        RelationVerdict::Generates => 90,
        RelationVerdict::Same => 70,
        RelationVerdict::Unknown => 50,
        RelationVerdict::Destroys => 30,
    }
}

/// Compare two analyses.
pub fn compatibility(a: &AnalysisResult, b: &AnalysisResult) -> CompatibilityResult {
    let verdict = relation(a.elements.dominant, b.elements.dominant);
    let diff = a.overall.abs_diff(b.overall);
    let proximity_bonus = match diff {
        0..=5 => 10,
        6..=15 => 5,
        _ => 0,
    };
    let score = (base_score(verdict) + proximity_bonus).min(100);
    let summary = format!(
        "{} toward {}: {} ({}). Overall scores differ by {diff}.",
        a.elements.dominant.english_name(),
        b.elements.dominant.english_name(),
        verdict.name(),
        score,
    );
    CompatibilityResult {
        relation: verdict,
        score,
        summary,
    }
}
