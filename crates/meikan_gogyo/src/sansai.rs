//! Three-talents (sansai) analysis across Ten, Jin and Chi.
//!
//! Each of the three grades maps to an element by its stroke count modulo
//! 10 (1-2 wood, 3-4 fire, 5-6 earth, 7-8 metal, 9/0 water). The verdicts
//! Ten→Jin and Jin→Chi combine through a fixed seven-tier decision table;
//! any verdict mix the table does not name falls to a count heuristic that
//! favors whichever verdict is more frequent.

use crate::element::{Gogyo, RelationVerdict, relation};
use meikan_core::FortuneTier;

/// Element of a grade stroke count via the mod-10 bucket.
pub const fn sansai_element(strokes: u32) -> Gogyo {
    match strokes % 10 {
        1 | 2 => Gogyo::Moku,
        3 | 4 => Gogyo::Ka,
        5 | 6 => Gogyo::Do,
        7 | 8 => Gogyo::Gon,
        _ => Gogyo::Sui, // 9 and 0
    }
}

/// Result of the three-talents analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SansaiResult {
    pub ten: Gogyo,
    pub jin: Gogyo,
    pub chi: Gogyo,
    pub ten_jin: RelationVerdict,
    pub jin_chi: RelationVerdict,
    pub score: u8,
    pub tier: FortuneTier,
    pub description: String,
}

/// Count-based fallback for verdict mixes outside the named table rows:
/// score follows whichever of generation/destruction is more frequent.
fn verdict_count_heuristic(verdicts: &[RelationVerdict]) -> (u8, FortuneTier) {
    let positive = verdicts
        .iter()
        .filter(|v| matches!(v, RelationVerdict::Generates | RelationVerdict::Same))
        .count();
    let negative = verdicts
        .iter()
        .filter(|v| matches!(v, RelationVerdict::Destroys))
        .count();
    if positive > negative {
        (70, FortuneTier::Kichi)
    } else if negative > positive {
        (25, FortuneTier::Kyo)
    } else {
        (45, FortuneTier::Fumei)
    }
}

/// Combine the two pairwise verdicts through the decision table.
pub fn combine_verdicts(ten_jin: RelationVerdict, jin_chi: RelationVerdict) -> (u8, FortuneTier) {
    use RelationVerdict::*;
    match (ten_jin, jin_chi) {
        (Unknown, _) | (_, Unknown) => (45, FortuneTier::Fumei),
        (Generates, Generates) => (95, FortuneTier::DaiKichi),
        (Generates, Same) | (Same, Generates) => (80, FortuneTier::Kichi),
        (Generates, Destroys) | (Destroys, Generates) => (55, FortuneTier::ChuKichi),
        (Same, Same) => (65, FortuneTier::Kichi),
        (Same, Destroys) | (Destroys, Same) => (35, FortuneTier::Kyo),
        (Destroys, Destroys) => (15, FortuneTier::DaiKyo),
        #[allow(unreachable_patterns)]
        _ => verdict_count_heuristic(&[ten_jin, jin_chi]),
    }
}

/// Analyze the three talents from Ten, Jin and Chi stroke counts.
pub fn analyze_sansai(ten_strokes: u32, jin_strokes: u32, chi_strokes: u32) -> SansaiResult {
    let ten = sansai_element(ten_strokes);
    let jin = sansai_element(jin_strokes);
    let chi = sansai_element(chi_strokes);
    let ten_jin = relation(ten, jin);
    let jin_chi = relation(jin, chi);
    let (score, tier) = combine_verdicts(ten_jin, jin_chi);
    let description = format!(
        "{} heaven, {} person, {} earth: {} then {}",
        ten.english_name(),
        jin.english_name(),
        chi.english_name(),
        ten_jin.name(),
        jin_chi.name(),
    );
    SansaiResult {
        ten,
        jin,
        chi,
        ten_jin,
        jin_chi,
        score,
        tier,
        description,
    }
}
