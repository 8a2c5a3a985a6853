//! Input and result types for power ranking.

use meikan_core::FortuneTier;
use meikan_gogyo::ElementCount;

/// Rank letters, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankLetter {
    Sss,
    Ss,
    S,
    A,
    B,
    C,
    D,
}

impl RankLetter {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sss => "SSS",
            Self::Ss => "SS",
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Everything the aggregator needs, precomputed by the caller.
///
/// Grade arrays are indexed by [`meikan_core::Grade::index`]:
/// Ten, Jin, Chi, Gai, Sou.
#[derive(Debug, Clone)]
pub struct PowerInputs<'a> {
    pub tiers: [FortuneTier; 5],
    pub scores: [u8; 5],
    /// Sou grade stroke count (the whole-name total).
    pub sou_strokes: u32,
    pub element_counts: ElementCount,
    pub inyo_score: u8,
    pub sansai_score: u8,
    /// Full name, family then given, without synthetic entries.
    pub full_name: &'a [char],
}

/// Per-category point breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerBreakdown {
    pub fortune: i32,
    pub stroke: i32,
    pub element: i32,
    pub balance: i32,
    pub inyo: i32,
    pub sansai: i32,
    pub rarity: i32,
}

impl PowerBreakdown {
    pub const fn total(&self) -> i32 {
        self.fortune + self.stroke + self.element + self.balance + self.inyo + self.sansai
            + self.rarity
    }
}

/// The secondary analysis output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerRankingResult {
    pub total: i32,
    pub breakdown: PowerBreakdown,
    pub rank: RankLetter,
    pub level: u8,
}
