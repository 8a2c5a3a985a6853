//! The seven point categories and the threshold tables.

use meikan_core::FortuneTier;
use meikan_gogyo::Gogyo;

use crate::ranking_types::{PowerBreakdown, PowerInputs, PowerRankingResult, RankLetter};

// ---------------------------------------------------------------------------
// 1. Fixed sets
// ---------------------------------------------------------------------------

/// Classically powerful total stroke counts.
pub const POWERFUL_NUMBERS: &[u32] = &[
    1, 3, 5, 6, 7, 8, 11, 13, 15, 16, 21, 23, 24, 29, 31, 32, 33, 39, 41, 47, 48, 52, 63, 65, 81,
];

/// Dragon/tiger-class characters: a small set with an outsized bonus.
pub const SPECIAL_CHARS: &[char] = &['龍', '竜', '虎', '鳳', '麒', '麟', '獅', '鷹'];

/// Rare name characters (bonus per character, special set excluded).
pub const RARE_CHARS: &[char] = &['颯', '凪', '紬', '遥', '駿', '鶴', '亀', '葵', '蓮', '湊'];

/// Descending (threshold, rank) table.
const RANK_THRESHOLDS: &[(i32, RankLetter)] = &[
    (450, RankLetter::Sss),
    (400, RankLetter::Ss),
    (350, RankLetter::S),
    (280, RankLetter::A),
    (200, RankLetter::B),
    (100, RankLetter::C),
];

/// Descending (threshold, level) table.
const LEVEL_THRESHOLDS: &[(i32, u8)] = &[
    (500, 10),
    (450, 9),
    (400, 8),
    (350, 7),
    (300, 6),
    (250, 5),
    (200, 4),
    (150, 3),
    (100, 2),
];

/// Rank letter for a total.
pub fn rank_letter_for(total: i32) -> RankLetter {
    for (threshold, rank) in RANK_THRESHOLDS {
        if total >= *threshold {
            return *rank;
        }
    }
    RankLetter::D
}

/// Level (1-10) for a total.
pub fn rank_level_for(total: i32) -> u8 {
    for (threshold, level) in LEVEL_THRESHOLDS {
        if total >= *threshold {
            return *level;
        }
    }
    1
}

// ---------------------------------------------------------------------------
// 2. Point categories
// ---------------------------------------------------------------------------

/// Mean of the five grades' tier point values.
fn fortune_points(tiers: &[FortuneTier; 5]) -> i32 {
    tiers.iter().map(|t| t.points()).sum::<i32>() / 5
}

/// Stroke heuristics: tier deltas, misfortune penalty, powerful-number
/// bonus, length bonus.
fn stroke_points(tiers: &[FortuneTier; 5], sou_strokes: u32) -> i32 {
    let delta_sum: i32 = tiers.iter().map(|t| t.delta()).sum();
    let misfortune_count = tiers.iter().filter(|t| t.is_misfortune()).count() as i32;
    let mut points = 30 + 2 * delta_sum - 8 * misfortune_count;
    if POWERFUL_NUMBERS.contains(&sou_strokes) {
        points += if misfortune_count > 0 { 5 } else { 10 };
    }
    points += (sou_strokes / 10).min(5) as i32;
    points
}

/// Spread and presence of the five elements.
fn element_points(inputs: &PowerInputs<'_>) -> i32 {
    let counts = &inputs.element_counts;
    let mut points = i32::from(counts.present()) + counts.total() as i32;
    let dominant = counts.dominant();
    if dominant == Gogyo::Moku || dominant == Gogyo::Ka {
        points += 2;
    }
    if counts.present() >= 4 && counts.variance() <= 1.0 {
        points += 3;
    }
    points
}

/// Closeness and height of the Ten/Jin/Chi scores.
fn balance_points(scores: &[u8; 5]) -> i32 {
    let three = [scores[0], scores[1], scores[2]];
    let max = i32::from(*three.iter().max().unwrap_or(&0));
    let min = i32::from(*three.iter().min().unwrap_or(&0));
    let spread = max - min;
    let spread_bonus = match spread {
        0..=5 => 30,
        6..=15 => 20,
        16..=30 => 10,
        _ => 0,
    };
    let avg = three.iter().map(|&s| i32::from(s)).sum::<i32>() / 3;
    let avg_bonus = match avg {
        90..=100 => 20,
        75..=89 => 15,
        60..=74 => 10,
        40..=59 => 5,
        _ => 0,
    };
    50 + spread_bonus + avg_bonus
}

/// Name-length and special/rare character bonuses.
fn rarity_points(full_name: &[char]) -> i32 {
    let mut points = 50;
    let len = full_name.len();
    if len <= 2 {
        points += 25;
    }
    if len >= 6 {
        points += 15;
    }
    if full_name.iter().any(|ch| SPECIAL_CHARS.contains(ch)) {
        points += 25;
    }
    let rare = full_name
        .iter()
        .filter(|ch| RARE_CHARS.contains(ch) && !SPECIAL_CHARS.contains(ch))
        .count() as i32;
    points + 10 * rare
}

// ---------------------------------------------------------------------------
// 3. Aggregation
// ---------------------------------------------------------------------------

/// Aggregate all categories into the ranking result.
pub fn compute_power_ranking(inputs: &PowerInputs<'_>) -> PowerRankingResult {
    let breakdown = PowerBreakdown {
        fortune: fortune_points(&inputs.tiers),
        stroke: stroke_points(&inputs.tiers, inputs.sou_strokes),
        element: element_points(inputs),
        balance: balance_points(&inputs.scores),
        inyo: i32::from(inputs.inyo_score),
        sansai: i32::from(inputs.sansai_score),
        rarity: rarity_points(inputs.full_name),
    };
    let total = breakdown.total();
    PowerRankingResult {
        total,
        breakdown,
        rank: rank_letter_for(total),
        level: rank_level_for(total),
    }
}
