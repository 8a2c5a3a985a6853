//! Weighted overall score across the five grades.

use crate::grade::Grade;

/// Fixed weights in [`ALL_GRADES`](crate::grade::ALL_GRADES) order.
///
/// Jin (core self) and Sou (whole life) are double-weighted. This is a
/// design constant, not configuration.
pub const GRADE_WEIGHTS: [u32; 5] = [1, 2, 1, 1, 2];

/// Sum of the weights; the divisor of the weighted mean.
pub const WEIGHT_SUM: u32 = 7;

/// Weighted overall score from the five grade scores, rounded to nearest.
///
/// `scores` is indexed by [`Grade::index`]: Ten, Jin, Chi, Gai, Sou.
pub fn overall_score(scores: [u8; 5]) -> u8 {
    let weighted: u32 = scores
        .iter()
        .zip(GRADE_WEIGHTS.iter())
        .map(|(&s, &w)| u32::from(s) * w)
        .sum();
    // Round half up; scores are bounded by 100 so u32 cannot overflow.
    ((weighted * 2 + WEIGHT_SUM) / (WEIGHT_SUM * 2)) as u8
}

/// Convenience accessor: weight of a single grade.
pub const fn weight_of(grade: Grade) -> u32 {
    GRADE_WEIGHTS[grade.index() as usize]
}
