//! Per-character and per-grade element assignment and balance analysis.
//!
//! A character's element comes from an explicit override table when
//! present, otherwise from its stroke count modulo 5 on the fixed bucket
//! cycle {0: earth, 1: wood, 2: fire, 3: metal, 4: water}. Counts
//! accumulate into a profile with a dominant element, a weak element, and
//! the complementary element recommended to strengthen the weak one.

use crate::element::{ALL_GOGYO, Gogyo};

// ---------------------------------------------------------------------------
// 1. Element assignment
// ---------------------------------------------------------------------------

/// Explicit character → element overrides for common characters whose
/// meaning fixes the element regardless of stroke count.
pub const CHAR_ELEMENT_OVERRIDES: &[(char, Gogyo)] = &[
    ('木', Gogyo::Moku),
    ('林', Gogyo::Moku),
    ('森', Gogyo::Moku),
    ('松', Gogyo::Moku),
    ('竹', Gogyo::Moku),
    ('花', Gogyo::Moku),
    ('桜', Gogyo::Moku),
    ('葉', Gogyo::Moku),
    ('草', Gogyo::Moku),
    ('根', Gogyo::Moku),
    ('火', Gogyo::Ka),
    ('日', Gogyo::Ka),
    ('陽', Gogyo::Ka),
    ('光', Gogyo::Ka),
    ('明', Gogyo::Ka),
    ('晴', Gogyo::Ka),
    ('星', Gogyo::Ka),
    ('土', Gogyo::Do),
    ('山', Gogyo::Do),
    ('田', Gogyo::Do),
    ('岩', Gogyo::Do),
    ('石', Gogyo::Do),
    ('岡', Gogyo::Do),
    ('島', Gogyo::Do),
    ('金', Gogyo::Gon),
    ('鉄', Gogyo::Gon),
    ('銀', Gogyo::Gon),
    ('鈴', Gogyo::Gon),
    ('玉', Gogyo::Gon),
    ('水', Gogyo::Sui),
    ('川', Gogyo::Sui),
    ('海', Gogyo::Sui),
    ('池', Gogyo::Sui),
    ('沢', Gogyo::Sui),
    ('清', Gogyo::Sui),
    ('雨', Gogyo::Sui),
    ('雪', Gogyo::Sui),
];

/// Stroke-count bucket cycle for `strokes % 5`.
const MOD5_CYCLE: [Gogyo; 5] = [Gogyo::Do, Gogyo::Moku, Gogyo::Ka, Gogyo::Gon, Gogyo::Sui];

/// Element of a stroke count via the mod-5 bucket cycle.
pub const fn element_of_strokes(strokes: u32) -> Gogyo {
    MOD5_CYCLE[(strokes % 5) as usize]
}

/// Element of a character: override table first, else stroke bucket.
pub fn element_of_char(ch: char, strokes: u32) -> Gogyo {
    for (c, e) in CHAR_ELEMENT_OVERRIDES {
        if *c == ch {
            return *e;
        }
    }
    element_of_strokes(strokes)
}

// ---------------------------------------------------------------------------
// 2. Element counts
// ---------------------------------------------------------------------------

/// Per-element contribution counts, indexed by [`Gogyo::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCount([u8; 5]);

impl ElementCount {
    pub fn add(&mut self, element: Gogyo) {
        self.0[element.index() as usize] = self.0[element.index() as usize].saturating_add(1);
    }

    pub const fn count(&self, element: Gogyo) -> u8 {
        self.0[element.index() as usize]
    }

    /// Total contributions counted.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of distinct elements present.
    pub fn present(&self) -> u8 {
        self.0.iter().filter(|&&c| c > 0).count() as u8
    }

    /// Element with the maximum count; ties go to the first in
    /// enumeration order.
    pub fn dominant(&self) -> Gogyo {
        let mut best = ALL_GOGYO[0];
        for e in ALL_GOGYO {
            if self.count(e) > self.count(best) {
                best = e;
            }
        }
        best
    }

    /// Element with the minimum count; same tie rule.
    pub fn weak(&self) -> Gogyo {
        let mut worst = ALL_GOGYO[0];
        for e in ALL_GOGYO {
            if self.count(e) < self.count(worst) {
                worst = e;
            }
        }
        worst
    }

    /// Population variance of the five counts.
    pub fn variance(&self) -> f64 {
        let mean = self.total() as f64 / 5.0;
        self.0
            .iter()
            .map(|&c| {
                let d = f64::from(c) - mean;
                d * d
            })
            .sum::<f64>()
            / 5.0
    }
}

// ---------------------------------------------------------------------------
// 3. Profile and advice
// ---------------------------------------------------------------------------

/// Full elemental balance profile for a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementProfile {
    pub counts: ElementCount,
    pub dominant: Gogyo,
    pub weak: Gogyo,
    /// The element that generates the weak element; recommended to
    /// strengthen the profile.
    pub complement: Gogyo,
    pub advice: String,
}

/// Build a profile from per-character (char, strokes) contributions.
pub fn analyze_elements(contributions: &[(char, u32)]) -> ElementProfile {
    let mut counts = ElementCount::default();
    for (ch, strokes) in contributions {
        counts.add(element_of_char(*ch, *strokes));
    }
    profile_from_counts(counts)
}

/// Grade-based variant: one contribution per grade stroke count.
pub fn analyze_grade_elements(grade_strokes: &[u32; 5]) -> ElementProfile {
    let mut counts = ElementCount::default();
    for &strokes in grade_strokes {
        counts.add(element_of_strokes(strokes));
    }
    profile_from_counts(counts)
}

fn profile_from_counts(counts: ElementCount) -> ElementProfile {
    let dominant = counts.dominant();
    let weak = counts.weak();
    let complement = weak.generated_by();
    let advice = if counts.total() == 0 {
        "No elemental contributions to analyze".to_string()
    } else {
        format!(
            "{} dominates this name; {} is weakest. {} generates {}, so leaning on {} strengthens the balance.",
            dominant.english_name(),
            weak.english_name(),
            complement.english_name(),
            weak.english_name(),
            complement.english_name(),
        )
    };
    ElementProfile {
        counts,
        dominant,
        weak,
        complement,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod5_bucket_cycle() {
        assert_eq!(element_of_strokes(5), Gogyo::Do);
        assert_eq!(element_of_strokes(6), Gogyo::Moku);
        assert_eq!(element_of_strokes(7), Gogyo::Ka);
        assert_eq!(element_of_strokes(8), Gogyo::Gon);
        assert_eq!(element_of_strokes(9), Gogyo::Sui);
        assert_eq!(element_of_strokes(0), Gogyo::Do);
    }

    #[test]
    fn override_beats_stroke_bucket() {
        // 水 has 4 strokes (bucket Sui anyway), 川 has 3 (bucket Gon).
        assert_eq!(element_of_char('川', 3), Gogyo::Sui);
        // Non-override falls back to the bucket.
        assert_eq!(element_of_char('中', 4), Gogyo::Sui);
    }

    #[test]
    fn counts_accumulate() {
        let mut c = ElementCount::default();
        c.add(Gogyo::Moku);
        c.add(Gogyo::Moku);
        c.add(Gogyo::Sui);
        assert_eq!(c.count(Gogyo::Moku), 2);
        assert_eq!(c.count(Gogyo::Sui), 1);
        assert_eq!(c.total(), 3);
        assert_eq!(c.present(), 2);
    }

    #[test]
    fn dominant_tie_breaks_by_enum_order() {
        let mut c = ElementCount::default();
        c.add(Gogyo::Ka);
        c.add(Gogyo::Sui);
        // Ka and Sui tie at 1; Ka comes first in ALL_GOGYO.
        assert_eq!(c.dominant(), Gogyo::Ka);
    }

    #[test]
    fn weak_tie_breaks_by_enum_order() {
        let mut c = ElementCount::default();
        c.add(Gogyo::Do);
        // Everything else ties at 0; Moku is first.
        assert_eq!(c.weak(), Gogyo::Moku);
    }

    #[test]
    fn complement_generates_the_weak_element() {
        let p = analyze_elements(&[('中', 4), ('中', 4)]);
        assert_eq!(p.complement.generates(), p.weak);
    }

    #[test]
    fn grade_variant_counts_five_contributions() {
        let p = analyze_grade_elements(&[6, 12, 10, 4, 15]);
        assert_eq!(p.counts.total(), 5);
    }

    #[test]
    fn empty_contributions_degrade() {
        let p = analyze_elements(&[]);
        assert_eq!(p.counts.total(), 0);
        assert!(p.advice.contains("No elemental contributions"));
    }

    #[test]
    fn variance_zero_when_even() {
        let mut c = ElementCount::default();
        for e in ALL_GOGYO {
            c.add(e);
        }
        assert!(c.variance() < 1e-12);
    }

    #[test]
    fn advice_names_dominant_and_weak() {
        let p = analyze_elements(&[('木', 4), ('林', 8), ('田', 5)]);
        assert_eq!(p.dominant, Gogyo::Moku);
        assert!(p.advice.contains("Wood"));
    }
}
