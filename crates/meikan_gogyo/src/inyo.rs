//! Yin-yang (in'yo) polarity sequence analysis.
//!
//! Each character's resolved stroke count maps to a polarity by parity
//! (odd → yang, even → yin), and the full-name sequence is classified in a
//! fixed precedence order:
//! 1. known bad sub-patterns (a yang pocket or yin pocket)
//! 2. uniform polarity
//! 3. full alternation
//! 4. longest-run analysis, with a bonus when the family/given boundary
//!    itself changes polarity

use meikan_core::FortuneTier;

/// Polarity of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inyo {
    /// Yang (odd stroke count).
    Yo,
    /// Yin (even stroke count).
    In,
}

impl Inyo {
    pub const fn from_strokes(strokes: u32) -> Inyo {
        if strokes % 2 == 1 { Inyo::Yo } else { Inyo::In }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yo => "Yo",
            Self::In => "In",
        }
    }

    /// Display glyph: filled circle for yin, open for yang.
    pub const fn glyph(self) -> char {
        match self {
            Self::Yo => '○',
            Self::In => '●',
        }
    }
}

/// Known bad sub-patterns: a polarity "pocket" enclosed by its opposite.
/// Length-4 pockets score 10, length-6 pockets score 5.
const BAD_PATTERNS: &[(&[Inyo], u8)] = &[
    (&[Inyo::Yo, Inyo::In, Inyo::In, Inyo::Yo], 10),
    (&[Inyo::In, Inyo::Yo, Inyo::Yo, Inyo::In], 10),
    (&[Inyo::Yo, Inyo::In, Inyo::In, Inyo::In, Inyo::In, Inyo::Yo], 5),
    (&[Inyo::In, Inyo::Yo, Inyo::Yo, Inyo::Yo, Inyo::Yo, Inyo::In], 5),
];

/// Classification of a full-name polarity sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct InyoPattern {
    pub sequence: Vec<Inyo>,
    /// Glyph string, e.g. `○●○●`.
    pub pattern: String,
    pub longest_run: usize,
    pub score: u8,
    pub tier: FortuneTier,
    pub rationale: String,
}

fn longest_run(seq: &[Inyo]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev = None;
    for &p in seq {
        if Some(p) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(p);
        }
        longest = longest.max(run);
    }
    longest
}

fn contains_bad_pattern(seq: &[Inyo]) -> Option<(&'static [Inyo], u8)> {
    for (pattern, score) in BAD_PATTERNS {
        if seq.windows(pattern.len()).any(|w| w == *pattern) {
            return Some((pattern, *score));
        }
    }
    None
}

/// Classify the polarity sequence of a full name.
///
/// `family` and `given` are per-character stroke counts; the boundary
/// between them participates in the run==2 rule.
pub fn classify_inyo(family: &[u32], given: &[u32]) -> InyoPattern {
    let sequence: Vec<Inyo> = family
        .iter()
        .chain(given.iter())
        .map(|&s| Inyo::from_strokes(s))
        .collect();
    let pattern: String = sequence.iter().map(|p| p.glyph()).collect();
    let run = longest_run(&sequence);

    let (score, tier, rationale) = if sequence.is_empty() {
        (0, FortuneTier::Fumei, "No characters to analyze".to_string())
    } else if let Some((bad, score)) = contains_bad_pattern(&sequence) {
        let bad_glyphs: String = bad.iter().map(|p| p.glyph()).collect();
        (
            score,
            FortuneTier::DaiKyo,
            format!("Contains the enclosed pocket {bad_glyphs}, a known unstable shape"),
        )
    } else if sequence.windows(2).all(|w| w[0] == w[1]) {
        (
            5,
            FortuneTier::DaiKyo,
            "Every character shares one polarity; the name has no flow".to_string(),
        )
    } else if run == 1 {
        (
            100,
            FortuneTier::DaiKichi,
            "Polarity alternates through the whole name".to_string(),
        )
    } else if run >= 4 {
        (
            20,
            FortuneTier::DaiKyo,
            format!("A run of {run} identical polarities dominates the name"),
        )
    } else if run == 3 {
        (
            30,
            FortuneTier::Kyo,
            "A run of three identical polarities unbalances the name".to_string(),
        )
    } else {
        // run == 2: reward a polarity change at the family/given boundary.
        let boundary_changes = match (family.len(), sequence.len()) {
            (flen, total) if flen > 0 && flen < total => sequence[flen - 1] != sequence[flen],
            _ => false,
        };
        if boundary_changes {
            (
                75,
                FortuneTier::ChuKichi,
                "Short runs only, and the family/given boundary changes polarity".to_string(),
            )
        } else {
            (
                60,
                FortuneTier::ChuKichi,
                "Short runs only, but the family/given boundary keeps its polarity".to_string(),
            )
        }
    };

    InyoPattern {
        sequence,
        pattern,
        longest_run: run,
        score,
        tier,
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_mapping() {
        assert_eq!(Inyo::from_strokes(5), Inyo::Yo);
        assert_eq!(Inyo::from_strokes(4), Inyo::In);
        assert_eq!(Inyo::from_strokes(0), Inyo::In);
    }

    #[test]
    fn full_alternation_scores_100() {
        // Strokes [5,4,7,2] → Yo,In,Yo,In.
        let p = classify_inyo(&[5, 4], &[7, 2]);
        assert_eq!(p.score, 100);
        assert_eq!(p.tier, FortuneTier::DaiKichi);
        assert_eq!(p.longest_run, 1);
        assert_eq!(p.pattern, "○●○●");
    }

    #[test]
    fn uniform_polarity_scores_5() {
        // Strokes [5,7,3,9] → all Yo.
        let p = classify_inyo(&[5, 7], &[3, 9]);
        assert_eq!(p.score, 5);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }

    #[test]
    fn yang_pocket_is_bad_before_run_analysis() {
        // Yo,In,In,Yo: longest run is only 2, but the pocket rule wins.
        let p = classify_inyo(&[5, 4], &[2, 7]);
        assert_eq!(p.score, 10);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
        assert!(p.rationale.contains("pocket"));
    }

    #[test]
    fn yin_pocket_mirror_is_bad() {
        // In,Yo,Yo,In
        let p = classify_inyo(&[4, 5], &[7, 2]);
        assert_eq!(p.score, 10);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }

    #[test]
    fn long_pocket_scores_5() {
        // Yo,In,In,In,In,Yo
        let p = classify_inyo(&[5, 4, 2], &[6, 8, 7]);
        assert_eq!(p.score, 5);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }

    #[test]
    fn run_of_four_scores_20() {
        // In,In,In,In,Yo — no pocket, run 4.
        let p = classify_inyo(&[4, 2], &[6, 8, 7]);
        assert_eq!(p.longest_run, 4);
        assert_eq!(p.score, 20);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }

    #[test]
    fn run_of_three_scores_30() {
        // In,In,In,Yo,In — run 3, no pocket.
        let p = classify_inyo(&[4, 2], &[6, 7, 2]);
        assert_eq!(p.longest_run, 3);
        assert_eq!(p.score, 30);
        assert_eq!(p.tier, FortuneTier::Kyo);
    }

    #[test]
    fn run_of_two_with_boundary_change() {
        // Family In,In | given Yo,In: boundary flips → 75.
        let p = classify_inyo(&[4, 2], &[7, 2]);
        assert_eq!(p.longest_run, 2);
        assert_eq!(p.score, 75);
        assert_eq!(p.tier, FortuneTier::ChuKichi);
    }

    #[test]
    fn leading_run_with_boundary_change() {
        // Yo,Yo | In,Yo: run 2, boundary flips → 75.
        let p = classify_inyo(&[5, 7], &[4, 5]);
        assert_eq!(p.longest_run, 2);
        assert_eq!(p.score, 75);
    }

    #[test]
    fn pocket_wins_over_run_of_two() {
        // Yo,In | In,Yo has only runs of 2 but forms the yang pocket.
        let p = classify_inyo(&[5, 4], &[4, 7]);
        assert_eq!(p.score, 10);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }

    #[test]
    fn boundary_keep_scores_60() {
        // Family Yo | given Yo,In,Yo? single family char: Yo,Yo,In,Yo,In
        // boundary Yo→Yo keeps polarity, runs of 2 only, no pocket.
        let p = classify_inyo(&[5], &[7, 4, 5, 2]);
        assert_eq!(p.longest_run, 2);
        assert_eq!(p.score, 60);
        assert_eq!(p.tier, FortuneTier::ChuKichi);
    }

    #[test]
    fn empty_name_degrades() {
        let p = classify_inyo(&[], &[]);
        assert_eq!(p.score, 0);
        assert_eq!(p.tier, FortuneTier::Fumei);
        assert!(p.pattern.is_empty());
    }

    #[test]
    fn single_character_is_uniform() {
        let p = classify_inyo(&[5], &[]);
        assert_eq!(p.score, 5);
        assert_eq!(p.tier, FortuneTier::DaiKyo);
    }
}
