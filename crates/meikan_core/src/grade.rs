//! The five grades (kaku) and their derivation from stroke sequences.
//!
//! - Ten (heaven): family strokes, plus the spirit number for a
//!   single-character family name
//! - Jin (personality): last family char + first given char
//! - Chi (earth): given strokes, plus the spirit number for a
//!   single-character given name
//! - Gai (outer): four-case ladder over segment shapes
//! - Sou (total): family + given, spirit number always excluded
//!
//! The spirit number is a +1 adjustment for single-character segments; it
//! applies to Ten/Chi only, never to Jin/Sou.

/// The five derived grades, in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Ten,
    Jin,
    Chi,
    Gai,
    Sou,
}

/// All five grades in traditional order.
pub const ALL_GRADES: [Grade; 5] = [Grade::Ten, Grade::Jin, Grade::Chi, Grade::Gai, Grade::Sou];

impl Grade {
    /// Traditional romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ten => "Ten",
            Self::Jin => "Jin",
            Self::Chi => "Chi",
            Self::Gai => "Gai",
            Self::Sou => "Sou",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ten => "Heaven",
            Self::Jin => "Personality",
            Self::Chi => "Earth",
            Self::Gai => "Outer",
            Self::Sou => "Total",
        }
    }

    /// 0-based index in traditional order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ten => 0,
            Self::Jin => 1,
            Self::Chi => 2,
            Self::Gai => 3,
            Self::Sou => 4,
        }
    }
}

/// Gai value substituted when the computed value is not positive.
pub const GAI_CLAMP_VALUE: u32 = 2;

/// The five grade stroke counts for one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStrokes {
    pub ten: u32,
    pub jin: u32,
    pub chi: u32,
    pub gai: u32,
    pub sou: u32,
    /// True when the Gai safety repair fired (computed value was ≤ 0).
    /// Surfaced so callers can detect upstream data problems.
    pub gai_clamped: bool,
}

impl GradeStrokes {
    /// Stroke count for a grade.
    pub const fn get(&self, grade: Grade) -> u32 {
        match grade {
            Grade::Ten => self.ten,
            Grade::Jin => self.jin,
            Grade::Chi => self.chi,
            Grade::Gai => self.gai,
            Grade::Sou => self.sou,
        }
    }
}

fn sum(strokes: &[u8]) -> u32 {
    strokes.iter().map(|&s| u32::from(s)).sum()
}

const fn has_spirit(strokes: &[u8]) -> bool {
    strokes.len() == 1
}

/// Derive the five grades from per-character stroke counts.
///
/// `family` and `given` are the resolved stroke counts of each segment, in
/// character order. Empty segments are accepted and contribute zero.
pub fn grade_strokes(family: &[u8], given: &[u8]) -> GradeStrokes {
    let family_sum = sum(family);
    let given_sum = sum(given);

    let ten = family_sum + if has_spirit(family) { 1 } else { 0 };
    let chi = given_sum + if has_spirit(given) { 1 } else { 0 };
    // Spirit number is excluded from Sou and Jin.
    let sou = family_sum + given_sum;
    let jin = family.last().map_or(0, |&s| u32::from(s))
        + given.first().map_or(0, |&s| u32::from(s));

    let raw_gai: i64 = match (family.len(), given.len()) {
        (1, 1) => 2, // spirit + spirit
        (1, glen) if glen > 1 => 1 + i64::from(*given.last().unwrap_or(&0)),
        (flen, 1) if flen > 1 => i64::from(*family.first().unwrap_or(&0)) + 1,
        _ => i64::from(ten) + i64::from(chi) - i64::from(jin),
    };

    // Safety repair: an implementation safeguard, not a fortune rule.
    let (gai, gai_clamped) = if raw_gai <= 0 {
        (GAI_CLAMP_VALUE, true)
    } else {
        (raw_gai as u32, false)
    };

    GradeStrokes {
        ten,
        jin,
        chi,
        gai,
        sou,
        gai_clamped,
    }
}
