//! Fortune tiers and the stroke-count classification table.
//!
//! Classification is total: every non-negative stroke count maps to a tier,
//! a score and a description, through one of three paths:
//! 1. exact table entry
//! 2. range buckets above the table (built-in table only)
//! 3. nearest keyed entry within 5, else the explicit unknown tier
//!    (caller-supplied tables only)

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// 1. Fortune tiers
// ---------------------------------------------------------------------------

/// The six ordered fortune tiers, plus the explicit unknown category used
/// by the nearest-neighbor fallback and degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FortuneTier {
    DaiKichi,
    ChuKichi,
    Kichi,
    Kyo,
    ChuKyo,
    DaiKyo,
    Fumei,
}

/// The six real tiers in descending order of fortune.
pub const ALL_TIERS: [FortuneTier; 6] = [
    FortuneTier::DaiKichi,
    FortuneTier::ChuKichi,
    FortuneTier::Kichi,
    FortuneTier::Kyo,
    FortuneTier::ChuKyo,
    FortuneTier::DaiKyo,
];

impl FortuneTier {
    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DaiKichi => "Daikichi",
            Self::ChuKichi => "Chukichi",
            Self::Kichi => "Kichi",
            Self::Kyo => "Kyo",
            Self::ChuKyo => "Chukyo",
            Self::DaiKyo => "Daikyo",
            Self::Fumei => "Fumei",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::DaiKichi => "Great Fortune",
            Self::ChuKichi => "Middle Fortune",
            Self::Kichi => "Fortune",
            Self::Kyo => "Misfortune",
            Self::ChuKyo => "Middle Misfortune",
            Self::DaiKyo => "Great Misfortune",
            Self::Fumei => "Unknown",
        }
    }

    /// Point value on the 0-100 ranking scale.
    pub const fn points(self) -> i32 {
        match self {
            Self::DaiKichi => 100,
            Self::ChuKichi => 80,
            Self::Kichi => 60,
            Self::Kyo => 30,
            Self::ChuKyo => 15,
            Self::DaiKyo => 0,
            Self::Fumei => 50,
        }
    }

    /// Signed delta used by the stroke-point heuristic.
    pub const fn delta(self) -> i32 {
        match self {
            Self::DaiKichi => 2,
            Self::ChuKichi => 1,
            Self::Kichi => 1,
            Self::Kyo => -1,
            Self::ChuKyo => -2,
            Self::DaiKyo => -3,
            Self::Fumei => 0,
        }
    }

    /// Misfortune-or-worse.
    pub const fn is_misfortune(self) -> bool {
        matches!(self, Self::Kyo | Self::ChuKyo | Self::DaiKyo)
    }
}

// ---------------------------------------------------------------------------
// 2. Table entries
// ---------------------------------------------------------------------------

/// One keyed entry of a fortune table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneEntry {
    pub tier: FortuneTier,
    pub score: u8,
    pub description: String,
}

/// A classification outcome. Borrows the description from the table where
/// an entry matched; fallback paths borrow static policy text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub tier: FortuneTier,
    pub score: u8,
    pub description: &'a str,
}

/// Hand-authored table for stroke counts 1..=41.
///
/// (strokes, tier, score, description)
const BUILTIN: &[(u32, FortuneTier, u8, &str)] = &[
    (1, FortuneTier::DaiKichi, 100, "The origin number: independence and steady growth"),
    (2, FortuneTier::DaiKyo, 5, "Division and isolation; support scatters"),
    (3, FortuneTier::DaiKichi, 100, "Vitality and talent that draws people in"),
    (4, FortuneTier::Kyo, 25, "Instability; plans stall short of completion"),
    (5, FortuneTier::DaiKichi, 100, "Harmony of opposites; quiet good fortune"),
    (6, FortuneTier::DaiKichi, 100, "Inherited blessing; help arrives unasked"),
    (7, FortuneTier::ChuKichi, 80, "Willpower that cuts through obstacles"),
    (8, FortuneTier::ChuKichi, 80, "Perseverance rewarded late but surely"),
    (9, FortuneTier::ChuKyo, 15, "Talent shadowed by reversals"),
    (10, FortuneTier::Kyo, 35, "Emptiness; effort drains away"),
    (11, FortuneTier::DaiKichi, 100, "Renewal; a withered field takes rain"),
    (12, FortuneTier::Kichi, 60, "Modest luck; overreach invites strain"),
    (13, FortuneTier::DaiKichi, 100, "Wit and charm open every door"),
    (14, FortuneTier::Kyo, 30, "Scattered bonds; money slips through"),
    (15, FortuneTier::DaiKichi, 100, "The highest virtue: wealth and respect"),
    (16, FortuneTier::DaiKichi, 100, "A leader's number; others gather under it"),
    (17, FortuneTier::ChuKichi, 80, "Push through; boldness carries the day"),
    (18, FortuneTier::ChuKichi, 80, "Firm will, steady accumulation"),
    (19, FortuneTier::ChuKyo, 15, "Brilliance undermined by sudden setbacks"),
    (20, FortuneTier::ChuKyo, 10, "A fragile vessel; guard health and savings"),
    (21, FortuneTier::DaiKichi, 100, "Rising moon; authority gained step by step"),
    (22, FortuneTier::Kyo, 25, "Autumn grass; early promise fades"),
    (23, FortuneTier::DaiKichi, 100, "Sunrise vigor; one rise lifts the whole house"),
    (24, FortuneTier::DaiKichi, 100, "Wealth from nothing; thrift becomes fortune"),
    (25, FortuneTier::Kichi, 65, "Sharp tongue, sound plans; mind the friction"),
    (26, FortuneTier::Kyo, 30, "Heroic turbulence; great swings either way"),
    (27, FortuneTier::Kyo, 30, "Pride invites slander midway"),
    (28, FortuneTier::ChuKyo, 15, "Drifting separations; home ties strain"),
    (29, FortuneTier::Kichi, 70, "Ambition fulfilled through sustained work"),
    (30, FortuneTier::Kyo, 25, "A gamble; wins and losses alternate"),
    (31, FortuneTier::DaiKichi, 100, "Wisdom, courage and means in balance"),
    (32, FortuneTier::DaiKichi, 100, "Unexpected patronage; luck favors boldness"),
    (33, FortuneTier::DaiKichi, 100, "Blazing sun; fame that demands character"),
    (34, FortuneTier::DaiKyo, 5, "Gathering storms; troubles arrive in pairs"),
    (35, FortuneTier::Kichi, 70, "Calm scholarship; fortune in quiet fields"),
    (36, FortuneTier::Kyo, 30, "Chivalrous waves; helping others costs dearly"),
    (37, FortuneTier::ChuKichi, 80, "Independent merit; trust earned alone"),
    (38, FortuneTier::Kichi, 65, "Artistry over authority; craft succeeds"),
    (39, FortuneTier::DaiKichi, 100, "Clouds part; prosperity after hardship"),
    (40, FortuneTier::Kyo, 25, "Clever but restless; retreat preserves gains"),
    (41, FortuneTier::DaiKichi, 100, "Complete virtue; ability meets its moment"),
];

// ---------------------------------------------------------------------------
// 3. Fortune table
// ---------------------------------------------------------------------------

/// Fallback behavior for stroke counts with no exact entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FallbackKind {
    /// Built-in policy: bucket by range above the table.
    RangeBuckets,
    /// Caller-supplied tables: nearest keyed entry within 5, else unknown.
    Nearest,
}

/// An immutable stroke-count → fortune mapping.
///
/// Built once and only read afterwards; analyses borrow it immutably.
#[derive(Debug, Clone)]
pub struct FortuneTable {
    entries: BTreeMap<u32, FortuneEntry>,
    fallback: FallbackKind,
}

const NO_ENTRY_NEARBY: &str = "No reading near this stroke count";

impl FortuneTable {
    /// The built-in reference table (1..=41 plus range buckets above).
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(n, tier, score, desc)| {
                (
                    *n,
                    FortuneEntry {
                        tier: *tier,
                        score: *score,
                        description: (*desc).to_string(),
                    },
                )
            })
            .collect();
        Self {
            entries,
            fallback: FallbackKind::RangeBuckets,
        }
    }

    /// A caller-supplied table. Misses resolve by nearest neighbor within
    /// 5, else the unknown tier.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, FortuneEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            fallback: FallbackKind::Nearest,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, strokes: u32) -> Option<&FortuneEntry> {
        self.entries.get(&strokes)
    }

    /// Classify a stroke count. Total: never panics for any input.
    pub fn classify(&self, strokes: u32) -> Classified<'_> {
        if let Some(entry) = self.entries.get(&strokes) {
            return Classified {
                tier: entry.tier,
                score: entry.score,
                description: &entry.description,
            };
        }
        match self.fallback {
            FallbackKind::RangeBuckets => bucket_classify(strokes),
            FallbackKind::Nearest => self.nearest_classify(strokes),
        }
    }

    fn nearest_classify(&self, strokes: u32) -> Classified<'_> {
        let below = self.entries.range(..=strokes).next_back();
        let above = self.entries.range(strokes..).next();
        let nearest = match (below, above) {
            (Some((bk, bv)), Some((ak, av))) => {
                if strokes - bk <= ak - strokes {
                    Some((strokes - bk, bv))
                } else {
                    Some((ak - strokes, av))
                }
            }
            (Some((bk, bv)), None) => Some((strokes - bk, bv)),
            (None, Some((ak, av))) => Some((ak - strokes, av)),
            (None, None) => None,
        };
        match nearest {
            Some((dist, entry)) if dist <= 5 => Classified {
                tier: entry.tier,
                score: entry.score,
                description: &entry.description,
            },
            _ => Classified {
                tier: FortuneTier::Fumei,
                score: 0,
                description: NO_ENTRY_NEARBY,
            },
        }
    }
}

/// Range buckets for counts above the built-in table.
const fn bucket_classify(strokes: u32) -> Classified<'static> {
    match strokes {
        42..=50 => Classified {
            tier: FortuneTier::DaiKichi,
            score: 100,
            description: "High count in a flourishing range",
        },
        51..=60 => Classified {
            tier: FortuneTier::ChuKichi,
            score: 80,
            description: "High count with steady prospects",
        },
        61..=70 => Classified {
            tier: FortuneTier::Kichi,
            score: 60,
            description: "High count with mild prospects",
        },
        71..=80 => Classified {
            tier: FortuneTier::Kyo,
            score: 20,
            description: "High count in a straining range",
        },
        _ => Classified {
            tier: FortuneTier::DaiKyo,
            score: 10,
            description: "Count outside every charted range",
        },
    }
}
