//! The five elements (gogyo) and their relation cycles.
//!
//! Two fixed cycles relate the elements:
//! - generation (sosei): wood → fire → earth → metal → water → wood
//! - destruction (sokoku): wood → earth → water → fire → metal → wood
//!
//! The pairwise verdict between two elements is Same, Generates, Destroys,
//! or Unknown (the reverse directions of either cycle).

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gogyo {
    Moku,
    Ka,
    Do,
    Gon,
    Sui,
}

/// All five elements in the fixed enumeration order used for tie-breaking.
pub const ALL_GOGYO: [Gogyo; 5] = [Gogyo::Moku, Gogyo::Ka, Gogyo::Do, Gogyo::Gon, Gogyo::Sui];

impl Gogyo {
    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Moku => "Moku",
            Self::Ka => "Ka",
            Self::Do => "Do",
            Self::Gon => "Gon",
            Self::Sui => "Sui",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Moku => "Wood",
            Self::Ka => "Fire",
            Self::Do => "Earth",
            Self::Gon => "Metal",
            Self::Sui => "Water",
        }
    }

    /// 0-based index in enumeration order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Moku => 0,
            Self::Ka => 1,
            Self::Do => 2,
            Self::Gon => 3,
            Self::Sui => 4,
        }
    }

    /// The element this one generates (sosei cycle).
    pub const fn generates(self) -> Gogyo {
        match self {
            Self::Moku => Self::Ka,
            Self::Ka => Self::Do,
            Self::Do => Self::Gon,
            Self::Gon => Self::Sui,
            Self::Sui => Self::Moku,
        }
    }

    /// The element this one destroys (sokoku cycle).
    pub const fn destroys(self) -> Gogyo {
        match self {
            Self::Moku => Self::Do,
            Self::Do => Self::Sui,
            Self::Sui => Self::Ka,
            Self::Ka => Self::Gon,
            Self::Gon => Self::Moku,
        }
    }

    /// The element that generates this one (inverse sosei lookup).
    pub const fn generated_by(self) -> Gogyo {
        match self {
            Self::Ka => Self::Moku,
            Self::Do => Self::Ka,
            Self::Gon => Self::Do,
            Self::Sui => Self::Gon,
            Self::Moku => Self::Sui,
        }
    }
}

/// Pairwise relation verdict between two elements, in direction a → b.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationVerdict {
    Same,
    Generates,
    Destroys,
    Unknown,
}

impl RelationVerdict {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "Same",
            Self::Generates => "Generates",
            Self::Destroys => "Destroys",
            Self::Unknown => "Unknown",
        }
    }
}

/// Verdict for the directed pair a → b.
pub const fn relation(a: Gogyo, b: Gogyo) -> RelationVerdict {
    if a.index() == b.index() {
        return RelationVerdict::Same;
    }
    if a.generates().index() == b.index() {
        return RelationVerdict::Generates;
    }
    if a.destroys().index() == b.index() {
        return RelationVerdict::Destroys;
    }
    RelationVerdict::Unknown
}
