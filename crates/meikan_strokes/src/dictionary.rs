//! Stroke dictionary built from named, override-ordered sources.
//!
//! The dictionary is built once at startup and read-only afterwards; every
//! analysis borrows it immutably, so unsynchronized concurrent reads are
//! safe. Merge precedence is the explicit order of the source list: a later
//! source overrides an earlier one on key collision.

use std::collections::HashMap;

/// A named table of per-character stroke counts.
///
/// Sources are static data; the name identifies the table in merge
/// diagnostics and keeps the override order auditable.
#[derive(Debug, Clone, Copy)]
pub struct StrokeSource {
    pub name: &'static str,
    pub entries: &'static [(char, u8)],
}

/// Immutable character → stroke-count mapping.
#[derive(Debug, Clone)]
pub struct StrokeDictionary {
    map: HashMap<char, u8>,
    source_names: Vec<&'static str>,
}

impl StrokeDictionary {
    /// Merge sources in order; later sources win on collision.
    pub fn from_sources(sources: &[StrokeSource]) -> Self {
        let capacity = sources.iter().map(|s| s.entries.len()).sum();
        let mut map = HashMap::with_capacity(capacity);
        let mut source_names = Vec::with_capacity(sources.len());
        for source in sources {
            source_names.push(source.name);
            for (ch, strokes) in source.entries {
                map.insert(*ch, *strokes);
            }
        }
        Self { map, source_names }
    }

    /// Built-in dictionary.
    ///
    /// Precedence (lowest to highest): kana, kanji_base,
    /// kanji_name_overrides.
    pub fn builtin() -> Self {
        Self::from_sources(&[
            crate::data::KANA,
            crate::data::KANJI_BASE,
            crate::data::KANJI_NAME_OVERRIDES,
        ])
    }

    /// Stroke count for a character, if any source defined it.
    pub fn get(&self, ch: char) -> Option<u8> {
        self.map.get(&ch).copied()
    }

    /// Number of distinct characters after the merge.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Names of the merged sources, in precedence order (lowest first).
    pub fn source_names(&self) -> &[&'static str] {
        &self.source_names
    }
}
