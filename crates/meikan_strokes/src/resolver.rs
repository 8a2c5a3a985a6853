//! Character-to-stroke-count resolution.
//!
//! Pure functions over the dictionary, the segment text, and the position:
//! no global counters, no interior mutability. The repeat mark `々` inherits
//! the resolution (count *and* default flag) of the character before it.

use crate::dictionary::StrokeDictionary;
use crate::script::{ScriptDefaults, classify};

/// The iteration mark, which repeats the preceding kanji.
pub const REPEAT_MARK: char = '々';

/// Stroke count assigned to a repeat mark with nothing before it.
pub const LEADING_REPEAT_MARK_STROKES: u8 = 7;

/// One character's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStroke {
    pub ch: char,
    pub strokes: u8,
    /// True when no table entry existed and a script/policy default was used.
    pub is_default: bool,
}

/// Resolve the character at `position` within `chars`.
///
/// Repeat marks re-resolve their predecessor, so a run of marks inherits
/// transitively. A leading mark gets [`LEADING_REPEAT_MARK_STROKES`] with
/// the default flag set.
pub fn resolve_char(
    chars: &[char],
    position: usize,
    dict: &StrokeDictionary,
    defaults: &ScriptDefaults,
) -> ResolvedStroke {
    let ch = chars[position];
    if ch == REPEAT_MARK {
        if position == 0 {
            return ResolvedStroke {
                ch,
                strokes: LEADING_REPEAT_MARK_STROKES,
                is_default: true,
            };
        }
        let prev = resolve_char(chars, position - 1, dict, defaults);
        return ResolvedStroke {
            ch,
            strokes: prev.strokes,
            is_default: prev.is_default,
        };
    }
    match dict.get(ch) {
        Some(strokes) => ResolvedStroke {
            ch,
            strokes,
            is_default: false,
        },
        None => ResolvedStroke {
            ch,
            strokes: defaults.strokes_for(classify(ch)),
            is_default: true,
        },
    }
}

/// Resolve every character of a segment, in order.
pub fn resolve_segment(
    text: &str,
    dict: &StrokeDictionary,
    defaults: &ScriptDefaults,
) -> Vec<ResolvedStroke> {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .map(|i| resolve_char(&chars, i, dict, defaults))
        .collect()
}

/// Sum of resolved stroke counts for a segment.
pub fn segment_strokes(resolved: &[ResolvedStroke]) -> u32 {
    resolved.iter().map(|r| u32::from(r.strokes)).sum()
}
