//! Script classification and fallback stroke defaults.
//!
//! When a character has no dictionary entry, resolution falls back to a
//! per-script default. The defaults are a documented policy, not data:
//! Latin and digits are a single stroke, kana average three, ideographs
//! default to ten (configurable, because the source data policies for this
//! case disagree), everything else one.

/// Script class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptType {
    Latin,
    Digit,
    Hiragana,
    Katakana,
    Ideograph,
    Other,
}

impl ScriptType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Latin => "latin",
            Self::Digit => "digit",
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
            Self::Ideograph => "ideograph",
            Self::Other => "other",
        }
    }
}

/// Classify a character by Unicode block.
pub fn classify(ch: char) -> ScriptType {
    if ch.is_ascii_alphabetic() {
        return ScriptType::Latin;
    }
    if ch.is_ascii_digit() {
        return ScriptType::Digit;
    }
    match ch as u32 {
        // Hiragana block
        0x3041..=0x309F => ScriptType::Hiragana,
        // Katakana + phonetic extensions + halfwidth forms
        0x30A0..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9D => ScriptType::Katakana,
        // CJK unified ideographs, extension A, compatibility ideographs
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF => ScriptType::Ideograph,
        _ => ScriptType::Other,
    }
}

/// Fallback stroke counts per script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptDefaults {
    pub latin: u8,
    pub digit: u8,
    pub hiragana: u8,
    pub katakana: u8,
    pub ideograph: u8,
    pub other: u8,
}

impl ScriptDefaults {
    pub const fn strokes_for(&self, script: ScriptType) -> u8 {
        match script {
            ScriptType::Latin => self.latin,
            ScriptType::Digit => self.digit,
            ScriptType::Hiragana => self.hiragana,
            ScriptType::Katakana => self.katakana,
            ScriptType::Ideograph => self.ideograph,
            ScriptType::Other => self.other,
        }
    }
}

impl Default for ScriptDefaults {
    fn default() -> Self {
        Self {
            latin: 1,
            digit: 1,
            hiragana: 3,
            katakana: 3,
            ideograph: 10,
            other: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_and_digit() {
        assert_eq!(classify('A'), ScriptType::Latin);
        assert_eq!(classify('z'), ScriptType::Latin);
        assert_eq!(classify('7'), ScriptType::Digit);
    }

    #[test]
    fn kana_blocks() {
        assert_eq!(classify('あ'), ScriptType::Hiragana);
        assert_eq!(classify('ゖ'), ScriptType::Hiragana);
        assert_eq!(classify('ア'), ScriptType::Katakana);
        assert_eq!(classify('ー'), ScriptType::Katakana);
    }

    #[test]
    fn ideograph_blocks() {
        assert_eq!(classify('田'), ScriptType::Ideograph);
        assert_eq!(classify('㐂'), ScriptType::Ideograph); // extension A
    }

    #[test]
    fn other_catches_the_rest() {
        assert_eq!(classify('!'), ScriptType::Other);
        assert_eq!(classify(' '), ScriptType::Other);
        assert_eq!(classify('Ω'), ScriptType::Other);
    }

    #[test]
    fn default_policy_values() {
        let d = ScriptDefaults::default();
        assert_eq!(d.strokes_for(ScriptType::Latin), 1);
        assert_eq!(d.strokes_for(ScriptType::Digit), 1);
        assert_eq!(d.strokes_for(ScriptType::Hiragana), 3);
        assert_eq!(d.strokes_for(ScriptType::Katakana), 3);
        assert_eq!(d.strokes_for(ScriptType::Ideograph), 10);
        assert_eq!(d.strokes_for(ScriptType::Other), 1);
    }

    #[test]
    fn ideograph_default_is_configurable() {
        let d = ScriptDefaults {
            ideograph: 12,
            ..ScriptDefaults::default()
        };
        assert_eq!(d.strokes_for(ScriptType::Ideograph), 12);
    }
}
