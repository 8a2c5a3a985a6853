//! Built-in stroke-count source tables.
//!
//! Three named sources, merged in a fixed precedence order by
//! [`crate::dictionary::StrokeDictionary::builtin`]:
//!
//! 1. `KANA` — hiragana and katakana counts (lowest precedence)
//! 2. `KANJI_BASE` — common kanji found in Japanese family and given names
//! 3. `KANJI_NAME_OVERRIDES` — traditional name-reading counts that override
//!    the base table (highest precedence)
//!
//! Counts in `KANJI_NAME_OVERRIDES` follow the classical kangaku convention
//! used for name reading (radicals counted by their full form), which is why
//! a handful of characters carry a different count than the dictionary form.

use crate::dictionary::StrokeSource;

/// Hiragana and katakana stroke counts (handwritten-form convention).
pub const KANA: StrokeSource = StrokeSource {
    name: "kana",
    entries: &[
        // Hiragana
        ('あ', 3),
        ('い', 2),
        ('う', 2),
        ('え', 2),
        ('お', 3),
        ('か', 3),
        ('き', 4),
        ('く', 1),
        ('け', 3),
        ('こ', 2),
        ('さ', 3),
        ('し', 1),
        ('す', 2),
        ('せ', 3),
        ('そ', 1),
        ('た', 4),
        ('ち', 2),
        ('つ', 1),
        ('て', 1),
        ('と', 2),
        ('な', 4),
        ('に', 3),
        ('ぬ', 2),
        ('ね', 2),
        ('の', 1),
        ('は', 3),
        ('ひ', 1),
        ('ふ', 4),
        ('へ', 1),
        ('ほ', 4),
        ('ま', 3),
        ('み', 2),
        ('む', 3),
        ('め', 2),
        ('も', 3),
        ('や', 3),
        ('ゆ', 2),
        ('よ', 2),
        ('ら', 2),
        ('り', 2),
        ('る', 1),
        ('れ', 2),
        ('ろ', 1),
        ('わ', 2),
        ('を', 3),
        ('ん', 1),
        // Katakana
        ('ア', 2),
        ('イ', 2),
        ('ウ', 3),
        ('エ', 3),
        ('オ', 3),
        ('カ', 2),
        ('キ', 3),
        ('ク', 2),
        ('ケ', 3),
        ('コ', 2),
        ('サ', 3),
        ('シ', 3),
        ('ス', 2),
        ('セ', 2),
        ('ソ', 2),
        ('タ', 3),
        ('チ', 3),
        ('ツ', 3),
        ('テ', 3),
        ('ト', 2),
        ('ナ', 2),
        ('ニ', 2),
        ('ヌ', 2),
        ('ネ', 4),
        ('ノ', 1),
        ('ハ', 2),
        ('ヒ', 2),
        ('フ', 1),
        ('ヘ', 1),
        ('ホ', 4),
        ('マ', 2),
        ('ミ', 3),
        ('ム', 2),
        ('メ', 2),
        ('モ', 3),
        ('ヤ', 2),
        ('ユ', 2),
        ('ヨ', 3),
        ('ラ', 2),
        ('リ', 2),
        ('ル', 2),
        ('レ', 1),
        ('ロ', 3),
        ('ワ', 2),
        ('ヲ', 3),
        ('ン', 2),
    ],
};

/// Common name kanji with dictionary-form stroke counts.
pub const KANJI_BASE: StrokeSource = StrokeSource {
    name: "kanji_base",
    entries: &[
        // Numerals
        ('一', 1),
        ('二', 2),
        ('三', 3),
        ('四', 5),
        ('五', 4),
        ('六', 4),
        ('七', 2),
        ('八', 2),
        ('九', 2),
        ('十', 2),
        ('百', 6),
        ('千', 3),
        ('万', 3),
        // Frequent surname kanji
        ('田', 5),
        ('中', 4),
        ('山', 3),
        ('川', 3),
        ('佐', 7),
        ('藤', 18),
        ('鈴', 13),
        ('木', 4),
        ('高', 10),
        ('橋', 16),
        ('渡', 12),
        ('辺', 5),
        ('伊', 6),
        ('東', 8),
        ('西', 6),
        ('南', 9),
        ('北', 5),
        ('小', 3),
        ('林', 8),
        ('松', 8),
        ('本', 5),
        ('井', 4),
        ('上', 3),
        ('下', 3),
        ('野', 11),
        ('原', 10),
        ('石', 5),
        ('村', 7),
        ('加', 5),
        ('吉', 6),
        ('和', 8),
        ('大', 3),
        ('金', 8),
        ('谷', 7),
        ('口', 3),
        ('部', 11),
        ('島', 10),
        ('崎', 11),
        ('長', 8),
        ('久', 3),
        ('保', 9),
        ('内', 4),
        ('外', 5),
        ('平', 5),
        ('広', 5),
        ('前', 9),
        ('後', 9),
        ('近', 7),
        ('遠', 13),
        ('宮', 10),
        ('森', 12),
        ('清', 11),
        ('沢', 7),
        ('池', 6),
        ('岡', 8),
        ('坂', 7),
        ('関', 14),
        ('福', 13),
        ('新', 13),
        ('古', 5),
        ('白', 5),
        ('黒', 11),
        ('青', 8),
        ('赤', 7),
        // Nature / element kanji
        ('水', 4),
        ('火', 4),
        ('土', 3),
        ('日', 4),
        ('月', 4),
        ('星', 9),
        ('空', 8),
        ('天', 4),
        ('海', 9),
        ('風', 9),
        ('雪', 11),
        ('雨', 8),
        ('竹', 6),
        ('花', 7),
        ('桜', 10),
        ('梅', 10),
        ('菊', 11),
        ('草', 9),
        ('葉', 12),
        ('根', 10),
        ('岩', 8),
        ('浜', 10),
        ('光', 6),
        ('陽', 12),
        ('雲', 12),
        // Frequent given-name kanji
        ('太', 4),
        ('子', 3),
        ('美', 9),
        ('香', 9),
        ('愛', 13),
        ('優', 17),
        ('翔', 12),
        ('健', 11),
        ('心', 4),
        ('里', 7),
        ('奈', 8),
        ('菜', 11),
        ('結', 12),
        ('莉', 10),
        ('咲', 9),
        ('葵', 12),
        ('蓮', 13),
        ('湊', 12),
        ('悠', 11),
        ('真', 10),
        ('直', 8),
        ('幸', 8),
        ('京', 8),
        ('奏', 9),
        ('紬', 11),
        ('郎', 9),
        ('介', 4),
        ('助', 7),
        ('之', 3),
        ('也', 3),
        ('人', 2),
        ('仁', 4),
        ('正', 5),
        ('明', 8),
        ('昭', 9),
        ('春', 9),
        ('夏', 10),
        ('秋', 9),
        ('冬', 5),
        ('彩', 11),
        ('音', 9),
        ('歌', 14),
        ('詩', 13),
        ('文', 4),
        ('学', 8),
        ('知', 8),
        ('智', 12),
        ('勇', 9),
        ('強', 11),
        ('豊', 13),
        ('富', 12),
        ('貴', 12),
        ('英', 8),
        ('秀', 7),
        ('信', 9),
        ('義', 13),
        ('忠', 8),
        ('孝', 7),
        ('敬', 12),
        ('徳', 14),
        ('慶', 15),
        ('寿', 7),
        ('栄', 9),
        ('昌', 8),
        ('隆', 11),
        ('宏', 7),
        ('浩', 10),
        ('雄', 12),
        ('剛', 10),
        ('毅', 15),
        ('修', 10),
        ('治', 8),
        ('晴', 12),
        ('望', 11),
        ('希', 7),
        ('未', 5),
        ('来', 7),
        ('夢', 13),
        ('遥', 12),
        ('颯', 14),
        ('凪', 6),
        ('司', 5),
        ('史', 5),
        ('男', 7),
        ('女', 3),
        ('夫', 4),
        ('枝', 8),
        ('代', 5),
        ('世', 5),
        ('紀', 9),
        ('恵', 10),
        ('鉄', 13),
        ('銀', 14),
        ('玉', 5),
        ('王', 4),
        ('国', 8),
        ('良', 7),
        ('芳', 7),
        ('茂', 8),
        ('繁', 16),
        ('安', 6),
        ('康', 11),
        ('静', 14),
        ('節', 13),
        // Powerful-animal class
        ('龍', 16),
        ('竜', 10),
        ('虎', 8),
        ('鳳', 14),
        ('鷹', 24),
        ('麒', 19),
        ('麟', 24),
        ('獅', 13),
        ('鶴', 21),
        ('亀', 11),
        ('馬', 10),
        ('駿', 17),
    ],
};

/// Traditional name-reading overrides on top of [`KANJI_BASE`].
///
/// Classical counting treats certain radicals by their full ancestral form:
/// the water radical as 水 (4), the grass crown as 艸 (6), the kozato-hen
/// as 阜 (8), and numerals by their value.
pub const KANJI_NAME_OVERRIDES: StrokeSource = StrokeSource {
    name: "kanji_name_overrides",
    entries: &[
        // Numerals count their value in name reading
        ('四', 4),
        ('五', 5),
        ('六', 6),
        ('七', 7),
        ('八', 8),
        ('九', 9),
        ('十', 10),
        // Water radical (氵) counted as 水: +1
        ('池', 7),
        ('沢', 8),
        ('清', 12),
        ('浜', 11),
        ('浩', 11),
        ('湊', 13),
        ('治', 9),
        ('渡', 13),
        // Grass crown (艹) counted as 艸: +3
        ('花', 10),
        ('草', 12),
        ('菊', 14),
        ('葉', 15),
        ('藤', 21),
        ('菜', 14),
        ('莉', 13),
        ('葵', 15),
        ('蓮', 16),
        ('芳', 10),
        ('茂', 11),
        ('英', 11),
        // Kozato-hen (阝) counted as 阜: +5
        ('陽', 17),
        ('隆', 16),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_covers_all_basic_hiragana_rows() {
        for ch in ['あ', 'か', 'さ', 'た', 'な', 'は', 'ま', 'や', 'ら', 'わ', 'ん'] {
            assert!(
                KANA.entries.iter().any(|(c, _)| *c == ch),
                "missing {ch}"
            );
        }
    }

    #[test]
    fn base_table_has_no_zero_counts() {
        for (ch, n) in KANJI_BASE.entries {
            assert!(*n > 0, "{ch} has zero strokes");
        }
    }

    #[test]
    fn overrides_differ_from_base() {
        // Every override must actually change something, otherwise it is
        // dead data in the merge chain.
        for (ch, n) in KANJI_NAME_OVERRIDES.entries {
            let base = KANJI_BASE.entries.iter().find(|(c, _)| c == ch);
            if let Some((_, base_n)) = base {
                assert_ne!(n, base_n, "override for {ch} is identical to base");
            }
        }
    }

    #[test]
    fn source_names_are_distinct() {
        assert_ne!(KANA.name, KANJI_BASE.name);
        assert_ne!(KANJI_BASE.name, KANJI_NAME_OVERRIDES.name);
    }
}
