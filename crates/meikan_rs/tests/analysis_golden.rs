//! Golden-value integration tests for the full analysis pipeline.
//!
//! Character choices pin exact stroke counts through the built-in
//! dictionary: 田 5, 中 4, 希 7, 之 3, 人 2, 安 6, 星 9.

use meikan_rs::*;

fn setup() -> (FortuneTable, StrokeDictionary, ScriptDefaults) {
    (
        FortuneTable::builtin(),
        StrokeDictionary::builtin(),
        ScriptDefaults::default(),
    )
}

// ===== Reference worked example =====

#[test]
fn worked_example_grades_and_overall() {
    let (table, dict, defaults) = setup();
    // Family 田 (5), given 希之 (7, 3).
    let r = analyze("田", "希之", Gender::Male, &table, &dict, &defaults).unwrap();

    assert_eq!(r.grades[Grade::Ten.index() as usize].strokes, 6);
    assert_eq!(r.grades[Grade::Chi.index() as usize].strokes, 10);
    assert_eq!(r.grades[Grade::Sou.index() as usize].strokes, 15);
    assert_eq!(r.grades[Grade::Jin.index() as usize].strokes, 12);
    assert_eq!(r.grades[Grade::Gai.index() as usize].strokes, 4);
    assert!(!r.gai_clamped);

    let ten = &r.grades[Grade::Ten.index() as usize];
    assert_eq!((ten.tier, ten.score), (FortuneTier::DaiKichi, 100));
    let chi = &r.grades[Grade::Chi.index() as usize];
    assert_eq!((chi.tier, chi.score), (FortuneTier::Kyo, 35));
    let sou = &r.grades[Grade::Sou.index() as usize];
    assert_eq!((sou.tier, sou.score), (FortuneTier::DaiKichi, 100));
    let jin = &r.grades[Grade::Jin.index() as usize];
    assert_eq!((jin.tier, jin.score), (FortuneTier::Kichi, 60));
    let gai = &r.grades[Grade::Gai.index() as usize];
    assert_eq!((gai.tier, gai.score), (FortuneTier::Kyo, 25));

    assert_eq!(r.overall, 69);
}

#[test]
fn worked_example_breakdown_has_one_spirit_entry() {
    let (table, dict, defaults) = setup();
    let r = analyze("田", "希之", Gender::Male, &table, &dict, &defaults).unwrap();
    let spirits = r.characters.iter().filter(|c| c.is_spirit).count();
    assert_eq!(spirits, 1);
    assert_eq!(r.characters.len(), 4);
    assert!(r.characters.iter().all(|c| c.is_spirit || !c.is_default));
}

// ===== Three talents worked example =====

#[test]
fn sansai_worked_example_through_the_pipeline() {
    let (table, dict, defaults) = setup();
    // Family 中希 (4+7=11), given 安星 (6, 9): Ten 11, Jin 7+6=13, Chi 15.
    let r = analyze("中希", "安星", Gender::Female, &table, &dict, &defaults).unwrap();
    assert_eq!(r.grades[Grade::Ten.index() as usize].strokes, 11);
    assert_eq!(r.grades[Grade::Jin.index() as usize].strokes, 13);
    assert_eq!(r.grades[Grade::Chi.index() as usize].strokes, 15);
    assert_eq!(r.sansai.ten, Gogyo::Moku);
    assert_eq!(r.sansai.jin, Gogyo::Ka);
    assert_eq!(r.sansai.chi, Gogyo::Do);
    assert_eq!(r.sansai.score, 95);
    assert_eq!(r.sansai.tier, FortuneTier::DaiKichi);
}

// ===== Yin-yang extremes =====

#[test]
fn full_alternation_scores_100() {
    let (table, dict, defaults) = setup();
    // 田中 (5,4) + 希人 (7,2): Yo,In,Yo,In.
    let r = analyze("田中", "希人", Gender::Male, &table, &dict, &defaults).unwrap();
    assert_eq!(r.inyo.score, 100);
    assert_eq!(r.inyo.tier, FortuneTier::DaiKichi);
}

#[test]
fn uniform_polarity_scores_5() {
    let (table, dict, defaults) = setup();
    // 田希 (5,7) + 之星 (3,9): all odd, all Yo.
    let r = analyze("田希", "之星", Gender::Male, &table, &dict, &defaults).unwrap();
    assert_eq!(r.inyo.score, 5);
    assert_eq!(r.inyo.tier, FortuneTier::DaiKyo);
}

// ===== Structural properties =====

#[test]
fn grade_identity_for_multi_char_segments() {
    let (table, dict, defaults) = setup();
    for (family, given) in [("田中", "太郎"), ("渡辺", "美咲"), ("佐藤", "健一")] {
        let r = analyze(family, given, Gender::Male, &table, &dict, &defaults).unwrap();
        let ten = r.grades[Grade::Ten.index() as usize].strokes;
        let jin = r.grades[Grade::Jin.index() as usize].strokes;
        let chi = r.grades[Grade::Chi.index() as usize].strokes;
        let gai = r.grades[Grade::Gai.index() as usize].strokes;
        assert_eq!(gai + jin, ten + chi, "{family} {given}");
    }
}

#[test]
fn spirit_number_isolation() {
    let (table, dict, defaults) = setup();
    // Single-char segments: Ten and Chi carry +1, Sou never does.
    let r = analyze("田", "希", Gender::Male, &table, &dict, &defaults).unwrap();
    assert_eq!(r.grades[Grade::Ten.index() as usize].strokes, 6);
    assert_eq!(r.grades[Grade::Chi.index() as usize].strokes, 8);
    assert_eq!(r.grades[Grade::Sou.index() as usize].strokes, 12);
}

#[test]
fn classifier_is_total_for_any_input() {
    let table = FortuneTable::builtin();
    for n in 0..2000 {
        let c = table.classify(n);
        assert!(c.score <= 100);
    }
}

#[test]
fn determinism_across_calls() {
    let (table, dict, defaults) = setup();
    let a = analyze("佐々木", "颯太", Gender::Male, &table, &dict, &defaults).unwrap();
    let b = analyze("佐々木", "颯太", Gender::Male, &table, &dict, &defaults).unwrap();
    assert_eq!(a, b);
    let ra = compute_power_ranking("佐々木", "颯太", Gender::Male, &table, &dict, &defaults)
        .unwrap();
    let rb = compute_power_ranking("佐々木", "颯太", Gender::Male, &table, &dict, &defaults)
        .unwrap();
    assert_eq!(ra, rb);
}

#[test]
fn rank_mapping_is_monotone() {
    let mut prev_rank = meikan_rank::rank_letter_for(i32::MIN / 2);
    let mut prev_level = meikan_rank::rank_level_for(i32::MIN / 2);
    for total in -200..800 {
        let rank = meikan_rank::rank_letter_for(total);
        let level = meikan_rank::rank_level_for(total);
        assert!(rank <= prev_rank);
        assert!(level >= prev_level);
        prev_rank = rank;
        prev_level = level;
    }
}

// ===== Caller-supplied tables =====

#[test]
fn caller_table_uses_nearest_neighbor() {
    let dict = StrokeDictionary::builtin();
    let defaults = ScriptDefaults::default();
    let table = FortuneTable::from_entries([(
        15,
        FortuneEntry {
            tier: FortuneTier::DaiKichi,
            score: 100,
            description: "fifteen".to_string(),
        },
    )]);
    // 田 + 希之: Sou is exactly 15; Ten (6) is 9 away → Fumei.
    let r = analyze("田", "希之", Gender::Male, &table, &dict, &defaults).unwrap();
    assert_eq!(r.grades[Grade::Sou.index() as usize].tier, FortuneTier::DaiKichi);
    assert_eq!(r.grades[Grade::Ten.index() as usize].tier, FortuneTier::Fumei);
    assert_eq!(r.grades[Grade::Ten.index() as usize].score, 0);
}

#[test]
fn clamp_flag_surfaces_for_degenerate_input() {
    let (table, dict, defaults) = setup();
    // An empty name computes Gai as zero, which triggers the repair.
    let r = analyze("", "", Gender::Male, &table, &dict, &defaults).unwrap();
    assert!(r.gai_clamped);
}

// ===== Cache transparency =====

#[test]
fn cache_never_changes_results() {
    let (table, dict, defaults) = setup();
    let mut cache = AnalysisCache::new(8);
    let direct = analyze("山田", "葵", Gender::Female, &table, &dict, &defaults).unwrap();
    let first = cache
        .get_or_analyze("山田", "葵", Gender::Female, &table, &dict, &defaults)
        .unwrap();
    let second = cache
        .get_or_analyze("山田", "葵", Gender::Female, &table, &dict, &defaults)
        .unwrap();
    assert_eq!(direct, first);
    assert_eq!(direct, second);
    assert_eq!(cache.stats().hits, 1);
}
