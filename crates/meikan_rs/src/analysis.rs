//! The primary `analyze` / `compute_power_ranking` entry points.
//!
//! Both are stateless library calls: the fortune table and the stroke
//! dictionary are injected, never read from ambient state, so callers can
//! supply versioned or caller-specific tables. Empty segments are accepted
//! and degrade; only overlong segments are refused.

use meikan_core::{
    ALL_GRADES, FortuneTable, FortuneTier, Grade, GradeStrokes, MAX_SEGMENT_CHARS, MeikanError,
    grade_strokes, overall_score,
};
use meikan_gogyo::{
    ElementProfile, Gogyo, InyoPattern, SansaiResult, analyze_elements, analyze_sansai,
    classify_inyo, element_of_char,
};
use meikan_rank::{PowerInputs, PowerRankingResult, compute_power_ranking as aggregate_ranking};
use meikan_strokes::{ResolvedStroke, ScriptDefaults, StrokeDictionary, resolve_segment};

/// Marker character for synthetic spirit-number breakdown entries.
pub const SPIRIT_MARK: char = '霊';

/// Subject gender. Affects advice phrasing only, never any numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// One entry of the per-character breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharDetail {
    pub ch: char,
    pub strokes: u8,
    /// Element of this character; `None` for synthetic entries.
    pub element: Option<Gogyo>,
    /// A script/policy default was used instead of a table entry.
    pub is_default: bool,
    /// Synthetic spirit-number entry, not a real character.
    pub is_spirit: bool,
}

/// One classified grade.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeResult {
    pub grade: Grade,
    pub strokes: u32,
    pub tier: FortuneTier,
    pub score: u8,
    pub description: String,
}

/// The aggregate analysis output. Pure function of the inputs; recomputed
/// on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub family: String,
    pub given: String,
    pub gender: Gender,
    /// Indexed by [`Grade::index`]: Ten, Jin, Chi, Gai, Sou.
    pub grades: [GradeResult; 5],
    pub overall: u8,
    pub characters: Vec<CharDetail>,
    /// True when the Gai safety repair fired.
    pub gai_clamped: bool,
    pub elements: ElementProfile,
    pub inyo: InyoPattern,
    pub sansai: SansaiResult,
    pub advice: String,
}

fn validate_segment(which: &'static str, text: &str) -> Result<(), MeikanError> {
    let len = text.chars().count();
    if len > MAX_SEGMENT_CHARS {
        return Err(MeikanError::SegmentTooLong { which, len });
    }
    Ok(())
}

fn stroke_counts(resolved: &[ResolvedStroke]) -> Vec<u8> {
    resolved.iter().map(|r| r.strokes).collect()
}

fn stroke_counts_u32(resolved: &[ResolvedStroke]) -> Vec<u32> {
    resolved.iter().map(|r| u32::from(r.strokes)).collect()
}

fn classify_grades(
    strokes: &GradeStrokes,
    table: &FortuneTable,
    name_is_empty: bool,
) -> [GradeResult; 5] {
    ALL_GRADES.map(|grade| {
        if name_is_empty {
            return GradeResult {
                grade,
                strokes: 0,
                tier: FortuneTier::Fumei,
                score: 0,
                description: "No characters to read".to_string(),
            };
        }
        let count = strokes.get(grade);
        let c = table.classify(count);
        GradeResult {
            grade,
            strokes: count,
            tier: c.tier,
            score: c.score,
            description: c.description.to_string(),
        }
    })
}

fn breakdown(
    family: &[ResolvedStroke],
    given: &[ResolvedStroke],
) -> Vec<CharDetail> {
    let mut details = Vec::with_capacity(family.len() + given.len() + 2);
    let mut push_segment = |resolved: &[ResolvedStroke]| {
        for r in resolved {
            details.push(CharDetail {
                ch: r.ch,
                strokes: r.strokes,
                element: Some(element_of_char(r.ch, u32::from(r.strokes))),
                is_default: r.is_default,
                is_spirit: false,
            });
        }
        if resolved.len() == 1 {
            details.push(CharDetail {
                ch: SPIRIT_MARK,
                strokes: 1,
                element: None,
                is_default: false,
                is_spirit: true,
            });
        }
    };
    push_segment(family);
    push_segment(given);
    details
}

fn build_advice(
    gender: Gender,
    overall: u8,
    elements: &ElementProfile,
    inyo: &InyoPattern,
) -> String {
    let opening = match overall {
        85..=100 => "An unusually strong reading",
        65..=84 => "A favorable reading",
        45..=64 => "A steady reading",
        25..=44 => "A strained reading",
        _ => "A difficult reading",
    };
    let closing = match gender {
        Gender::Male => "Fortunes favor names worn with patience.",
        Gender::Female => "Fortunes favor names worn with grace.",
    };
    format!(
        "{opening} ({overall}/100). {} {} {closing}",
        elements.advice, inyo.rationale
    )
}

/// Analyze a name: five grades, overall score, per-character breakdown,
/// element/in'yo/sansai profiles, advice.
pub fn analyze(
    family: &str,
    given: &str,
    gender: Gender,
    table: &FortuneTable,
    dict: &StrokeDictionary,
    defaults: &ScriptDefaults,
) -> Result<AnalysisResult, MeikanError> {
    validate_segment("family", family)?;
    validate_segment("given", given)?;

    let family_resolved = resolve_segment(family, dict, defaults);
    let given_resolved = resolve_segment(given, dict, defaults);
    let name_is_empty = family_resolved.is_empty() && given_resolved.is_empty();

    let strokes = grade_strokes(
        &stroke_counts(&family_resolved),
        &stroke_counts(&given_resolved),
    );
    let grades = classify_grades(&strokes, table, name_is_empty);
    let overall = overall_score([
        grades[0].score,
        grades[1].score,
        grades[2].score,
        grades[3].score,
        grades[4].score,
    ]);

    let contributions: Vec<(char, u32)> = family_resolved
        .iter()
        .chain(given_resolved.iter())
        .map(|r| (r.ch, u32::from(r.strokes)))
        .collect();
    let elements = analyze_elements(&contributions);
    let inyo = classify_inyo(
        &stroke_counts_u32(&family_resolved),
        &stroke_counts_u32(&given_resolved),
    );
    let sansai = analyze_sansai(strokes.ten, strokes.jin, strokes.chi);
    let advice = build_advice(gender, overall, &elements, &inyo);

    Ok(AnalysisResult {
        family: family.to_string(),
        given: given.to_string(),
        gender,
        characters: breakdown(&family_resolved, &given_resolved),
        gai_clamped: strokes.gai_clamped,
        grades,
        overall,
        elements,
        inyo,
        sansai,
        advice,
    })
}

/// Compute the secondary power ranking for a name.
pub fn compute_power_ranking(
    family: &str,
    given: &str,
    gender: Gender,
    table: &FortuneTable,
    dict: &StrokeDictionary,
    defaults: &ScriptDefaults,
) -> Result<PowerRankingResult, MeikanError> {
    let analysis = analyze(family, given, gender, table, dict, defaults)?;
    let full_name: Vec<char> = family.chars().chain(given.chars()).collect();
    let tiers = [
        analysis.grades[0].tier,
        analysis.grades[1].tier,
        analysis.grades[2].tier,
        analysis.grades[3].tier,
        analysis.grades[4].tier,
    ];
    let scores = [
        analysis.grades[0].score,
        analysis.grades[1].score,
        analysis.grades[2].score,
        analysis.grades[3].score,
        analysis.grades[4].score,
    ];
    let inputs = PowerInputs {
        tiers,
        scores,
        sou_strokes: analysis.grades[Grade::Sou.index() as usize].strokes,
        element_counts: analysis.elements.counts,
        inyo_score: analysis.inyo.score,
        sansai_score: analysis.sansai.score,
        full_name: &full_name,
    };
    Ok(aggregate_ranking(&inputs))
}
