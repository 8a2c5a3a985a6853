use clap::{Parser, Subcommand};
use meikan_rs::{
    AnalysisResult, FortuneTable, Gender, MeikanError, ScriptDefaults, StrokeDictionary, analyze,
    compatibility, compute_power_ranking, resolve_segment, segment_strokes,
};

#[derive(Parser)]
#[command(name = "meikan", about = "Meikan name-reading CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full five-grade reading for a name
    Analyze {
        /// Family name (surname)
        family: String,
        /// Given name
        given: String,
        /// Subject gender: male (default) or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Power ranking for a name
    Rank {
        /// Family name (surname)
        family: String,
        /// Given name
        given: String,
        /// Subject gender: male (default) or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Per-character stroke counts for a text
    Strokes {
        /// Text to resolve
        text: String,
    },
    /// Compatibility between two names
    Compat {
        /// First family name
        family_a: String,
        /// First given name
        given_a: String,
        /// Second family name
        family_b: String,
        /// Second given name
        given_b: String,
    },
}

fn require_gender(s: &str) -> Gender {
    match s {
        "male" => Gender::Male,
        "female" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male (default), female");
            std::process::exit(1);
        }
    }
}

fn require_analysis(
    family: &str,
    given: &str,
    gender: Gender,
    table: &FortuneTable,
    dict: &StrokeDictionary,
    defaults: &ScriptDefaults,
) -> AnalysisResult {
    match analyze(family, given, gender, table, dict, defaults) {
        Ok(r) => r,
        Err(e @ MeikanError::SegmentTooLong { .. }) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_analysis(r: &AnalysisResult) {
    println!("Name: {} {}", r.family, r.given);
    println!("Characters:");
    for c in &r.characters {
        if c.is_spirit {
            println!("  (spirit)  1 stroke");
        } else {
            let origin = if c.is_default { "default" } else { "dictionary" };
            let element = c.element.map_or("?", |e| e.name());
            println!("  {}  {} strokes, {element} ({origin})", c.ch, c.strokes);
        }
    }
    println!("Grades:");
    for g in &r.grades {
        println!(
            "  {:<3} ({:<11}) {:>3} strokes - {} ({}) {}/100",
            g.grade.name(),
            g.grade.english_name(),
            g.strokes,
            g.tier.name(),
            g.tier.english_name(),
            g.score,
        );
    }
    if r.gai_clamped {
        println!("  (Gai repaired to its floor value)");
    }
    println!("Overall: {}/100", r.overall);
    println!(
        "Elements: dominant {} / weak {} / complement {}",
        r.elements.dominant.name(),
        r.elements.weak.name(),
        r.elements.complement.name(),
    );
    println!(
        "In-yo: {} ({}) {}/100",
        r.inyo.pattern,
        r.inyo.tier.name(),
        r.inyo.score
    );
    println!(
        "Sansai: {}-{}-{} ({}) {}/100",
        r.sansai.ten.name(),
        r.sansai.jin.name(),
        r.sansai.chi.name(),
        r.sansai.tier.name(),
        r.sansai.score
    );
    println!("Advice: {}", r.advice);
}

fn main() {
    let cli = Cli::parse();

    let table = FortuneTable::builtin();
    let dict = StrokeDictionary::builtin();
    let defaults = ScriptDefaults::default();

    match cli.command {
        Commands::Analyze {
            family,
            given,
            gender,
        } => {
            let gender = require_gender(&gender);
            let r = require_analysis(&family, &given, gender, &table, &dict, &defaults);
            print_analysis(&r);
        }

        Commands::Rank {
            family,
            given,
            gender,
        } => {
            let gender = require_gender(&gender);
            let r = match compute_power_ranking(&family, &given, gender, &table, &dict, &defaults)
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            println!("Name: {family} {given}");
            println!("Rank: {} (level {})", r.rank.name(), r.level);
            println!("Total: {}", r.total);
            let b = &r.breakdown;
            println!("  fortune  {:>4}", b.fortune);
            println!("  stroke   {:>4}", b.stroke);
            println!("  element  {:>4}", b.element);
            println!("  balance  {:>4}", b.balance);
            println!("  in-yo    {:>4}", b.inyo);
            println!("  sansai   {:>4}", b.sansai);
            println!("  rarity   {:>4}", b.rarity);
        }

        Commands::Strokes { text } => {
            let resolved = resolve_segment(&text, &dict, &defaults);
            for r in &resolved {
                let origin = if r.is_default { "default" } else { "dictionary" };
                println!("{}  {} strokes ({origin})", r.ch, r.strokes);
            }
            println!("Total: {} strokes", segment_strokes(&resolved));
        }

        Commands::Compat {
            family_a,
            given_a,
            family_b,
            given_b,
        } => {
            let a = require_analysis(&family_a, &given_a, Gender::Male, &table, &dict, &defaults);
            let b = require_analysis(&family_b, &given_b, Gender::Male, &table, &dict, &defaults);
            let c = compatibility(&a, &b);
            println!(
                "{} {} x {} {}: {}/100 ({})",
                family_a,
                given_a,
                family_b,
                given_b,
                c.score,
                c.relation.name()
            );
            println!("{}", c.summary);
        }
    }
}
