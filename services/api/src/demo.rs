use clap::Args;
use nutriscore::config::AppConfig;
use nutriscore::dataset::{
    fill_dataset, write_records, ProductTableImporter, QualityReport,
};
use nutriscore::error::AppError;
use nutriscore::scoring::{self, NutrientProfile, ScoreOutcome};
use std::io::Cursor;

use crate::cli::{FillArgs, QualityArgs, ScoreArgs};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Missing-rate percentage used for the audit portion of the demo
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Skip the dataset repair portion of the demo
    #[arg(long)]
    pub(crate) skip_dataset: bool,
}

const SAMPLE_CSV: &str = "\
product_name,energy_100g,saturated_fat_100g,sugars_100g,fiber_100g,proteins_100g,sodium_100g,nutrition_score_fr_100g,nutrition_grade_fr
Breakfast muesli,500,2,5,3,5,100,,
Orange soda,1800,0,40,0,0,30,14,d
Dark chocolate,2200,18,29,7,6,20,,
Lentil soup,280,0.3,1.2,3.1,4.5,350,1,
Salted crisps,2100,3.5,1.5,4.2,6,650,,
";

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let profile = NutrientProfile {
        energy_kj: args.energy,
        saturated_fat_g: args.saturated_fat,
        sugars_g: args.sugars,
        fiber_g: args.fiber,
        proteins_g: args.proteins,
        sodium_mg: args.sodium,
    };

    let outcome = scoring::evaluate(&profile);
    render_outcome(args.name.as_deref().unwrap_or("product"), &outcome);

    Ok(())
}

pub(crate) fn run_fill(args: FillArgs) -> Result<(), AppError> {
    let mut records = ProductTableImporter::from_path(&args.input)?;
    let summary = fill_dataset(&mut records)?;

    match args.output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_records(&records, file)?;
            println!(
                "Filled {} scores and {} grades across {} records ({} untouched)",
                summary.scores_filled, summary.grades_filled, summary.records, summary.untouched
            );
        }
        None => {
            write_records(&records, std::io::stdout().lock())?;
            eprintln!(
                "Filled {} scores and {} grades across {} records ({} untouched)",
                summary.scores_filled, summary.grades_filled, summary.records, summary.untouched
            );
        }
    }

    Ok(())
}

pub(crate) fn run_quality(args: QualityArgs) -> Result<(), AppError> {
    let records = ProductTableImporter::from_path(&args.input)?;
    let threshold = match args.threshold {
        Some(threshold) => threshold,
        None => AppConfig::load()?.quality.missing_threshold_pct,
    };

    let report = QualityReport::compute(&records, threshold)?;
    render_quality_report(&report);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        threshold,
        skip_dataset,
    } = args;

    println!("Nutri-Score profiling demo");

    println!("\nSingle product scoring");
    for (name, profile) in sample_profiles() {
        let outcome = scoring::evaluate(&profile);
        render_outcome(name, &outcome);
    }

    if skip_dataset {
        return Ok(());
    }

    let mut records = ProductTableImporter::from_reader(Cursor::new(SAMPLE_CSV))?;
    let threshold = match threshold {
        Some(threshold) => threshold,
        None => AppConfig::load()?.quality.missing_threshold_pct,
    };

    println!("\nSample table before repair");
    render_quality_report(&QualityReport::compute(&records, threshold)?);

    let summary = fill_dataset(&mut records)?;
    println!(
        "\nRepaired the table: {} scores and {} grades filled, {} records untouched",
        summary.scores_filled, summary.grades_filled, summary.untouched
    );

    println!("\nSample table after repair");
    render_quality_report(&QualityReport::compute(&records, threshold)?);

    println!("\nRepaired rows");
    for record in &records {
        let name = record.product_name.as_deref().unwrap_or("(unnamed)");
        let score = record
            .nutrition_score_fr_100g
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let grade = record
            .nutrition_grade_fr
            .map(|grade| grade.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("- {name}: score {score}, grade {grade}");
    }

    Ok(())
}

fn sample_profiles() -> [(&'static str, NutrientProfile); 3] {
    [
        (
            "Breakfast muesli",
            NutrientProfile {
                energy_kj: 500.0,
                saturated_fat_g: 2.0,
                sugars_g: 5.0,
                fiber_g: 3.0,
                proteins_g: 5.0,
                sodium_mg: 100.0,
            },
        ),
        (
            "Orange soda",
            NutrientProfile {
                energy_kj: 1800.0,
                saturated_fat_g: 0.0,
                sugars_g: 40.0,
                fiber_g: 0.0,
                proteins_g: 0.0,
                sodium_mg: 30.0,
            },
        ),
        (
            "Lentil soup",
            NutrientProfile {
                energy_kj: 280.0,
                saturated_fat_g: 0.3,
                sugars_g: 1.2,
                fiber_g: 3.1,
                proteins_g: 4.5,
                sodium_mg: 350.0,
            },
        ),
    ]
}

fn render_outcome(name: &str, outcome: &ScoreOutcome) {
    println!(
        "- {name}: score {score}, grade {grade} ({limit} limit points, {favor} favor points)",
        score = outcome.score,
        grade = outcome.grade,
        limit = outcome.points_to_limit,
        favor = outcome.points_to_favor
    );
    for component in &outcome.components {
        println!("    {}", component.notes);
    }
}

fn render_quality_report(report: &QualityReport) {
    println!("Missing values by column");
    for entry in &report.entries {
        println!(
            "- {}: {} ({} of {} rows)",
            entry.header, entry.formatted, entry.missing, entry.total
        );
    }
    println!(
        "Columns above {:.1} % missing: {}",
        report.threshold_pct, report.flagged_columns
    );
}
