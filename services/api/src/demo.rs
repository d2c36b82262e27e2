use crate::infra::{load_factors_from, read_questionnaire, sample_questionnaire};
use chrono::{DateTime, Local};
use clap::Args;
use island_impact::error::AppError;
use island_impact::scoring::{
    format_carbon, format_percentage, format_water, Category, ImpactEngine, ImpactReport,
    LifestyleQuestionnaire,
};
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Questionnaire answers as JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Optional `domain,factor,value` CSV overlaid on the Oahu factors
    #[arg(long)]
    pub(crate) factors: Option<PathBuf>,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        profile,
        factors,
        json,
    } = args;

    let questionnaire = read_questionnaire(&profile)?;
    let factors = load_factors_from(factors.as_deref())?;
    let report = build_report(ImpactEngine::new(factors), questionnaire)?;
    print_report(&report, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Island impact demo: sample two-person commuter household");
    let report = build_report(ImpactEngine::default(), sample_questionnaire())?;
    print_report(&report, args.json)
}

fn build_report(
    engine: ImpactEngine,
    questionnaire: LifestyleQuestionnaire,
) -> Result<ImpactReport, AppError> {
    let assessment = engine.assess(questionnaire)?;
    Ok(ImpactReport::build(assessment, engine.factors())?)
}

fn print_report(report: &ImpactReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report, Local::now()));
    }
    Ok(())
}

pub(crate) fn render_report(report: &ImpactReport, generated_at: DateTime<Local>) -> String {
    let result = &report.result;
    let comparison = &report.comparison;
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "Impact report for {} ({})",
        report.region,
        generated_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        out,
        "Overall score: {}/100 ({})",
        result.overall_score,
        report.overall_band.label()
    );

    let _ = writeln!(out, "Category scores:");
    for category in Category::ALL {
        let share = result
            .impact_breakdown
            .get(&category)
            .copied()
            .unwrap_or_default();
        let band = report
            .category_bands
            .get(&category)
            .map(|band| band.label())
            .unwrap_or("unknown");
        let _ = writeln!(
            out,
            "  - {}: {} ({}) | {} of overall",
            category.display_name(),
            result.score(category),
            band,
            format_percentage(share)
        );
    }

    let _ = writeln!(out, "Estimates:");
    let _ = writeln!(
        out,
        "  - Carbon: {} per year | {:.0}% of regional average",
        format_carbon(result.carbon_footprint),
        comparison.carbon_pct_of_average
    );
    let _ = writeln!(
        out,
        "  - Water: {} per day | {:.0}% of regional average",
        format_water(result.water_usage),
        comparison.water_pct_of_average
    );
    let _ = writeln!(
        out,
        "  - Waste: {} lbs per week | {:.0}% of regional average",
        result.waste_generation,
        comparison.waste_pct_of_average
    );

    let split = &report.carbon_split;
    let _ = writeln!(
        out,
        "Carbon by source: transport {:.1} | energy {:.1} | food {:.1} | waste {:.1} | other {:.1}",
        split.transport, split.energy, split.food, split.waste, split.other
    );
    let _ = writeln!(out, "Focus areas: {}", report.brief.focus_summary());

    out
}
