use super::common::*;
use crate::scoring::domain::{Category, Diet, VehicleClass};
use crate::scoring::error::ImpactError;
use crate::scoring::factors::{names, EnvironmentalFactors, FactorDomain};
use crate::scoring::report::{
    format_carbon, format_percentage, format_water, CarbonSplit, ImpactReport,
    RegionalComparison, ScoreBand,
};

fn report() -> ImpactReport {
    let assessment = engine().assess(questionnaire()).expect("assessed");
    ImpactReport::build(assessment, &factors()).expect("report")
}

#[test]
fn score_bands_cover_the_range() {
    assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
    assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
    assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
    assert_eq!(ScoreBand::for_score(59), ScoreBand::Fair);
    assert_eq!(ScoreBand::for_score(40), ScoreBand::Fair);
    assert_eq!(ScoreBand::for_score(39), ScoreBand::Poor);
    assert_eq!(ScoreBand::for_score(20), ScoreBand::Poor);
    assert_eq!(ScoreBand::for_score(19), ScoreBand::Critical);
    assert_eq!(ScoreBand::for_score(0), ScoreBand::Critical);
    assert_eq!(ScoreBand::Poor.color(), "#FF9800");
}

#[test]
fn report_carries_bands_and_brief() {
    let report = report();

    assert_eq!(report.region, "Oahu");
    assert_eq!(report.result.overall_score, 90);
    assert_eq!(report.overall_band, ScoreBand::Excellent);
    assert_eq!(report.category_bands[&Category::Water], ScoreBand::Good);
    assert_eq!(report.category_bands[&Category::Food], ScoreBand::Excellent);

    assert_eq!(report.brief.focus_areas, vec![Category::Water]);
    assert_eq!(report.brief.focus_summary(), "water");
    assert_eq!(report.brief.profile.diet_type, Diet::Vegan);
}

#[test]
fn focus_summary_lists_display_names() {
    let mut report = report();
    report.brief.focus_areas = vec![Category::Transport, Category::Food];
    assert_eq!(report.brief.focus_summary(), "transportation, food");
}

#[test]
fn comparison_is_relative_to_regional_averages() {
    let report = report();
    let comparison = report.comparison;

    assert_eq!(comparison.regional_carbon_tons, 16.9);
    assert_eq!(comparison.regional_water_gallons, 115.0);
    assert_eq!(comparison.regional_waste_pounds, 31.0);
    assert!((comparison.carbon_pct_of_average - 5.7 / 16.9 * 100.0).abs() < 1e-9);
    assert!((comparison.water_pct_of_average - 42.0 / 115.0 * 100.0).abs() < 1e-9);
    assert!((comparison.waste_pct_of_average - 11.0 / 31.0 * 100.0).abs() < 1e-9);
}

#[test]
fn comparison_needs_regional_averages() {
    let result = engine().evaluate(&profile()).expect("evaluated");
    assert!(RegionalComparison::from_result(&result, &factors()).is_ok());

    let err = RegionalComparison::from_result(&result, &EnvironmentalFactors::empty("Nowhere"))
        .expect_err("averages missing");
    assert_eq!(
        err,
        ImpactError::MissingFactor {
            domain: FactorDomain::Carbon,
            factor: names::BASELINE_EMISSIONS.to_string(),
        }
    );
}

#[test]
fn zero_regional_average_reports_zero_percent() {
    let result = engine().evaluate(&profile()).expect("evaluated");
    let factors = EnvironmentalFactors::oahu().with_factor(
        FactorDomain::Water,
        names::AVG_WATER_CONSUMPTION,
        0.0,
    );

    let comparison = RegionalComparison::from_result(&result, &factors).expect("comparison");
    assert_eq!(comparison.water_pct_of_average, 0.0);
}

#[test]
fn carbon_split_accounts_for_the_whole_footprint() {
    let report = report();
    let split = report.carbon_split;

    assert!((split.total() - report.result.carbon_footprint).abs() < 1e-9);
    // electric car and plant-based diet shift weight toward energy
    assert!((split.energy - 0.35 * 5.7).abs() < 1e-9);
    assert!((split.food - 0.15 * 5.7).abs() < 1e-9);
}

#[test]
fn frequent_flyers_shift_carbon_toward_transport() {
    let mut profile = commuter_profile();
    profile.flight_hours = 40.0;
    let split = CarbonSplit::estimate(&profile, 10.0);

    assert!((split.transport - 4.0).abs() < 1e-9);
    assert!((split.waste - 1.0).abs() < 1e-9);
    assert!(split.other.abs() < 1e-9);
    assert!((split.total() - 10.0).abs() < 1e-9);

    profile.car_type = VehicleClass::Hybrid;
    let split = CarbonSplit::estimate(&profile, 10.0);
    assert!((split.transport - 3.0).abs() < 1e-9);
    assert!((split.total() - 10.0).abs() < 1e-9);
}

#[test]
fn report_serializes_with_snake_case_keys() {
    let value = serde_json::to_value(report()).expect("serializable");

    assert_eq!(value["overall_band"], "excellent");
    assert_eq!(value["result"]["category_scores"]["water"], 64);
    assert_eq!(value["result"]["areas_for_improvement"][0], "water");
    assert!(value["result"]["impact_breakdown"]["food"].is_number());
    assert_eq!(value["brief"]["profile"]["car_type"], "electric");
}

#[test]
fn carbon_is_formatted_in_kilograms_below_a_ton() {
    assert_eq!(format_carbon(0.45), "450 kg CO2e");
    assert_eq!(format_carbon(1.0), "1.0 tons CO2e");
    assert_eq!(format_carbon(15.46), "15.5 tons CO2e");
}

#[test]
fn water_is_grouped_by_thousands() {
    assert_eq!(format_water(42), "42 gallons");
    assert_eq!(format_water(1_000), "1,000 gallons");
    assert_eq!(format_water(1_234_567), "1,234,567 gallons");
    assert_eq!(format_water(-1_500), "-1,500 gallons");
}

#[test]
fn percentages_truncate() {
    assert_eq!(format_percentage(0.999), "99%");
    assert_eq!(format_percentage(0.2576), "25%");
    assert_eq!(format_percentage(0.0), "0%");
    assert_eq!(format_percentage(1.0), "100%");
}
