use island_impact::config::ScoringConfig;
use island_impact::error::AppError;
use island_impact::scoring::{EnvironmentalFactors, LifestyleQuestionnaire};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Oahu defaults with the configured CSV overlay applied, if any.
pub(crate) fn load_factors(config: &ScoringConfig) -> Result<EnvironmentalFactors, AppError> {
    load_factors_from(config.factors_path.as_deref())
}

pub(crate) fn load_factors_from(path: Option<&Path>) -> Result<EnvironmentalFactors, AppError> {
    let base = EnvironmentalFactors::oahu();
    let Some(path) = path else {
        return Ok(base);
    };

    let overlay = EnvironmentalFactors::from_csv_path(path)?;
    info!(
        path = %path.display(),
        entries = overlay.len(),
        "applying environmental factor overlay"
    );
    Ok(base.with_overrides(&overlay))
}

pub(crate) fn read_questionnaire(path: &Path) -> Result<LifestyleQuestionnaire, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Two-person commuter household used by the demo command.
pub(crate) fn sample_questionnaire() -> LifestyleQuestionnaire {
    LifestyleQuestionnaire {
        car_usage: 120.0,
        car_type: "Medium gas car (20-30 mpg)".to_string(),
        public_transport_usage: 2.0,
        flight_hours: 12.0,
        household_size: 2,
        electricity_bill: 240.0,
        renewable_energy: "No".to_string(),
        air_conditioning: 8.0,
        shower_length: 10.0,
        shower_frequency: 7.0,
        water_conservation: vec!["Low-flow showerheads/faucets".to_string()],
        recycling_habit: "Sometimes".to_string(),
        composting: false,
        single_use_plastics: "Often".to_string(),
        local_food: 20.0,
        diet_type: "Omnivore (regular meat consumption)".to_string(),
        meals_out: 6.0,
    }
}
