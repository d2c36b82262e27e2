use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{
    ConservationMeasures, Diet, Frequency, LifestyleQuestionnaire, RenewableEnergy, UserProfile,
    VehicleClass,
};
use crate::scoring::engine::ImpactEngine;
use crate::scoring::factors::EnvironmentalFactors;
use crate::scoring::guard::ProfileGuard;
use crate::scoring::router::impact_router;

/// Low-impact single-person household with no car use.
pub(super) fn questionnaire() -> LifestyleQuestionnaire {
    LifestyleQuestionnaire {
        car_usage: 0.0,
        car_type: "Electric vehicle".to_string(),
        public_transport_usage: 0.0,
        flight_hours: 0.0,
        household_size: 1,
        electricity_bill: 50.0,
        renewable_energy: "No".to_string(),
        air_conditioning: 0.0,
        shower_length: 5.0,
        shower_frequency: 7.0,
        water_conservation: vec!["None of the above".to_string()],
        recycling_habit: "Always".to_string(),
        composting: true,
        single_use_plastics: "Never".to_string(),
        local_food: 100.0,
        diet_type: "Vegan".to_string(),
        meals_out: 0.0,
    }
}

/// Commuter household in a mid-size gas car.
pub(super) fn commuter_profile() -> UserProfile {
    UserProfile {
        car_usage: 100.0,
        car_type: VehicleClass::MediumGas,
        public_transport_usage: 4.0,
        flight_hours: 6.0,
        household_size: 2,
        electricity_bill: 200.0,
        renewable_energy: RenewableEnergy::None,
        air_conditioning: 6.0,
        shower_length: 8.0,
        shower_frequency: 7.0,
        water_conservation: ConservationMeasures::default(),
        recycling_habit: Frequency::Sometimes,
        composting: false,
        single_use_plastics: Frequency::Sometimes,
        local_food: 30.0,
        diet_type: Diet::Omnivore,
        meals_out: 4.0,
    }
}

pub(super) fn profile() -> UserProfile {
    guard()
        .profile_from_questionnaire(questionnaire())
        .expect("fixture questionnaire is valid")
}

pub(super) fn guard() -> ProfileGuard {
    ProfileGuard
}

pub(super) fn factors() -> EnvironmentalFactors {
    EnvironmentalFactors::oahu()
}

pub(super) fn engine() -> ImpactEngine {
    ImpactEngine::new(factors())
}

pub(super) fn router_with_engine(engine: ImpactEngine) -> axum::Router {
    impact_router(Arc::new(engine))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
