//! Impact scoring: questionnaire validation, category scores, physical
//! estimates, aggregation and improvement-area selection.

pub(crate) mod aggregate;
pub(crate) mod categories;
pub mod domain;
pub(crate) mod engine;
pub mod error;
pub(crate) mod estimates;
pub mod factors;
pub(crate) mod guard;
pub mod report;
pub mod router;
pub(crate) mod selector;

#[cfg(test)]
mod tests;

pub use aggregate::CategoryWeights;
pub use categories::CategoryScores;
pub use domain::{
    Category, ConservationMeasure, ConservationMeasures, Diet, Frequency, LifestyleQuestionnaire,
    RenewableEnergy, UserProfile, VehicleClass,
};
pub use engine::{Assessment, ImpactEngine, ImpactResult};
pub use error::ImpactError;
pub use estimates::PhysicalEstimates;
pub use factors::{EnvironmentalFactors, FactorDomain};
pub use guard::ProfileGuard;
pub use report::{
    format_carbon, format_percentage, format_water, CarbonSplit, ImpactReport,
    RecommendationBrief, RegionalComparison, ScoreBand,
};
pub use router::impact_router;
pub use selector::{areas_for_improvement, IMPROVEMENT_THRESHOLD};
