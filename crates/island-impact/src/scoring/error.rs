use super::factors::FactorDomain;

/// Failure raised while validating a questionnaire or scoring a profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImpactError {
    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("unrecognised {field} option '{value}'")]
    UnknownKey { field: &'static str, value: String },
    #[error("lookup table {table} has no entry for '{key}'")]
    UnmappedKey { table: &'static str, key: String },
    #[error("environmental factor {domain}.{factor} is not configured")]
    MissingFactor { domain: FactorDomain, factor: String },
    #[error("category weights must be finite, non-negative and sum to 1.0 (got {sum})")]
    InvalidWeights { sum: f64 },
    #[error("factor table could not be loaded: {0}")]
    FactorTable(String),
}

impl ImpactError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied bad data, as opposed to a misconfigured engine.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImpactError::InvalidInput { .. } | ImpactError::UnknownKey { .. }
        )
    }
}
