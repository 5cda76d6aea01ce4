use crate::errors::BlankinshipError;
use crate::ring::polynomial::DEFAULT_FIELD_WIDTH;

use serde::{Deserialize, Serialize};

/// Settings for an [`crate::solver::ExtendedGcdSolver`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Log the whole matrix at debug level after every reduction step.
    pub trace_steps: bool,
    /// Field width coefficients are right-justified to in traced matrices.
    pub field_width: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            trace_steps: false,
            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl SolverConfig {
    pub fn try_with(trace_steps: bool, field_width: usize) -> Result<Self, BlankinshipError> {
        if field_width == 0 {
            return Err(BlankinshipError::InvalidArgument(
                "Field width must be > 0".to_string(),
            ));
        }

        Ok(Self {
            trace_steps,
            field_width,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, BlankinshipError> {
        let config: SolverConfig = serde_json::from_str(json)?;
        Self::try_with(config.trace_steps, config.field_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!(!config.trace_steps);
        assert_eq!(config.field_width, 6);
    }

    #[test]
    fn test_config_validation() {
        assert!(SolverConfig::try_with(true, 4).is_ok());
        assert!(matches!(
            SolverConfig::try_with(true, 0),
            Err(BlankinshipError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_config_from_json() -> Result<(), BlankinshipError> {
        let config = SolverConfig::from_json(r#"{"trace_steps": true}"#)?;
        assert!(config.trace_steps);
        assert_eq!(config.field_width, DEFAULT_FIELD_WIDTH);

        assert!(SolverConfig::from_json(r#"{"field_width": 0}"#).is_err());
        assert!(SolverConfig::from_json("not json").is_err());
        Ok(())
    }
}
