use crate::core::power::{checked_power, mod_power, power};
use crate::domain::model::{OverflowMode, PowerJob, PowerOutcome};
use crate::utils::error::{PowerError, Result};
use crate::utils::validation::{validate_modulus, Validate};

impl Validate for PowerJob {
    fn validate(&self) -> Result<()> {
        validate_modulus("modulus", self.modulus)
    }
}

#[derive(Debug, Default)]
pub struct PowerEngine;

impl PowerEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, job: &PowerJob) -> Result<PowerOutcome> {
        tracing::debug!("Running job: {:?}", job);
        job.validate()?;

        let value = match (job.modulus, job.overflow) {
            (Some(m), _) => i128::from(
                mod_power(job.base, job.exponent, m).ok_or_else(|| PowerError::ZeroModulus {
                    field: "modulus".to_string(),
                })?,
            ),
            (None, OverflowMode::Wrapping) => i128::from(power(job.base, job.exponent)),
            (None, OverflowMode::Checked) => i128::from(
                checked_power(job.base, job.exponent).ok_or(PowerError::Overflow {
                    base: job.base,
                    exponent: job.exponent,
                })?,
            ),
        };

        tracing::info!("✅ {} = {}", job, value);
        Ok(PowerOutcome { job: *job, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job_computes_1024() {
        let outcome = PowerEngine::new().run(&PowerJob::default()).unwrap();
        assert_eq!(outcome.value, 1024);
        assert_eq!(outcome.job, PowerJob::new(2, 10));
    }

    #[test]
    fn test_wrapping_mode_does_not_fail() {
        let outcome = PowerEngine::new().run(&PowerJob::new(2, 64)).unwrap();
        assert_eq!(outcome.value, 0);
    }

    #[test]
    fn test_checked_mode_reports_overflow() {
        let err = PowerEngine::new()
            .run(&PowerJob::new(2, 64).checked())
            .unwrap_err();
        assert!(matches!(
            err,
            PowerError::Overflow {
                base: 2,
                exponent: 64
            }
        ));
    }

    #[test]
    fn test_modulus_takes_priority() {
        let outcome = PowerEngine::new()
            .run(&PowerJob::new(2, 64).checked().with_modulus(1_000_000_007))
            .unwrap();
        assert_eq!(outcome.value, 582_344_008);
    }

    #[test]
    fn test_zero_modulus_is_rejected() {
        let err = PowerEngine::new()
            .run(&PowerJob::new(2, 10).with_modulus(0))
            .unwrap_err();
        assert!(matches!(err, PowerError::ZeroModulus { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
