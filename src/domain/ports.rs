use crate::domain::model::{OutputFormat, PowerJob};
use crate::utils::error::Result;

/// Anything that can describe a job: parsed flags, a job file, or both merged.
pub trait JobProvider {
    fn job(&self) -> Result<PowerJob>;
    fn output_format(&self) -> OutputFormat;
}
