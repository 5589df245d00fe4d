pub mod engine;
pub mod power;

pub use crate::domain::model::{OutputFormat, OverflowMode, PowerJob, PowerOutcome};
pub use crate::domain::ports::JobProvider;
pub use crate::utils::error::Result;
