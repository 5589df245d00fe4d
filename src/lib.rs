pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::ResolvedConfig, CliConfig};

pub use config::toml_config::TomlConfig;
pub use crate::core::engine::PowerEngine;
pub use crate::core::power::{checked_power, mod_power, power};
pub use crate::core::{JobProvider, OutputFormat, OverflowMode, PowerJob, PowerOutcome};
pub use utils::error::{PowerError, Result};
