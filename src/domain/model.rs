use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Two's-complement wrap on overflow.
    #[default]
    Wrapping,
    /// Overflow is reported as an error.
    Checked,
}

impl FromStr for OverflowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrapping" => Ok(OverflowMode::Wrapping),
            "checked" => Ok(OverflowMode::Checked),
            other => Err(format!("unknown overflow mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerJob {
    pub base: i64,
    pub exponent: u32,
    pub modulus: Option<u64>,
    #[serde(default)]
    pub overflow: OverflowMode,
}

impl PowerJob {
    pub const DEFAULT_BASE: i64 = 2;
    pub const DEFAULT_EXPONENT: u32 = 10;

    pub fn new(base: i64, exponent: u32) -> Self {
        Self {
            base,
            exponent,
            modulus: None,
            overflow: OverflowMode::Wrapping,
        }
    }

    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = Some(modulus);
        self
    }

    pub fn checked(mut self) -> Self {
        self.overflow = OverflowMode::Checked;
        self
    }
}

impl Default for PowerJob {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_EXPONENT)
    }
}

impl fmt::Display for PowerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.base, self.exponent)?;
        if let Some(m) = self.modulus {
            write!(f, " mod {}", m)?;
        }
        Ok(())
    }
}

/// A finished job. `value` is wide enough for both the signed power and
/// the unsigned modular power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerOutcome {
    pub job: PowerJob,
    pub value: i128,
}

#[derive(Serialize)]
struct OutcomeRecord {
    base: i64,
    exponent: u32,
    modulus: Option<u64>,
    result: i128,
}

impl PowerOutcome {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Plain => Ok(self.value.to_string()),
            OutputFormat::Json => serde_json::to_string(&OutcomeRecord {
                base: self.job.base,
                exponent: self.job.exponent,
                modulus: self.job.modulus,
                result: self.value,
            }),
        }
    }
}
