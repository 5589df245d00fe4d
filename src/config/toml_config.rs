use crate::core::{JobProvider, OutputFormat, OverflowMode, PowerJob};
use crate::utils::error::{PowerError, Result};
use crate::utils::logger;
use crate::utils::validation::{validate_exponent, validate_modulus, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub job: JobConfig,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

/// `[job]` table. Every key is optional; missing keys fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobConfig {
    pub base: Option<i64>,
    pub exponent: Option<i64>,
    pub modulus: Option<u64>,
    pub overflow: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

const OVERFLOW_MODES: [&str; 2] = ["wrapping", "checked"];
const OUTPUT_FORMATS: [&str; 2] = ["plain", "json"];

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PowerError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BASE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn overflow_mode(&self) -> Option<OverflowMode> {
        self.job.overflow.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(|s| s.parse().ok())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(exponent) = self.job.exponent {
            validate_exponent("job.exponent", exponent)?;
        }
        validate_modulus("job.modulus", self.job.modulus)?;
        if let Some(overflow) = &self.job.overflow {
            validate_one_of("job.overflow", overflow, &OVERFLOW_MODES)?;
        }
        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }
        if let Some(level) = self.log_level() {
            logger::parse_filter(level)?;
        }
        Ok(())
    }
}

impl JobProvider for TomlConfig {
    fn job(&self) -> Result<PowerJob> {
        let exponent = match self.job.exponent {
            Some(e) => validate_exponent("job.exponent", e)?,
            None => PowerJob::DEFAULT_EXPONENT,
        };
        Ok(PowerJob {
            base: self.job.base.unwrap_or(PowerJob::DEFAULT_BASE),
            exponent,
            modulus: self.job.modulus,
            overflow: self.overflow_mode().unwrap_or_default(),
        })
    }

    fn output_format(&self) -> OutputFormat {
        self.format().unwrap_or_default()
    }
}
