use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::{JobProvider, OutputFormat, OverflowMode, PowerJob};
use crate::utils::error::Result;
use crate::utils::validation::{validate_exponent, validate_modulus, Validate};

/// Command-line flags layered over an optional job file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    cli: CliConfig,
    file: Option<TomlConfig>,
}

impl ResolvedConfig {
    pub fn new(cli: CliConfig, file: Option<TomlConfig>) -> Self {
        Self { cli, file }
    }

    /// Loads the job file named by `--config`, if any.
    pub fn load(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("📁 Loading job file: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        Ok(Self::new(cli, file))
    }

    pub fn cli(&self) -> &CliConfig {
        &self.cli
    }

    pub fn log_level(&self) -> Option<&str> {
        self.file.as_ref().and_then(|f| f.log_level())
    }
}

impl Validate for ResolvedConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            file.validate()?;
        }
        if let Some(exponent) = self.cli.exponent {
            validate_exponent("--exponent", exponent)?;
        }
        validate_modulus("--modulus", self.cli.modulus)
    }
}

impl JobProvider for ResolvedConfig {
    fn job(&self) -> Result<PowerJob> {
        let mut job = match &self.file {
            Some(file) => file.job()?,
            None => PowerJob::default(),
        };

        if let Some(base) = self.cli.base {
            job.base = base;
        }
        if let Some(exponent) = self.cli.exponent {
            job.exponent = validate_exponent("--exponent", exponent)?;
        }
        if let Some(modulus) = self.cli.modulus {
            job.modulus = Some(modulus);
        }
        if self.cli.checked {
            job.overflow = OverflowMode::Checked;
        }
        Ok(job)
    }

    fn output_format(&self) -> OutputFormat {
        self.cli
            .format
            .or_else(|| self.file.as_ref().and_then(|f| f.format()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> CliConfig {
        let argv = std::iter::once("powcalc").chain(args.iter().copied());
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_arguments_gives_default_job() {
        let resolved = ResolvedConfig::new(parse(&[]), None);
        assert!(resolved.validate().is_ok());
        assert_eq!(resolved.job().unwrap(), PowerJob::new(2, 10));
        assert_eq!(resolved.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[job]\nbase = 3\nexponent = 4\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let resolved = ResolvedConfig::new(
            parse(&["--exponent", "5", "--format", "plain"]),
            Some(file),
        );

        let job = resolved.job().unwrap();
        assert_eq!(job.base, 3);
        assert_eq!(job.exponent, 5);
        assert_eq!(resolved.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_file_values_survive_without_flags() {
        let file =
            TomlConfig::from_toml_str("[job]\nmodulus = 13\noverflow = \"checked\"\n").unwrap();
        let resolved = ResolvedConfig::new(parse(&[]), Some(file));

        let job = resolved.job().unwrap();
        assert_eq!(job.modulus, Some(13));
        assert_eq!(job.overflow, OverflowMode::Checked);
    }

    #[test]
    fn test_negative_numbers_parse_and_exponent_is_rejected() {
        let resolved = ResolvedConfig::new(parse(&["--base", "-2", "--exponent", "-3"]), None);
        assert_eq!(resolved.cli().base, Some(-2));
        assert!(resolved.validate().is_err());
        assert!(resolved.job().is_err());
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let result = CliConfig::try_parse_from(["powcalc", "--format", "xml"]);
        assert!(result.is_err());
    }
}
