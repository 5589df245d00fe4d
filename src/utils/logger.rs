use crate::utils::error::{PowerError, Result};
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for a `[logging] level` value. A bare level such as
/// `debug` applies to this crate; anything containing `=` or `,` is used as
/// a full directive.
pub fn parse_filter(level: &str) -> Result<EnvFilter> {
    let level = level.trim();
    let invalid = |reason: String| PowerError::InvalidConfigValueError {
        field: "logging.level".to_string(),
        value: level.to_string(),
        reason,
    };

    if level.contains('=') || level.contains(',') {
        return EnvFilter::try_new(level)
            .map_err(|e| invalid(format!("Invalid tracing filter directive: {}", e)));
    }

    level
        .parse::<LevelFilter>()
        .map_err(|e| invalid(format!("Invalid log level: {}", e)))?;
    Ok(EnvFilter::new(format!("powcalc={}", level.to_ascii_lowercase())))
}

fn build_filter(verbose: bool, level: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    match (verbose, level) {
        (true, _) => Ok(EnvFilter::new("powcalc=debug,info")),
        (false, Some(level)) => parse_filter(level),
        (false, None) => Ok(EnvFilter::new("powcalc=warn")),
    }
}

/// Logs go to stderr; stdout carries only the computed value.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
    Ok(())
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
    Ok(())
}
