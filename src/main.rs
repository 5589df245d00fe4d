use anyhow::Context;
use clap::Parser;
use powcalc::utils::{logger, validation::Validate};
use powcalc::{CliConfig, JobProvider, PowerEngine, PowerError, ResolvedConfig};

fn main() {
    let config = CliConfig::parse();

    // 日誌尚未初始化，載入錯誤直接輸出
    let resolved = match ResolvedConfig::load(config.clone()) {
        Ok(resolved) => resolved,
        Err(e) => {
            let path = config
                .config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            eprintln!("❌ Failed to load config file '{}'", path);
            exit_with(&e);
        }
    };

    // 初始化日誌
    let logger_ready = if config.log_json {
        logger::init_json_logger(config.verbose, resolved.log_level())
    } else {
        logger::init_cli_logger(config.verbose, resolved.log_level())
    };
    if let Err(e) = logger_ready {
        exit_with(&e);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&resolved) {
        report(&e);
    }
}

fn run(resolved: &ResolvedConfig) -> anyhow::Result<()> {
    resolved.validate().context("configuration validation failed")?;

    let job = resolved.job()?;
    let outcome = PowerEngine::new()
        .run(&job)
        .with_context(|| format!("computing {}", job))?;

    let rendered = outcome
        .render(resolved.output_format())
        .map_err(PowerError::from)?;
    println!("{}", rendered);
    Ok(())
}

fn exit_with(e: &PowerError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

/// User-facing messages go to stderr once; the full chain is logged at debug.
fn report(err: &anyhow::Error) -> ! {
    match err.downcast_ref::<PowerError>() {
        Some(e) => {
            tracing::debug!("{:#} (Severity: {:?})", err, e.severity());
            exit_with(e);
        }
        None => {
            eprintln!("❌ {:#}", err);
            std::process::exit(1);
        }
    }
}
