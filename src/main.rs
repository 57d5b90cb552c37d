use baro_model::core::report;
use baro_model::utils::error::ErrorSeverity;
use baro_model::utils::{logger, validation::Validate};
use baro_model::{build_model, CliConfig};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting baro-model");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> baro_model::Result<()> {
    let (model, sweep) = build_model(config)?;
    tracing::info!(
        "Model has {} segments; evaluating {} target pressures",
        model.segments().len(),
        sweep.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pressure in sweep {
        tracing::debug!("Computing volumes at {} atm", pressure);
        let checkpoint = model.volumes_at_pressure(pressure, None)?;
        report::write_checkpoint(&mut out, &checkpoint, config.format)?;
    }

    tracing::info!("✅ Sweep completed");
    Ok(())
}
