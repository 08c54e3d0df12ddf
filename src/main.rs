use clap::Parser;
use small_garage::core::trip::run_text_trip;
use small_garage::utils::{logger, validation::Validate};
use small_garage::{CliConfig, StdoutSink, TripReport};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.log_format, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let driver = config.driver()?;
    if let Some(driver) = &driver {
        tracing::info!(driver = %driver.name, "driver on board");
    }

    let vehicle = config.build_vehicle();
    if cli.json {
        let report = TripReport::record(vehicle, driver, config.drives(), config.refuel_liters());
        println!("{}", report.to_json()?);
    } else {
        run_text_trip(vehicle, config.drives(), config.refuel_liters(), &mut StdoutSink);
    }

    Ok(())
}
