pub mod toml_config;

pub use toml_config::GarageConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "small-garage")]
#[command(about = "Drive a car, watch its fuel, refuel it")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    /// Starting fuel in liters
    #[arg(long)]
    pub fuel: Option<f64>,

    #[arg(long)]
    pub max_speed: Option<f64>,

    /// How many times to drive before refueling
    #[arg(long)]
    pub drives: Option<u32>,

    /// Liters added after driving; negative values are accepted
    #[arg(long, allow_hyphen_values = true)]
    pub refuel: Option<f64>,

    #[arg(long, help = "Print the final vehicle state as JSON")]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔 (若有指定)，再以命令列參數覆蓋
    pub fn resolve(&self) -> Result<GarageConfig> {
        let mut config = match &self.config {
            Some(path) => GarageConfig::from_file(path)?,
            None => GarageConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut GarageConfig) {
        if let Some(color) = &self.color {
            config.vehicle.color = Some(color.clone());
        }
        if let Some(fuel) = self.fuel {
            config.vehicle.fuel_liters = Some(fuel);
        }
        if let Some(max_speed) = self.max_speed {
            config.vehicle.max_speed = Some(max_speed);
        }

        if self.drives.is_some() || self.refuel.is_some() {
            let trip = config.trip.get_or_insert_with(Default::default);
            if let Some(drives) = self.drives {
                trip.drives = Some(drives);
            }
            if let Some(refuel) = self.refuel {
                trip.refuel_liters = Some(refuel);
            }
        }
    }
}
