pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{StdoutSink, TracingSink};
pub use config::GarageConfig;
pub use crate::core::{car::Car, commute::TwoWheeler, trip::TripReport};
pub use domain::model::{CarListing, DriveOutcome, Driver, Vehicle};
pub use domain::ports::{Commutable, OutputSink};
pub use utils::error::{GarageError, Result};
