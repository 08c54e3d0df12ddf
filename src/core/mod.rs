pub mod car;
pub mod commute;
pub mod trip;

pub use crate::domain::model::{CarListing, DriveOutcome, Driver, Vehicle};
pub use crate::domain::ports::{Commutable, OutputSink};
pub use crate::utils::error::Result;
