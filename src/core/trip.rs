use crate::core::car::Car;
use crate::domain::model::{DriveOutcome, Driver, Vehicle};
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub fn fuel_level_line(fuel_liters: f64) -> String {
    format!("Current fuel level: {:?} liters", fuel_liters)
}

pub fn min_age_line() -> String {
    format!("minAgeForDriving: {}", Driver::MIN_AGE_FOR_DRIVING)
}

/// 行駛、加油後把油量與最低駕駛年齡寫到同一個輸出，回傳最終油量
pub fn run_text_trip<S: OutputSink>(
    vehicle: Vehicle,
    drives: u32,
    refuel_liters: f64,
    sink: &mut S,
) -> f64 {
    let mut car = Car::new(vehicle, &mut *sink);
    car.run_trip(drives, refuel_liters);
    let fuel_liters = car.current_fuel_level();

    sink.write_line(&fuel_level_line(fuel_liters));
    sink.write_line(&min_age_line());
    fuel_liters
}

/// Machine-readable summary of one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    pub vehicle: Vehicle,
    pub driver: Option<Driver>,
    pub outcomes: Vec<DriveOutcome>,
    pub notifications: Vec<String>,
    pub current_fuel_level: f64,
    pub min_age_for_driving: u32,
}

impl TripReport {
    /// 通知訊息收進報告，不直接輸出
    pub fn record(vehicle: Vehicle, driver: Option<Driver>, drives: u32, refuel_liters: f64) -> Self {
        let mut car = Car::new(vehicle, Vec::new());
        let outcomes = car.run_trip(drives, refuel_liters);
        let current_fuel_level = car.current_fuel_level();
        let (vehicle, notifications) = car.into_parts();

        Self {
            vehicle,
            driver,
            outcomes,
            notifications,
            current_fuel_level,
            min_age_for_driving: Driver::MIN_AGE_FOR_DRIVING,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
