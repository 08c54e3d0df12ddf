use crate::domain::model::{DriveOutcome, Vehicle, FUEL_PER_DRIVE};
use crate::domain::ports::{Commutable, OutputSink};

/// A vehicle wired to the sink its notifications go to.
pub struct Car<S: OutputSink> {
    vehicle: Vehicle,
    sink: S,
}

impl<S: OutputSink> Car<S> {
    pub fn new(vehicle: Vehicle, sink: S) -> Self {
        Self { vehicle, sink }
    }

    /// 行駛一次：輸出一行狀態訊息，除空油箱外消耗 1 公升
    pub fn drive(&mut self) -> DriveOutcome {
        let outcome = DriveOutcome::for_fuel_level(self.vehicle.fuel_liters);
        self.sink.write_line(outcome.message());

        if outcome.consumes_fuel() {
            self.vehicle.fuel_liters -= FUEL_PER_DRIVE;
        }

        tracing::debug!(
            outcome = ?outcome,
            fuel_liters = self.vehicle.fuel_liters,
            "drive"
        );
        outcome
    }

    /// 加油，不做任何檢查；負值會直接扣減油量
    pub fn add_fuel(&mut self, amount: f64) {
        if amount < 0.0 {
            tracing::warn!(
                amount,
                fuel_liters = self.vehicle.fuel_liters,
                "negative refuel amount reduces the fuel level"
            );
        }

        self.vehicle.fuel_liters += amount;
        tracing::debug!(amount, fuel_liters = self.vehicle.fuel_liters, "add_fuel");
    }

    /// 連續行駛 `drives` 次後再加油，回傳每次行駛的結果
    pub fn run_trip(&mut self, drives: u32, refuel_liters: f64) -> Vec<DriveOutcome> {
        let outcomes = (0..drives).map(|_| self.drive()).collect();
        self.add_fuel(refuel_liters);
        outcomes
    }

    pub fn current_fuel_level(&self) -> f64 {
        self.vehicle.fuel_liters
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (Vehicle, S) {
        (self.vehicle, self.sink)
    }
}

impl Commutable for Vehicle {
    fn tire_count(&self) -> u32 {
        self.wheel_count
    }
}
