use crate::domain::ports::{Commutable, OutputSink};

/// Tire and seat layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chassis {
    pub tire_count: u32,
    pub seat_count: u32,
}

/// 最基本的通勤工具，輪胎數由呼叫端設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commuter {
    tire_count: u32,
}

impl Commuter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tire_count(&mut self, tire_count: u32) {
        self.tire_count = tire_count;
    }
}

impl Commutable for Commuter {
    fn tire_count(&self) -> u32 {
        self.tire_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoWheeler {
    chassis: Chassis,
}

impl TwoWheeler {
    pub const TIRE_COUNT: u32 = 2;

    pub fn new() -> Self {
        Self {
            chassis: Chassis {
                tire_count: Self::TIRE_COUNT,
                seat_count: 5,
            },
        }
    }

    pub fn balance(&self, sink: &mut dyn OutputSink) {
        sink.write_line(&format!(
            "I can balance myself with {} tires",
            self.chassis.tire_count
        ));
        sink.write_line(&format!("Number of seats: {}", self.chassis.seat_count));
    }
}

impl Default for TwoWheeler {
    fn default() -> Self {
        Self::new()
    }
}

impl Commutable for TwoWheeler {
    fn tire_count(&self) -> u32 {
        self.chassis.tire_count
    }
}

/// 依序讓每台車通勤，回傳通勤的車輛數
pub fn commute_all(vehicles: &[&dyn Commutable], sink: &mut dyn OutputSink) -> usize {
    for vehicle in vehicles {
        vehicle.commute(sink);
    }
    vehicles.len()
}
