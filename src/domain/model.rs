use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_WHEEL_COUNT: u32 = 4;
pub const DEFAULT_COLOR: &str = "Black";
pub const DEFAULT_MAX_SPEED: f64 = 120.0;
pub const DEFAULT_FUEL_LITERS: f64 = 50.0;
pub const DEFAULT_SEAT_COUNT: u32 = 5;

/// 低於此油量 (公升) 時，行駛會發出低油量警告
pub const LOW_FUEL_THRESHOLD: f64 = 5.0;

/// 每次行駛消耗的油量 (公升)
pub const FUEL_PER_DRIVE: f64 = 1.0;

/// 可行駛的車輛狀態。欄位皆為公開，可直接建構後再逐一指定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub wheel_count: u32,
    pub color: String,
    pub max_speed: f64,
    pub fuel_liters: f64,
    pub seat_count: u32,
}

impl Vehicle {
    /// 指定顏色，其餘欄位採預設值
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            wheel_count: DEFAULT_WHEEL_COUNT,
            color: color.into(),
            max_speed: DEFAULT_MAX_SPEED,
            fuel_liters: DEFAULT_FUEL_LITERS,
            seat_count: DEFAULT_SEAT_COUNT,
        }
    }

    /// 所有欄位歸零，由呼叫端自行指定
    pub fn bare() -> Self {
        Self {
            wheel_count: 0,
            color: String::new(),
            max_speed: 0.0,
            fuel_liters: 0.0,
            seat_count: 0,
        }
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::with_color(DEFAULT_COLOR)
    }
}

/// Result of a single drive request. An empty tank is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveOutcome {
    EmptyTank,
    LowFuel,
    Driving,
}

impl DriveOutcome {
    /// 依目前油量決定行駛結果，優先順序: 空油箱 > 低油量 > 正常行駛
    pub fn for_fuel_level(fuel_liters: f64) -> Self {
        if fuel_liters == 0.0 {
            Self::EmptyTank
        } else if fuel_liters < LOW_FUEL_THRESHOLD {
            Self::LowFuel
        } else {
            Self::Driving
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyTank => "Cannot drive, fuel tank is empty.",
            Self::LowFuel => "Warning: Low fuel level. Please refuel soon.",
            Self::Driving => "Car is driving",
        }
    }

    pub fn consumes_fuel(&self) -> bool {
        !matches!(self, Self::EmptyTank)
    }
}

impl fmt::Display for DriveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub date_of_license: Option<NaiveDate>,
}

impl Driver {
    pub const MIN_AGE_FOR_DRIVING: u32 = 18;

    pub fn new(name: impl Into<String>, date_of_license: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            date_of_license,
        }
    }
}

/// 車輛型錄資料，僅供顯示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    pub wheel_count: u32,
    pub door_count: u32,
    pub max_speed: u32,
    pub name: String,
    pub model: String,
    pub company: String,
}

impl fmt::Display for CarListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car{{noOfWheels={}, noOfDoors={}, maxSpeed={}, name='{}', model='{}', company='{}'}}",
            self.wheel_count, self.door_count, self.max_speed, self.name, self.model, self.company
        )
    }
}
