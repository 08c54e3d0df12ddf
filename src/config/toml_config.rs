use crate::domain::model::{Driver, Vehicle};
use crate::utils::error::{GarageError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive_number,
    validate_required_field, Validate,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DRIVES: u32 = 1;
pub const DEFAULT_REFUEL_LITERS: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarageConfig {
    #[serde(default)]
    pub vehicle: VehicleConfig,
    pub driver: Option<DriverConfig>,
    pub trip: Option<TripConfig>,
}

/// 未指定的欄位沿用預設車輛設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub color: Option<String>,
    pub wheel_count: Option<u32>,
    pub max_speed: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub seat_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    pub name: Option<String>,
    /// ISO 日期字串，例如 "2020-01-15"
    pub date_of_license: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    pub drives: Option<u32>,
    pub refuel_liters: Option<f64>,
}

impl GarageConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GarageError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${GARAGE_COLOR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GarageError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 以預設車輛為基礎，套用設定檔中的欄位
    pub fn build_vehicle(&self) -> Vehicle {
        let section = &self.vehicle;
        let mut vehicle = match &section.color {
            Some(color) => Vehicle::with_color(color.clone()),
            None => Vehicle::default(),
        };

        if let Some(wheel_count) = section.wheel_count {
            vehicle.wheel_count = wheel_count;
        }
        if let Some(max_speed) = section.max_speed {
            vehicle.max_speed = max_speed;
        }
        if let Some(fuel_liters) = section.fuel_liters {
            vehicle.fuel_liters = fuel_liters;
        }
        if let Some(seat_count) = section.seat_count {
            vehicle.seat_count = seat_count;
        }

        vehicle
    }

    pub fn driver(&self) -> Result<Option<Driver>> {
        match &self.driver {
            Some(section) => {
                let name = validate_required_field("driver.name", &section.name)?;
                Ok(Some(Driver::new(name.clone(), section.date_of_license)))
            }
            None => Ok(None),
        }
    }

    pub fn drives(&self) -> u32 {
        self.trip
            .as_ref()
            .and_then(|t| t.drives)
            .unwrap_or(DEFAULT_DRIVES)
    }

    pub fn refuel_liters(&self) -> f64 {
        self.trip
            .as_ref()
            .and_then(|t| t.refuel_liters)
            .unwrap_or(DEFAULT_REFUEL_LITERS)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let section = &self.vehicle;

        if let Some(color) = &section.color {
            validate_non_empty_string("vehicle.color", color)?;
        }
        if let Some(wheel_count) = section.wheel_count {
            validate_positive_number("vehicle.wheel_count", wheel_count, 1)?;
        }
        if let Some(seat_count) = section.seat_count {
            validate_positive_number("vehicle.seat_count", seat_count, 1)?;
        }
        if let Some(max_speed) = section.max_speed {
            validate_non_negative("vehicle.max_speed", max_speed)?;
        }
        if let Some(fuel_liters) = section.fuel_liters {
            validate_non_negative("vehicle.fuel_liters", fuel_liters)?;
        }

        // 加油量可為負值，只要求是有限數字
        let refuel = self.refuel_liters();
        if !refuel.is_finite() {
            return Err(GarageError::InvalidConfigValueError {
                field: "trip.refuel_liters".to_string(),
                value: refuel.to_string(),
                reason: "Value must be a finite number".to_string(),
            });
        }

        if let Some(driver) = &self.driver {
            let name = validate_required_field("driver.name", &driver.name)?;
            validate_non_empty_string("driver.name", name)?;
        }

        Ok(())
    }
}

impl Validate for GarageConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[vehicle]
color = "Red"
max_speed = 200.0
fuel_liters = 50.0
wheel_count = 4
seat_count = 5

[driver]
name = "Raja"
date_of_license = "2020-01-15"

[trip]
drives = 3
refuel_liters = 12.5
"#;

        let config = GarageConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let vehicle = config.build_vehicle();
        assert_eq!(vehicle.color, "Red");
        assert_eq!(vehicle.max_speed, 200.0);
        assert_eq!(vehicle.fuel_liters, 50.0);

        let driver = config.driver().unwrap().unwrap();
        assert_eq!(driver.name, "Raja");
        assert_eq!(driver.date_of_license, NaiveDate::from_ymd_opt(2020, 1, 15));

        assert_eq!(config.drives(), 3);
        assert_eq!(config.refuel_liters(), 12.5);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GarageConfig::from_toml_str("").unwrap();

        assert_eq!(config.build_vehicle(), Vehicle::default());
        assert!(config.driver().unwrap().is_none());
        assert_eq!(config.drives(), DEFAULT_DRIVES);
        assert_eq!(config.refuel_liters(), DEFAULT_REFUEL_LITERS);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_GARAGE_TEST_COLOR", "Blue");

        let config = GarageConfig::from_toml_str(
            r#"
[vehicle]
color = "${SMALL_GARAGE_TEST_COLOR}"
"#,
        )
        .unwrap();
        assert_eq!(config.build_vehicle().color, "Blue");

        std::env::remove_var("SMALL_GARAGE_TEST_COLOR");
    }

    #[test]
    fn test_unknown_env_var_is_left_as_is() {
        let config = GarageConfig::from_toml_str(
            r#"
[vehicle]
color = "${SMALL_GARAGE_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.vehicle.color.as_deref(),
            Some("${SMALL_GARAGE_TEST_UNSET_VAR}")
        );
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            "[vehicle]\ncolor = \"  \"",
            "[vehicle]\nwheel_count = 0",
            "[vehicle]\nseat_count = 0",
            "[vehicle]\nfuel_liters = -1.0",
            "[vehicle]\nmax_speed = -10.0",
            "[driver]\ndate_of_license = \"2020-01-15\"",
        ];

        for content in invalid {
            let config = GarageConfig::from_toml_str(content).unwrap();
            assert!(config.validate().is_err(), "expected invalid: {}", content);
        }
    }

    #[test]
    fn test_negative_refuel_is_allowed() {
        let config = GarageConfig::from_toml_str("[trip]\nrefuel_liters = -5.0").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.refuel_liters(), -5.0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = GarageConfig::from_toml_str("[vehicle\ncolor = ").unwrap_err();
        assert!(matches!(err, GarageError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[vehicle]\ncolor = \"Green\"\nfuel_liters = 3.0\n")
            .unwrap();

        let config = GarageConfig::from_file(temp_file.path()).unwrap();
        let vehicle = config.build_vehicle();
        assert_eq!(vehicle.color, "Green");
        assert_eq!(vehicle.fuel_liters, 3.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GarageConfig::from_file("/definitely/not/here/garage.toml").unwrap_err();
        assert!(matches!(err, GarageError::IoError(_)));
    }
}
