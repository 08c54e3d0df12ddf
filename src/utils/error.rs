use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl GarageError {
    /// 給終端使用者看的簡短說明
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not render vehicle state: {}", e),
            Self::ConfigParseError { .. } => "The configuration file is not valid TOML".to_string(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Setting '{}' is required", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Run again without --json",
            Self::ConfigParseError { .. } => "Fix the TOML syntax in the configuration file",
            Self::InvalidConfigValueError { .. } => "Correct the value in the configuration or on the command line",
            Self::MissingConfigError { .. } => "Add the missing setting to the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, GarageError>;
