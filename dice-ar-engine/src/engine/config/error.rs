use bevy::asset::AssetLoadError;

/// Why a placement config could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    LoadFailed(String),
    EmptyRollRange { axis: char, min: u32, max: u32 },
    NotFinite { field: &'static str },
    Negative { field: &'static str, value: f32 },
    NonPositive { field: &'static str, value: f32 },
}

impl From<&AssetLoadError> for ConfigError {
    fn from(err: &AssetLoadError) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadFailed(e) => write!(f, "Failed to load placement config: {}", e),
            ConfigError::EmptyRollRange { axis, min, max } => {
                write!(f, "Roll range for {} axis is empty ({}..={})", axis, min, max)
            }
            ConfigError::NotFinite { field } => write!(f, "{} must be a finite number", field),
            ConfigError::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field, value)
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be greater than zero (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
