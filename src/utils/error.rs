use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaroError {
    #[error("Invalid pressure {value}: absolute pressure must be positive")]
    InvalidPressure { value: f64 },

    #[error("Degenerate model: {volume_left:.2} mL left to distribute but no compressible segment can absorb it")]
    DegenerateModel { volume_left: f64 },

    #[error("Checkpoint is missing segment '{segment}'")]
    IncompleteCheckpoint { segment: String },

    #[error("Duplicate segment name '{name}'")]
    DuplicateSegment { name: String },

    #[error("Unknown segment '{name}'")]
    UnknownSegment { name: String },

    #[error("Invalid volume {value} for segment '{name}': volume must be positive")]
    InvalidVolume { name: String, value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Model file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, BaroError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Model,
    Computation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BaroError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BaroError::InvalidConfigValueError { .. } | BaroError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
            BaroError::DuplicateSegment { .. }
            | BaroError::UnknownSegment { .. }
            | BaroError::InvalidVolume { .. } => ErrorCategory::Model,
            BaroError::InvalidPressure { .. }
            | BaroError::DegenerateModel { .. }
            | BaroError::IncompleteCheckpoint { .. } => ErrorCategory::Computation,
            BaroError::IoError(_) | BaroError::TomlError(_) | BaroError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Model => ErrorSeverity::High,
            ErrorCategory::Computation => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BaroError::InvalidPressure { value } => {
                format!(
                    "Pressure {} is not physical; use a positive value in atmospheres",
                    value
                )
            }
            BaroError::DegenerateModel { .. } => {
                "The model has no compressible segment, so a pressure change has nowhere to put the volume difference".to_string()
            }
            BaroError::IncompleteCheckpoint { segment } => {
                format!("The starting checkpoint has no volume for segment '{}'", segment)
            }
            BaroError::DuplicateSegment { name } => {
                format!("Segment name '{}' is used more than once", name)
            }
            BaroError::UnknownSegment { name } => {
                format!("No segment named '{}' exists in the model", name)
            }
            BaroError::InvalidVolume { name, value } => {
                format!(
                    "Segment '{}' has volume {} mL; volumes must be positive",
                    name, value
                )
            }
            BaroError::TomlError(_) => "The model file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BaroError::InvalidPressure { .. } => {
                "Pressures are absolute: 1.0 is sea level, 2.0 is 10 m of seawater".to_string()
            }
            BaroError::DegenerateModel { .. } => {
                "Mark at least one segment as compressible, or only evaluate at the starting pressure".to_string()
            }
            BaroError::IncompleteCheckpoint { .. } => {
                "Pass a checkpoint produced by this model, or omit it to start from the initial volumes".to_string()
            }
            BaroError::DuplicateSegment { .. } => {
                "Give every segment a unique name in the model definition".to_string()
            }
            BaroError::UnknownSegment { .. } => {
                "Check the spelling against the segment names in the model definition".to_string()
            }
            BaroError::InvalidVolume { .. } => {
                "Set initial_volume to the segment's resting gas volume in mL".to_string()
            }
            BaroError::IoError(_) => {
                "Check that the model file path exists and is readable".to_string()
            }
            BaroError::TomlError(_) => {
                "Each [[segments]] entry needs name, initial_volume, and compressible".to_string()
            }
            BaroError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value passed for '{}'", field)
            }
            BaroError::MissingConfigError { field } => format!("Provide a value for '{}'", field),
            BaroError::SerializationError(_) => "Re-run with --format text".to_string(),
        }
    }
}
