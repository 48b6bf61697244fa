use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid search pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Directory listing failed: {0}")]
    ListingError(#[from] glob::GlobError),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    #[error("Assembled match {expected} is not among the listed candidates")]
    InconsistentMatch { expected: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Matching,
    Runtime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl LocatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LocatorError::IoError(_) | LocatorError::ListingError(_) => ErrorCategory::Io,
            LocatorError::SerializationError(_) | LocatorError::TaskError(_) => {
                ErrorCategory::Runtime
            }
            LocatorError::ConfigValidationError { .. }
            | LocatorError::InvalidConfigValueError { .. }
            | LocatorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LocatorError::InvalidTimestamp { .. } | LocatorError::PatternError(_) => {
                ErrorCategory::Input
            }
            LocatorError::InconsistentMatch { .. } => ErrorCategory::Matching,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocatorError::ListingError(_) => ErrorSeverity::Medium,
            LocatorError::IoError(_)
            | LocatorError::SerializationError(_)
            | LocatorError::PatternError(_)
            | LocatorError::ConfigValidationError { .. }
            | LocatorError::InvalidConfigValueError { .. }
            | LocatorError::MissingConfigError { .. }
            | LocatorError::InvalidTimestamp { .. } => ErrorSeverity::High,
            LocatorError::TaskError(_) | LocatorError::InconsistentMatch { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LocatorError::IoError(e) => format!("File system operation failed: {}", e),
            LocatorError::ListingError(e) => format!("Could not read a candidate file: {}", e),
            LocatorError::InvalidTimestamp { input, .. } => {
                format!("'{}' is not a valid timestamp", input)
            }
            LocatorError::ConfigValidationError { field, .. }
            | LocatorError::InvalidConfigValueError { field, .. }
            | LocatorError::MissingConfigError { field } => {
                format!("Settings problem with '{}': {}", field, self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the source directory exists and is readable, and that the destination is writable",
            ErrorCategory::Configuration => "Check the [global] table of the settings file (source and destination)",
            ErrorCategory::Input => "Use the format dd.mm.YYYYThh:mm, for example 31.12.2022T23:59",
            ErrorCategory::Matching => "Re-run with --verbose and report the listed candidates",
            ErrorCategory::Runtime => "Retry the command; if it persists, run with --verbose",
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
