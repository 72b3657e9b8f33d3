use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input is missing required columns: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::MissingRequiredFields { .. } | EtlError::MalformedInput { .. } => {
                ErrorSeverity::High
            }
            EtlError::CsvError(_) | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            EtlError::SerializationError(_) => ErrorSeverity::Medium,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingRequiredFields { fields } => format!(
                "The uploaded file is missing required columns: {}.",
                fields.join(", ")
            ),
            EtlError::MalformedInput { message } => {
                format!("The input file could not be read as delimited text: {}", message)
            }
            EtlError::IoError(e) => format!("Could not access a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingRequiredFields { .. } => {
                "Make sure the header row contains first_name and last_name"
            }
            EtlError::MalformedInput { .. } | EtlError::CsvError(_) => {
                "Check that the file is a UTF-8 CSV export and that the delimiter matches"
            }
            EtlError::IoError(_) => "Check that the paths exist and are writable",
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the log output"
            }
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
