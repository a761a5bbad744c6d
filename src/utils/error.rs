use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Table operation failed: {message}")]
    TableError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Data,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RecordsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordsError::ConfigError { .. }
            | RecordsError::ConfigValidationError { .. }
            | RecordsError::InvalidConfigValueError { .. }
            | RecordsError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RecordsError::IoError(_) => ErrorCategory::Io,
            RecordsError::CsvError(_)
            | RecordsError::SerializationError(_)
            | RecordsError::ProcessingError { .. } => ErrorCategory::Data,
            RecordsError::TableError { .. } => ErrorCategory::Table,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            // 外部資料表錯誤通常可重試
            ErrorCategory::Table => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecordsError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file exists and the path is correct"
            }
            RecordsError::IoError(_) => "Check file permissions and available disk space",
            RecordsError::CsvError(_) => "Make sure the CSV input has a header row and consistent columns",
            RecordsError::SerializationError(_) => "Make sure the input is valid JSON",
            RecordsError::ProcessingError { .. } => {
                "Input must be a JSON object or an array of JSON objects"
            }
            RecordsError::ConfigError { .. } | RecordsError::ConfigValidationError { .. } => {
                "Fix the configuration file syntax and try again"
            }
            RecordsError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value"
            }
            RecordsError::MissingConfigError { .. } => {
                "Set the missing option or environment variable"
            }
            RecordsError::TableError { .. } => "Check table permissions and retry the request",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Data => format!("Input data could not be processed: {}", self),
            ErrorCategory::Table => format!("Item table is unavailable: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;
