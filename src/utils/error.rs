use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Malformed status date for account {account_id}: '{value}'")]
    MalformedStatusDate { account_id: i64, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CollateError {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CsvError(_) | Self::MalformedRecord { .. } | Self::MalformedStatusDate { .. } => {
                ErrorCategory::Input
            }
            Self::IoError(_) => ErrorCategory::Output,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CsvError(_) | Self::MalformedRecord { .. } | Self::MalformedStatusDate { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedRecord { line, reason } => {
                format!("Input file has a bad row on line {}: {}", line, reason)
            }
            Self::MalformedStatusDate { account_id, value } => format!(
                "Lookup service returned an unreadable date '{}' for account {}",
                value, account_id
            ),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::CsvError(e) => format!("Could not process the CSV data: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Fix the offending row (integer account id, MM/DD/YY date) and rerun"
            }
            ErrorCategory::Output => "Check that the input exists and the output directory is writable",
            ErrorCategory::Configuration => "Review the command line flags and the config file",
        }
    }
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CollateError>;
