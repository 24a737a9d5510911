use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Unknown key: {token}")]
    UnknownKey { token: String },

    #[error("Unknown form field: {id}")]
    UnknownField { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Calculation,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::DivisionByZero => ErrorCategory::Calculation,
            AppError::UnknownKey { .. } | AppError::UnknownField { .. } => ErrorCategory::Input,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::IoError(_) | AppError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Calculation => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::DivisionByZero => "Cannot divide by zero".to_string(),
            AppError::UnknownKey { token } => format!("'{}' is not a calculator key", token),
            AppError::UnknownField { id } => format!("'{}' is not a registration field", id),
            AppError::IoError(e) => format!("Could not read or write a file: {}", e),
            AppError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Calculation => "Clear the calculator and try a different operand",
            ErrorCategory::Input => {
                "Keys: 0-9 . + - * / % = AC ⌫ x²; fields: fullName email phone password confirmPassword"
            }
            ErrorCategory::Configuration => "Check the config file against the documented keys",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        let err = AppError::DivisionByZero;
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert_eq!(err.category(), ErrorCategory::Calculation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AppError::InvalidConfigValueError {
            field: "calculator.max_display_digits".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 20".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("max_display_digits"));
    }
}
