use thiserror::Error;

#[derive(Error, Debug)]
pub enum PermsortError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

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

    #[error("Invalid input '{value}' for '{field}': {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Range [{left}, {right}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBoundsError {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("Digit sequence {digits} does not fit into u64")]
    DigitOverflowError { digits: String },
}

pub type Result<T> = std::result::Result<T, PermsortError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Arithmetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PermsortError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PermsortError::IoError(_) | PermsortError::SerializationError(_) => ErrorCategory::Io,
            PermsortError::TomlError(_)
            | PermsortError::ConfigError { .. }
            | PermsortError::ConfigValidationError { .. }
            | PermsortError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PermsortError::InvalidInputError { .. }
            | PermsortError::RangeOutOfBoundsError { .. } => ErrorCategory::Input,
            PermsortError::DigitOverflowError { .. } => ErrorCategory::Arithmetic,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Arithmetic | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PermsortError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            PermsortError::SerializationError(_) => {
                "Retry with --format text".to_string()
            }
            PermsortError::TomlError(_) | PermsortError::ConfigError { .. } => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            PermsortError::ConfigValidationError { field, .. }
            | PermsortError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            PermsortError::InvalidInputError { field, reason, .. } => {
                format!("Adjust '{}': {}", field, reason)
            }
            PermsortError::RangeOutOfBoundsError { len, .. } => {
                format!(
                    "Use a range whose right bound is below {}",
                    len
                )
            }
            PermsortError::DigitOverflowError { .. } => {
                "Use a number with fewer digits".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("輸入輸出失敗: {}", self),
            ErrorCategory::Configuration => format!("配置錯誤: {}", self),
            ErrorCategory::Input => format!("輸入無效: {}", self),
            ErrorCategory::Arithmetic => format!("數值溢位: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_is_input_category() {
        let err = PermsortError::RangeOutOfBoundsError {
            left: 0,
            right: 5,
            len: 3,
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("length 3"));
        assert!(err.recovery_suggestion().contains("below 3"));
    }

    #[test]
    fn test_overflow_error_severity() {
        let err = PermsortError::DigitOverflowError {
            digits: "99999999999999999999".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PermsortError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("missing"));
    }
}
