use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("'{input}' is not a valid integer: {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Cannot check a non-finite value: {value}")]
    NotFinite { value: f64 },

    #[error("Value {value} is outside the supported integer range")]
    OutOfRange { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Mismatch for {input}: baseline={baseline}, candidate={candidate}")]
    Mismatch {
        input: i64,
        baseline: bool,
        candidate: bool,
    },

    #[error("Chat API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Chat API returned no message content")]
    EmptyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Correctness,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PrimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrimeError::InvalidInput { .. }
            | PrimeError::NotFinite { .. }
            | PrimeError::OutOfRange { .. } => ErrorCategory::Input,
            PrimeError::ConfigError { .. }
            | PrimeError::MissingConfig { .. }
            | PrimeError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            PrimeError::HttpError(_)
            | PrimeError::ApiError { .. }
            | PrimeError::EmptyResponse => ErrorCategory::Network,
            PrimeError::Mismatch { .. } => ErrorCategory::Correctness,
            PrimeError::IoError(_) | PrimeError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Correctness => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimeError::InvalidInput { input, .. } => {
                format!("'{}' is not a valid integer.", input)
            }
            PrimeError::MissingConfig { field } => format!(
                "{} not found. Please set it in your .env file or environment variables.",
                field
            ),
            PrimeError::HttpError(_) => "Could not reach the chat API.".to_string(),
            PrimeError::Mismatch {
                input,
                baseline,
                candidate,
            } => format!(
                "Implementations disagree on {}: baseline={}, candidate={}",
                input, baseline, candidate
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number such as 17 or -5.",
            ErrorCategory::Configuration => {
                "Check the command-line flags, the config file and the environment variables."
            }
            ErrorCategory::Network => {
                "Check the network connection, the API key and OPENAI_BASE_URL, then retry."
            }
            ErrorCategory::Correctness => {
                "One of the implementations is wrong; run the unit tests to find which."
            }
            ErrorCategory::System => "Check file permissions and available disk space.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_exit_codes() {
        let input = PrimeError::InvalidInput {
            input: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(input.category(), ErrorCategory::Input);
        assert_eq!(input.severity().exit_code(), 0);

        let mismatch = PrimeError::Mismatch {
            input: 9,
            baseline: false,
            candidate: true,
        };
        assert_eq!(mismatch.category(), ErrorCategory::Correctness);
        assert_eq!(mismatch.severity().exit_code(), 1);

        let io = PrimeError::from(std::io::Error::other("disk full"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.severity().exit_code(), 3);

        assert_eq!(PrimeError::EmptyResponse.severity().exit_code(), 2);
    }

    #[test]
    fn test_user_friendly_missing_key() {
        let err = PrimeError::MissingConfig {
            field: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "OPENAI_API_KEY not found. Please set it in your .env file or environment variables."
        );
    }
}
