use thiserror::Error;

/// 表單行內顯示的電話錯誤（提交時）
pub const PHONE_SUBMIT_MESSAGE: &str = "Please enter a valid Indian phone number (10 digits)";

/// 傳輸失敗時顯示的通用橫幅
pub const SUBMISSION_FAILED_BANNER: &str =
    "Sorry, there was an error sending your message. Please try again or call us directly.";

#[derive(Error, Debug)]
pub enum HomecareError {
    #[error("Invalid phone number: '{value}'")]
    InvalidPhone { value: String },

    #[error("Invalid email address: '{value}'")]
    InvalidEmail { value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Unknown option for {field}: '{value}'")]
    UnknownOption { field: String, value: String },

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Submission endpoint responded with HTTP {status}")]
    EndpointRejected { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Submission task failed: {message}")]
    TaskError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Submission,
    Transport,
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

impl HomecareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPhone { .. }
            | Self::InvalidEmail { .. }
            | Self::MissingField { .. }
            | Self::UnknownOption { .. } => ErrorCategory::Validation,
            Self::SubmissionInFlight => ErrorCategory::Submission,
            Self::EndpointRejected { .. } | Self::ApiError(_) => ErrorCategory::Transport,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::TaskError { .. } | Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Submission => ErrorSeverity::Low,
            ErrorCategory::Validation | ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 傳輸或端點錯誤（兩者對使用者不作區分）
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidPhone { .. } => PHONE_SUBMIT_MESSAGE.to_string(),
            Self::InvalidEmail { .. } => "Please enter a valid email address".to_string(),
            Self::MissingField { field } => format!("Please fill in the {} field", field),
            Self::UnknownOption { field, .. } => format!("Please select a valid {}", field),
            Self::SubmissionInFlight => "Your message is already being sent".to_string(),
            Self::EndpointRejected { .. } | Self::ApiError(_) => {
                SUBMISSION_FAILED_BANNER.to_string()
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            Self::TaskError { .. } | Self::IoError(_) => format!("Unexpected error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Correct the highlighted field and submit again",
            ErrorCategory::Submission => "Wait for the current submission to finish",
            ErrorCategory::Transport => {
                "Check your connection and resubmit, or call 9593388865 directly"
            }
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::System => "Retry the command; report the issue if it persists",
        }
    }
}

pub type Result<T> = std::result::Result<T, HomecareError>;
