use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Extraction failed: {message}")]
    ExtractionError { message: String },

    #[error("Extraction job {job_id} did not complete after {attempts} status checks")]
    ExtractionTimeout { job_id: String, attempts: u32 },

    #[error("Agent '{agent}' has no tool named '{tool}'")]
    ToolNotFound { agent: String, tool: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Extraction,
    Orchestration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::ApiError(_) | ScoutError::ApiStatusError { .. } => ErrorCategory::Network,
            ScoutError::ConfigError { .. }
            | ScoutError::MissingConfigError { .. }
            | ScoutError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ScoutError::ExtractionError { .. }
            | ScoutError::ExtractionTimeout { .. }
            | ScoutError::SerializationError(_) => ErrorCategory::Extraction,
            ScoutError::ToolNotFound { .. } => ErrorCategory::Orchestration,
            ScoutError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Extraction => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Orchestration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoutError::ApiError(_) => "Check network connectivity and the Firecrawl API URL",
            ScoutError::ApiStatusError { status: 401, .. }
            | ScoutError::ApiStatusError { status: 403, .. } => {
                "Check that FIRECRAWL_API_KEY holds a valid key"
            }
            ScoutError::ApiStatusError { status: 429, .. } => {
                "The Firecrawl rate limit was hit, wait before running again"
            }
            ScoutError::ApiStatusError { .. } => "Inspect the response body for details",
            ScoutError::MissingConfigError { .. } => {
                "Set the value via command line flag, environment variable or .env file"
            }
            ScoutError::ConfigError { .. } | ScoutError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file"
            }
            ScoutError::ExtractionError { .. } => "Try a different page of the website",
            ScoutError::ExtractionTimeout { .. } => {
                "Increase --max-polls or --poll-interval-ms for slow sites"
            }
            ScoutError::SerializationError(_) => "The service returned an unexpected payload",
            ScoutError::ToolNotFound { .. } => "Register the tool on the agent before kickoff",
            ScoutError::IoError(_) => "Check file permissions and that stdin is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScoutError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            ScoutError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ScoutError::ApiStatusError { status, .. } => {
                format!("The extraction service answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
