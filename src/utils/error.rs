use thiserror::Error;

#[derive(Error, Debug)]
pub enum Site24x7Error {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlWriteError(#[from] toml::ser::Error),

    #[error("Authentication failed: {message}")]
    AuthenticationError { message: String },

    #[error("{message}")]
    NotFoundError { message: String },

    #[error("{message}")]
    ConflictError { message: String },

    #[error("API error (status {status}, code {code}): {message}")]
    ApiError {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("Unable to parse response data in {context}: {message}")]
    ResponseParseError { context: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid value for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Prompt failed: {message}")]
    PromptError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    Api,
    NotFound,
    Conflict,
    Validation,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl Site24x7Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Site24x7Error::NotFoundError {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Site24x7Error::ConflictError {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Site24x7Error::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Site24x7Error::HttpError(_) => ErrorCategory::Network,
            Site24x7Error::IoError(_) => ErrorCategory::Io,
            Site24x7Error::SerializationError(_)
            | Site24x7Error::ResponseParseError { .. } => ErrorCategory::Serialization,
            Site24x7Error::TomlParseError(_)
            | Site24x7Error::TomlWriteError(_)
            | Site24x7Error::ConfigError { .. }
            | Site24x7Error::MissingConfigError { .. }
            | Site24x7Error::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Site24x7Error::AuthenticationError { .. } => ErrorCategory::Authentication,
            Site24x7Error::NotFoundError { .. } => ErrorCategory::NotFound,
            Site24x7Error::ConflictError { .. } => ErrorCategory::Conflict,
            Site24x7Error::ApiError { .. } => ErrorCategory::Api,
            Site24x7Error::ValidationError { .. } | Site24x7Error::PromptError { .. } => {
                ErrorCategory::Validation
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Conflict => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Authentication
            | ErrorCategory::Api
            | ErrorCategory::Validation
            | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Site24x7Error::HttpError(e) if e.is_timeout() => {
                "The request to Site24x7 timed out".to_string()
            }
            Site24x7Error::HttpError(e) if e.is_connect() => {
                "Unable to connect to Site24x7".to_string()
            }
            Site24x7Error::MissingConfigError { field } => {
                format!("No value configured for {}", field)
            }
            Site24x7Error::ApiError { message, .. } => format!("Site24x7 rejected the request: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the configured API base URL",
            ErrorCategory::Authentication => {
                "Run `site24x7 config --refresh-token` with a fresh grant token"
            }
            ErrorCategory::Configuration => {
                "Run `site24x7 config` or review the config file and AUTH_*/API_* environment variables"
            }
            ErrorCategory::Validation => "Run the command with --help to see the accepted values",
            ErrorCategory::Api => "Re-run with -vv to inspect the request and response",
            ErrorCategory::Serialization => "Re-run with -vv to inspect the raw response body",
            ErrorCategory::Io => "Check file permissions for the config and token cache files",
            ErrorCategory::NotFound | ErrorCategory::Conflict => "No action required",
        }
    }
}

pub type Result<T> = std::result::Result<T, Site24x7Error>;
