use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::session_form_error::SessionFormError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionDeskError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Transport failures: the backend was never reached or the body could not be read
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // The backend answered with a non-success status
    ApiError {
        operation: String,
        status_code: u16,
        message: String,
    },

    ParseError {
        content_type: String,
        reason: String,
    },

    // Local form validation, raised before any request is sent
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    AuthenticationError {
        reason: String,
    },
    PermissionDenied {
        capability: String,
    },
    NotFound {
        entity: String,
        id: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },
}

impl SessionDeskError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn api_error(operation: &str, status_code: u16, message: &str) -> Self {
        Self::ApiError {
            operation: operation.to_string(),
            status_code,
            message: message.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|u| u.to_string()),
            status_code: None,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    pub fn permission_denied(capability: impl fmt::Display) -> Self {
        Self::PermissionDenied {
            capability: capability.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ApiError { status_code, .. } => *status_code >= 500 || *status_code == 429,
            Self::ValidationError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::AuthenticationError { .. } => true,
            Self::PermissionDenied { .. } => false,
            Self::NotFound { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::ParseError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AuthenticationError { .. } => ErrorSeverity::High,
            Self::PermissionDenied { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ApiError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NotFound { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    /// The text shown in a view's error banner. For backend failures this is
    /// the server's own message, without decoration.
    pub fn banner_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            Self::NetworkError { reason, .. } => reason.clone(),
            Self::ValidationError { constraint, .. } => constraint.clone(),
            other => other.user_message(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the sessions backend is running and reachable");
                msg
            }
            Self::ApiError { operation, status_code, message } => {
                format!("{} failed (HTTP {}): {}", operation, status_code, message)
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::ValidationError { field, value, constraint } => {
                format!("Validation error for field '{}' (value '{}'): {}", field, value, constraint)
            }
            Self::AuthenticationError { reason } => {
                format!("Authentication failed: {}\n💡 Check your email and password", reason)
            }
            Self::PermissionDenied { capability } => {
                format!("Your roles do not allow: {}", capability)
            }
            Self::NotFound { entity, id } => {
                format!("{} '{}' not found", entity, id)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for SessionDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for SessionDeskError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

pub type SessionDeskResult<T> = Result<T, SessionDeskError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &SessionDeskError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<SessionFormError> for SessionDeskError {
    fn from(error: SessionFormError) -> Self {
        SessionDeskError::ValidationError {
            field: error.field().to_string(),
            value: error.value(),
            constraint: error.to_string(),
        }
    }
}

impl From<std::io::Error> for SessionDeskError {
    fn from(error: std::io::Error) -> Self {
        SessionDeskError::UserInputError {
            input: String::new(),
            expected: "readable terminal input".to_string(),
            suggestion: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionDeskError {
    fn from(error: serde_json::Error) -> Self {
        SessionDeskError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SessionDeskError {
    fn from(error: toml::de::Error) -> Self {
        SessionDeskError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for SessionDeskError {
    fn from(error: reqwest::Error) -> Self {
        SessionDeskError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
