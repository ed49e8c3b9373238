use thiserror::Error;

/// Coarse classification of [`AlertQueryError`], handy for matching without caring
/// about the carried details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    HttpStatus,
    MalformedResponse
}

/// Reasons a raw region code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("State abbreviation is required.")]
    Missing,

    #[error("Please enter a valid 2-letter state abbreviation (e.g., \"NY\").")]
    InvalidFormat { normalized: String }
}

/// Everything that can end an interaction cycle early. The `Display` output is the
/// exact text shown in the error region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertQueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to fetch alerts: {reason}")]
    Transport { reason: String },

    #[error("Request failed: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("Failed to parse alert response: {reason}")]
    MalformedResponse { reason: String }
}

impl AlertQueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlertQueryError::Validation(_) => ErrorKind::Validation,
            AlertQueryError::Transport { .. } => ErrorKind::Transport,
            AlertQueryError::HttpStatus { .. } => ErrorKind::HttpStatus,
            AlertQueryError::MalformedResponse { .. } => ErrorKind::MalformedResponse
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for AlertQueryError {
    fn from(err: reqwest::Error) -> Self {
        AlertQueryError::Transport { reason: err.to_string() }
    }
}

impl From<serde_json::Error> for AlertQueryError {
    fn from(err: serde_json::Error) -> Self {
        AlertQueryError::MalformedResponse { reason: err.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to deserialize {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_matches_display_format() {
        let err = AlertQueryError::HttpStatus { status: 503, status_text: "Service Unavailable".to_string() };

        assert_eq!(err.message(), "Request failed: 503 Service Unavailable");
        assert_eq!(err.kind(), ErrorKind::HttpStatus);
    }

    #[test]
    fn validation_errors_keep_their_own_text() {
        let err: AlertQueryError = ValidationError::Missing.into();

        assert_eq!(err.message(), "State abbreviation is required.");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let err: AlertQueryError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();

        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert!(err.message().starts_with("Failed to parse alert response: "));
    }
}
