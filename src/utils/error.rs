use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarrError {
    #[error("api.{method}({request}): invalid status code {status}: {body}")]
    InvalidStatusCode {
        method: reqwest::Method,
        request: String,
        status: u16,
        body: String,
    },

    #[error("api.{method}({request}): request failed: {source}")]
    Transport {
        method: reqwest::Method,
        request: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("json.Marshal({request}): {source}")]
    Encode {
        request: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("api.{method}({request}): decoding response: {source}")]
    Decode {
        method: reqwest::Method,
        request: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP client setup failed: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StarrError {
    /// True when the remote service answered with a non-2xx status.
    pub fn is_invalid_status(&self) -> bool {
        matches!(self, StarrError::InvalidStatusCode { .. })
    }

    /// HTTP status of the response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StarrError::InvalidStatusCode { status, .. } => Some(*status),
            StarrError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StarrError::ConfigError { .. }
                | StarrError::MissingConfigError { .. }
                | StarrError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StarrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_status_message_carries_context() {
        let err = StarrError::InvalidStatusCode {
            method: reqwest::Method::GET,
            request: "v3/qualityProfile".to_string(),
            status: 404,
            body: r#"{"message": "NotFound"}"#.to_string(),
        };

        assert!(err.is_invalid_status());
        assert_eq!(err.status(), Some(404));
        let message = err.to_string();
        assert!(message.starts_with("api.GET(v3/qualityProfile)"));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_config_errors_are_not_status_errors() {
        let err = StarrError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_invalid_status());
        assert_eq!(err.status(), None);
    }
}
