use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("OpenAI API key not found. Create a .env file with: OPENAI_API_KEY=your_key_here")]
    MissingApiKey,

    #[error("Cannot scan directory '{path}': {reason}")]
    RootDirectory { path: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Failed to parse model response as JSON: {0}")]
    ParseFailure(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ScanError {
    /// Errors that abort the whole run. Everything else is caught at the
    /// per-file boundary and converted into a visible scan-error finding.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidArguments(_)
                | ScanError::MissingApiKey
                | ScanError::RootDirectory { .. }
                | ScanError::ConfigError(_)
                | ScanError::LlmClientError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(ScanError::MissingApiKey.is_fatal());
        assert!(ScanError::InvalidArguments("bad".to_string()).is_fatal());
        assert!(ScanError::RootDirectory {
            path: "/nope".to_string(),
            reason: "not found".to_string()
        }
        .is_fatal());

        assert!(!ScanError::EmptyResponse.is_fatal());
        assert!(!ScanError::ParseFailure("oops".to_string()).is_fatal());
        assert!(!ScanError::RateLimited("429".to_string()).is_fatal());
    }

    #[test]
    fn error_messages_are_user_facing() {
        let err = ScanError::MissingApiKey;
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        let err = ScanError::RootDirectory {
            path: "/tmp/missing".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("/tmp/missing"));
    }
}
