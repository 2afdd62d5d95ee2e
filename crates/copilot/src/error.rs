use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopilotError {
    #[error("Generation API error: {message}")]
    Vendor {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Generation request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Profile store error: {0}")]
    Store(String),
}

pub type CopilotResult<T> = Result<T, CopilotError>;
