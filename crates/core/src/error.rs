use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown animation style: {0}")]
    UnknownStyle(String),

    #[error("Unknown video type: {0}")]
    UnknownVideoType(String),

    #[error("Unknown funnel stage: {0}")]
    UnknownFunnelStage(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoreError::UnknownStyle("claymation".to_string());
        assert!(error.to_string().contains("claymation"));
    }
}
