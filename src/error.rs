use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacaoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recipe rejected with {count} validation error(s)")]
    Rejected { count: usize },
}

impl CacaoError {
    /// Whether the user has already been shown the details of this error.
    pub fn is_reported(&self) -> bool {
        matches!(self, CacaoError::Rejected { .. })
    }
}

pub type Result<T> = std::result::Result<T, CacaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_already_reported() {
        assert!(CacaoError::Rejected { count: 2 }.is_reported());
        assert!(!CacaoError::InvalidInput("abc".to_string()).is_reported());
    }
}
