use thiserror::Error;
use titlecheck_core::TitleCheckError;

/// Errors raised while building a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The search endpoint answered with a non-success status.
    #[error("search request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Transport failure or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading or writing corpus files failed.
    #[error(transparent)]
    Core(#[from] TitleCheckError),
}

pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_code() {
        let err = CorpusError::Status { status: 503 };
        assert_eq!(err.to_string(), "search request failed with status 503");
    }
}
