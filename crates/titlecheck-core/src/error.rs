use thiserror::Error;

/// Errors that can occur during titlecheck core operations.
#[derive(Debug, Error)]
pub enum TitleCheckError {
    /// A label column held something other than 0 or 1.
    #[error("invalid label {0}: expected 0 (fake) or 1 (real)")]
    InvalidLabel(u8),

    /// The input corpus contained no rows.
    #[error("dataset is empty: {path}")]
    EmptyDataset {
        /// Path of the offending file.
        path: String,
    },

    /// The requested test fraction is outside `[0, 1)`.
    #[error("invalid test ratio {0}: expected a value in [0, 1)")]
    InvalidSplitRatio(f64),

    /// A tokenizer pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// Reading or writing a CSV file failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for titlecheck core operations.
pub type Result<T> = std::result::Result<T, TitleCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TitleCheckError::InvalidLabel(7);
        assert_eq!(err.to_string(), "invalid label 7: expected 0 (fake) or 1 (real)");

        let err = TitleCheckError::EmptyDataset {
            path: "titles.csv".into(),
        };
        assert!(err.to_string().contains("titles.csv"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TitleCheckError>();
    }
}
