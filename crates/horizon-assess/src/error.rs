//! Error types for the assessment views.

/// Result type alias for assessment operations.
pub type Result<T> = std::result::Result<T, AssessError>;

/// Errors that can occur while editing or presenting a result list.
#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    /// An operation referenced a result index at or past the end of the list.
    ///
    /// This is a contract violation on the caller's side. The operation that
    /// reported it has not changed any state.
    #[error("Result index {index} is out of range for a list of {len} results")]
    IndexOutOfRange { index: usize, len: usize },

    /// Results view settings could not be parsed.
    #[error("Invalid results view settings: {0}")]
    Config(#[from] toml::de::Error),
}

impl AssessError {
    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns `true` if this is an index-out-of-range error.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Fails with [`AssessError::IndexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(AssessError::index_out_of_range(index, len))
    }
}
