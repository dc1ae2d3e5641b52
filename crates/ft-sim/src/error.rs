use ft_core::FtError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur when building or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The group batch failed validation; nothing was generated.
    #[error(transparent)]
    InvalidBatch(#[from] FtError),

    /// The roster exceeds the supported group count.
    #[error("at most {max} groups allowed, got {count}")]
    TooManyGroups {
        /// Number of groups in the rejected roster.
        count: usize,
        /// The supported maximum.
        max: usize,
    },
}
