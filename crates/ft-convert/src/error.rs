use std::path::PathBuf;

use ft_core::FtError;

/// Alias for `Result<T, ConvertError>`.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur during world-entity conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input table could not be read or is missing required columns.
    #[error(transparent)]
    Table(#[from] FtError),

    /// The output directory or a file under it could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        /// The failing path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
