use std::path::PathBuf;

/// Alias for `Result<T, FtError>`.
pub type FtResult<T> = Result<T, FtError>;

/// Errors that can occur while validating or loading trajectory tables.
#[derive(Debug, thiserror::Error)]
pub enum FtError {
    /// A group row violates one of the documented constraints.
    #[error("invalid group {group_id}: {rule}")]
    InvalidGroup {
        /// The offending group's id.
        group_id: u32,
        /// The violated rule, in plain words.
        rule: String,
    },

    /// Two input rows share the same group id.
    #[error("duplicate group id: {0}")]
    DuplicateGroupId(u32),

    /// A required column is absent from an input table.
    #[error("missing required column \"{column}\" in {}", path.display())]
    MissingColumn {
        /// Name of the absent column.
        column: String,
        /// The table that was being read.
        path: PathBuf,
    },

    /// An input table could not be read or parsed.
    #[error("cannot read {}: {source}", path.display())]
    Table {
        /// The table that was being read or written.
        path: PathBuf,
        /// The underlying CSV or I/O error.
        #[source]
        source: csv::Error,
    },

    /// A file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Io {
        /// The failing path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
