use thiserror::Error;

/// Failures of a table generation run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Rejected before the search starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every candidate below the ceiling failed the qualification test.
    #[error("no node index in [1, {max_index}) satisfies the abscissa and weight thresholds")]
    NoSolutionFound { max_index: u64 },

    /// The optional search deadline elapsed before the scan completed.
    #[error("search exceeded {deadline_ms}ms deadline")]
    DeadlineExceeded { deadline_ms: u64 },
}

/// Failures of a [`TableSink`](crate::TableSink).
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encode(String),
}
