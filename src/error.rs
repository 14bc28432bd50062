//! Error types shared by the preprocessor, the table builder and the writer.
//!
//! Every failure here is a caller-side contract violation or a resource
//! limit; nothing is retried or silently corrected.

/// Result type alias using [`KnapsackError`].
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// Top-level error returned by the public API.
#[derive(Debug, thiserror::Error)]
pub enum KnapsackError {
    /// The caller supplied data that violates an input precondition.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The requested computation does not fit the chosen limits.
    #[error("resource exhaustion: {0}")]
    ResourceExhaustion(#[from] ResourceExhaustion),

    /// Writing a rendered table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KnapsackError {
    /// True when re-invoking with corrected input is the only remedy.
    pub fn is_input_error(&self) -> bool {
        matches!(self, KnapsackError::InvalidInput(_))
    }
}

/// Input contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("{weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("item {index} has non-positive weight {weight}")]
    NonPositiveWeight { index: usize, weight: i64 },

    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// Item data that could not be parsed at all.
    #[error("malformed item data: {0}")]
    Malformed(String),
}

/// Limits hit while sizing or filling a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResourceExhaustion {
    #[error("table of {rows} x {width} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        width: usize,
        limit: usize,
    },

    #[error("capacity {0} is not addressable on this platform")]
    CapacityTooLarge(u64),

    #[error("value overflow in row {row} at capacity {capacity}")]
    ValueOverflow { row: usize, capacity: usize },

    #[error("could not allocate {cells} cells")]
    AllocationFailed { cells: usize },
}
