// File: crates/story-core/src/error.rs
// Summary: Recoverable error kinds for scene construction and updates.

use chrono::NaiveDate;

pub type ChartResult<T> = Result<T, ChartError>;

/// Everything here is local and recoverable: the worst user-visible outcome
/// is an empty or degraded chart region, never a panic out of library code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// The data window is empty, so no scale domain can be derived.
    #[error("empty data window: scale domain cannot be derived")]
    EmptyDataWindow,

    /// A highlight `from` date has no exactly matching dataset row.
    #[error("no dataset row matches highlight date {date}")]
    MissingHighlightMatch { date: NaiveDate },

    /// An update arrived while no scene is mounted; callers treat it as a no-op.
    #[error("chart operation invoked while unmounted")]
    UnmountedOperation,

    /// The dataset violates its ordering or value-range invariants.
    #[error("invalid dataset: {reason}")]
    InvalidData { reason: String },

    /// A marker command carried a date that is not `YYYYMMDD`.
    #[error("invalid marker date {raw:?}")]
    InvalidMarkerDate { raw: String },
}
