//! Errors returned by evaluation, sampling and control point edits.

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, BezierError>;

/// Errors that can occur while evaluating curves or editing their control points.
///
/// Every operation returning one of these leaves its input untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BezierError {
    /// The input can't describe what was asked for,
    /// e.g. a curve with a single control point or a sampling resolution below 2.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested edit would break the polygon's invariants.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A control point or segment was addressed which doesn't exist.
    #[error("index {index} out of range for {len} {what}")]
    IndexOutOfRange {
        /// The index which was requested
        index: usize,
        /// The number of valid indices
        len: usize,
        /// What was indexed ("control points" or "segments")
        what: &'static str,
    },
}
