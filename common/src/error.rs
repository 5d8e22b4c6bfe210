use crate::coords::Axis;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error caused by bad input. Nothing is computed once one of these is detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The unit code didn't match any known unit.
    #[error("unknown unit {0:?}, expected one of km, m, mi, nmi, ft, in, rad, deg")]
    InvalidUnit(String),
    /// A latitude or longitude was outside of its valid range, and normalization wasn't requested.
    #[error("{axis} {value} is out of range {}{}", .axis.bounds(), at(.index))]
    OutOfRange {
        axis: Axis,
        value: f64,
        /// Position in the batch input, if this came from one.
        index: Option<usize>,
    },
    /// Batch inputs that have to be paired up had different lengths.
    #[error("input lengths don't match: expected {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
}

fn at(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" at index {i}"))
}
