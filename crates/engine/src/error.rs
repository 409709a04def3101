//! Error types for the few fallible edges around the engine.
//!
//! Scoring and ranking are total and never return these. They surface when
//! text is parsed into typed values or when tunable weights are loaded.

use thiserror::Error;

/// Text that does not name a known [`Level`](crate::Level).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: '{0}'")]
pub struct ParseLevelError(pub String);

/// Rejected catalog scorer weights.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum WeightsError {
    /// A weight is below zero, which would let a matching signal lower a score.
    #[error("weight '{name}' must not be negative (got {value})")]
    Negative {
        /// Weight name as it appears in configuration.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A weight is NaN or infinite.
    #[error("weight '{name}' must be finite")]
    NonFinite {
        /// Weight name as it appears in configuration.
        name: &'static str,
    },

    /// An adjacent level fit would outscore an exact one.
    #[error("level_adjacent ({adjacent}) must not exceed level_exact ({exact})")]
    LevelOrdering { exact: f64, adjacent: f64 },
}
