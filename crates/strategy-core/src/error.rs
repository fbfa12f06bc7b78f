//! Error types shared by every strategy.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one budget guard.
///
/// Each guard gets a fresh id at construction so that nested recursive
/// strategies can tell their own budget exhaustion apart from an inner one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuardId(u64);

impl GuardId {
    /// Allocate a process-unique guard id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error type for a single draw.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    /// A guarded leaf strategy ran out of budget.
    ///
    /// Only the retry loop owning the guard acts on this; every other layer
    /// passes it through with `?`.
    #[error("Leaf budget of guard {0} exhausted")]
    LimitReached(GuardId),

    /// The context has no choices left
    #[error("Draw exceeded the allowance of {max_choices} choices")]
    Overrun { max_choices: usize },

    /// Strategy-specific failure
    #[error("Strategy rejected the draw: {0}")]
    Rejected(String),
}

/// Result of drawing from a strategy.
pub type DrawResult<T> = Result<T, DrawError>;

/// Error type for strategy validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A strategy argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The base of a recursive strategy is not a usable strategy
    #[error("Expected base to be a valid strategy but got {base}: {reason}")]
    InvalidBase {
        base: String,
        reason: Box<ConfigError>,
    },

    /// Extending the base of a recursive strategy did not produce a usable strategy
    #[error("Expected extend({base}) to be a valid strategy but got {extended}: {reason}")]
    InvalidExtension {
        base: String,
        extended: String,
        reason: Box<ConfigError>,
    },
}
