//! Invariant validation hooks for towers and glasses.

use crate::tower_error::TowerError;

/// Structures that can check their own consistency.
pub trait DebugInvariants {
    /// Panic on the first violated invariant (debug builds or the
    /// `check-invariants` feature only).
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), TowerError>;
}

/// Turn a failed condition into [`TowerError::InvariantViolation`].
#[inline]
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), TowerError> {
    if cond {
        Ok(())
    } else {
        Err(TowerError::InvariantViolation(msg()))
    }
}

/// Re-validate a tower (or anything implementing [`DebugInvariants`]) at the
/// end of a mutating operation and panic naming that operation on the first
/// violation.
///
/// Compiles to nothing unless `debug_assertions` or the `check-invariants`
/// feature is on.
///
/// ```ignore
/// debug_invariants!(self, "Tower::fill");
/// ```
#[macro_export]
macro_rules! debug_invariants {
    ($target:expr, $operation:literal) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        {
            use $crate::DebugInvariants as _;
            if let Err(e) = $target.validate_invariants() {
                panic!("[invariants] {} left the tower inconsistent: {}", $operation, e);
            }
        }
    };
}
