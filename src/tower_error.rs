//! TowerError: Unified error type for glass-tower public APIs
//!
//! Every fallible operation in this crate validates its input before
//! mutating anything, so an `Err` always leaves the tower (or glass)
//! exactly as it was.

use crate::topology::position::Position;
use thiserror::Error;

/// Unified error type for glass and tower operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TowerError {
    /// A capacity, quantity or pour volume outside its allowed range.
    #[error("Invalid value for `{field}`: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A parent/child query targeted a glass that is not a node of this tower.
    #[error("Glass `{0}` is not part of this tower")]
    InvalidArgument(String),
    /// A glass with the same uid is already in the tower.
    #[error("Duplicate glass uid `{0}`")]
    DuplicateGlass(String),
    /// The glass already carries a position and cannot be placed again.
    #[error("Glass `{uid}` is already placed at {position}")]
    AlreadyPlaced { uid: String, position: Position },
    /// Reported by [`DebugInvariants::validate_invariants`](crate::DebugInvariants).
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl TowerError {
    pub(crate) fn invalid_value(field: &'static str, value: f64, reason: &'static str) -> Self {
        TowerError::InvalidValue {
            field,
            value,
            reason,
        }
    }
}

/// Reject NaN, infinities and negative numbers.
pub(crate) fn check_volume(field: &'static str, value: f64) -> Result<f64, TowerError> {
    if !value.is_finite() {
        return Err(TowerError::invalid_value(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(TowerError::invalid_value(field, value, "must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_volume_accepts_zero_and_positive() {
        assert_eq!(check_volume("amount", 0.0), Ok(0.0));
        assert_eq!(check_volume("amount", 12.5), Ok(12.5));
    }

    #[test]
    fn check_volume_rejects_negative_and_non_finite() {
        assert!(matches!(
            check_volume("amount", -1.0),
            Err(TowerError::InvalidValue { field: "amount", .. })
        ));
        assert!(check_volume("amount", f64::NAN).is_err());
        assert!(check_volume("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn messages_name_the_field() {
        let e = TowerError::invalid_value("capacity", -100.0, "must not be negative");
        assert_eq!(
            e.to_string(),
            "Invalid value for `capacity`: -100 (must not be negative)"
        );
    }
}
