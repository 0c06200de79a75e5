//! Error type shared by every entity.
//!
//! All checks run before any field is touched, so an `Err` always means the
//! receiver (and any other entity passed in) is exactly as it was.

use std::fmt;

use crate::num::Num;
use crate::point::Axis;

/// Failure of a validated construction or mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityError {
    /// A coordinate that is not a finite number (or text that is not a number).
    InvalidCoordinate { axis: Axis, input: String },
    /// A drive needs more fuel than the tank holds right now.
    OutOfFuel { needed: f64, available: f64 },
    /// A refill asks for more fuel than the tank can hold.
    OverCapacity { requested: f64, capacity: f64 },
    /// The unit is at zero hit points, or the damage would take it below zero.
    UnitDead { name: String },
    /// Fuel, damage or healing amount that is negative or not finite.
    InvalidAmount { value: f64 },
    /// Constructor or generator parameters out of range.
    InvalidParams { reason: String },
}

/// Discriminant of [`EntityError`] for callers that only branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCoordinate,
    OutOfFuel,
    OverCapacity,
    UnitDead,
    InvalidAmount,
    InvalidParams,
}

impl EntityError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn dead(name: &str) -> Self {
        Self::UnitDead {
            name: name.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCoordinate { .. } => ErrorKind::InvalidCoordinate,
            Self::OutOfFuel { .. } => ErrorKind::OutOfFuel,
            Self::OverCapacity { .. } => ErrorKind::OverCapacity,
            Self::UnitDead { .. } => ErrorKind::UnitDead,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::InvalidParams { .. } => ErrorKind::InvalidParams,
        }
    }
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { axis, input } => {
                write!(f, "invalid {axis} coordinate {input:?}: expected a finite number")
            }
            Self::OutOfFuel { needed, available } => write!(
                f,
                "out of fuel: need {} but only {} left",
                Num(*needed),
                Num(*available)
            ),
            Self::OverCapacity {
                requested,
                capacity,
            } => write!(
                f,
                "too much fuel: {} exceeds tank capacity {}",
                Num(*requested),
                Num(*capacity)
            ),
            Self::UnitDead { name } => write!(f, "unit {name} is dead"),
            Self::InvalidAmount { value } => {
                write!(f, "invalid amount {}: expected a finite value >= 0", Num(*value))
            }
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
        }
    }
}

impl std::error::Error for EntityError {}

/// Reject negative and non-finite amounts (fuel, damage, healing).
pub(crate) fn check_amount(value: f64) -> Result<f64, EntityError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EntityError::InvalidAmount { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(EntityError::dead("Knight").kind(), ErrorKind::UnitDead);
        assert_eq!(
            EntityError::invalid("legs must be > 0").kind(),
            ErrorKind::InvalidParams
        );
        let e = EntityError::OutOfFuel {
            needed: 1.5,
            available: 1.0,
        };
        assert_eq!(e.kind(), ErrorKind::OutOfFuel);
    }

    #[test]
    fn messages_use_plain_numbers() {
        let e = EntityError::OverCapacity {
            requested: 30.0,
            capacity: 20.0,
        };
        assert_eq!(e.to_string(), "too much fuel: 30.0 exceeds tank capacity 20.0");
        assert_eq!(EntityError::dead("Barbarian").to_string(), "unit Barbarian is dead");
    }

    #[test]
    fn amounts_must_be_finite_and_non_negative() {
        assert_eq!(check_amount(0.0), Ok(0.0));
        assert_eq!(check_amount(2.5), Ok(2.5));
        assert!(check_amount(-0.1).is_err());
        assert!(check_amount(f64::NAN).is_err());
        assert!(check_amount(f64::INFINITY).is_err());
    }
}
