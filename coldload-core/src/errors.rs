//! Error Types for Load Calculation Failures
//!
//! ## Design Philosophy
//!
//! Load calculations are closed-form arithmetic, so the only way they fail is
//! when an input makes the arithmetic meaningless:
//!
//! 1. **Not a number**: NaN or infinity reached the engine.
//! 2. **Non-positive quantity**: a dimension or a duration we divide by is
//!    zero or negative.
//! 3. **Out of range**: a value is finite and positive but outside what the
//!    formula supports (e.g. a safety factor below 1.0, more than 24 operating
//!    hours per day).
//!
//! Errors carry the offending field name as `&'static str` so they stay `Copy`
//! and allocation-free, which keeps the core usable without `std`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use coldload_core::{CalcError, LoadCalculator};
//! use coldload_core::rooms::{ColdRoomCalculator, ColdRoomInput};
//!
//! let mut input = ColdRoomInput::default();
//! input.geometry.length = 0.0;
//!
//! match ColdRoomCalculator.calculate(&input) {
//!     Ok(report) => println!("{:.2} kW", report.summary.final_kw),
//!     Err(CalcError::NonPositive { field, .. }) => eprintln!("{field} must be > 0"),
//!     Err(e) => eprintln!("calculation failed: {e}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for load calculations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculation errors - small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalcError {
    /// Value is NaN or infinite
    #[error("{field}: not a valid number")]
    InvalidValue {
        /// Name of the input field
        field: &'static str,
    },

    /// Value must be strictly positive (dimensions, durations)
    #[error("{field}: {value} must be greater than zero")]
    NonPositive {
        /// Name of the input field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Value outside the range the formula supports
    #[error("{field}: {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the input field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },
}

impl CalcError {
    /// Name of the input field that caused the error
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidValue { field }
            | Self::NonPositive { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// Reject NaN and infinities
pub fn check_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidValue { field })
    }
}

/// Require a finite value strictly greater than zero
pub fn check_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = check_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::NonPositive { field, value })
    }
}

/// Require a finite value inside `[min, max]`
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> CalcResult<f64> {
    let value = check_finite(field, value)?;
    if value < min || value > max {
        Err(CalcError::OutOfRange { field, value, min, max })
    } else {
        Ok(value)
    }
}

/// Require a finite value that is zero or more (counts, powers, masses)
pub fn check_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    check_range(field, value, 0.0, f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_check() {
        assert!(check_finite("x", 1.5).is_ok());
        assert_eq!(
            check_finite("x", f64::NAN),
            Err(CalcError::InvalidValue { field: "x" })
        );
        assert!(check_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn positive_check() {
        assert_eq!(check_positive("length", 2.0), Ok(2.0));
        assert!(matches!(
            check_positive("length", 0.0),
            Err(CalcError::NonPositive { field: "length", .. })
        ));
        assert!(check_positive("length", -1.0).is_err());
    }

    #[test]
    fn range_check() {
        assert!(check_range("hours", 24.0, 0.0, 24.0).is_ok());
        assert!(check_range("hours", 25.0, 0.0, 24.0).is_err());
        assert!(check_non_negative("people", 0.0).is_ok());
        assert!(check_non_negative("people", -1.0).is_err());
    }

    #[test]
    fn error_reports_field() {
        let err = CalcError::OutOfRange { field: "safety_factor", value: 0.9, min: 1.0, max: 2.0 };
        assert_eq!(err.field(), "safety_factor");
    }
}
