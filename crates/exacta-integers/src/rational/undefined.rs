//! Propagation of undefined rationals.
//!
//! A failed rational operation is an `Err`. The extension trait lets a
//! chain of computations keep going on such results: every operation with
//! an undefined operand yields the first operand's error, and the failure is
//! inspected once at the end.

use std::cmp::Ordering;

use super::Rational;
use crate::error::{ArithError, Result};

/// Rendering of an undefined rational.
pub const UNDEFINED_REPR: &str = "#.QNaN";

/// Operations on possibly undefined rationals.
pub trait RationalResultExt: Sized {
    /// Renders the value in base 10, or [`UNDEFINED_REPR`].
    fn to_string_or_nan(&self) -> String;

    /// Converts to `f64`; an undefined value becomes NaN.
    fn to_f64_or_nan(&self) -> f64;

    /// Compares two values.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Undefined`] if either operand is undefined.
    fn compare(&self, other: &Self) -> Result<Ordering>;

    /// Sum, undefined if either operand is.
    #[must_use]
    fn q_add(&self, other: &Self) -> Self;

    /// Difference, undefined if either operand is.
    #[must_use]
    fn q_sub(&self, other: &Self) -> Self;

    /// Product, undefined if either operand is.
    #[must_use]
    fn q_mul(&self, other: &Self) -> Self;

    /// Quotient, undefined if either operand is or the divisor is zero.
    #[must_use]
    fn q_div(&self, other: &Self) -> Self;
}

fn both<'a>(
    a: &'a Result<Rational>,
    b: &'a Result<Rational>,
) -> Result<(&'a Rational, &'a Rational)> {
    match (a, b) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        (Err(err), _) | (_, Err(err)) => Err(err.clone()),
    }
}

impl RationalResultExt for Result<Rational> {
    fn to_string_or_nan(&self) -> String {
        match self {
            Ok(value) => value.to_string(),
            Err(_) => UNDEFINED_REPR.to_string(),
        }
    }

    fn to_f64_or_nan(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, Rational::to_f64)
    }

    fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(a.compare(b)),
            _ => Err(ArithError::Undefined),
        }
    }

    fn q_add(&self, other: &Self) -> Self {
        both(self, other).map(|(a, b)| a + b)
    }

    fn q_sub(&self, other: &Self) -> Self {
        both(self, other).map(|(a, b)| a - b)
    }

    fn q_mul(&self, other: &Self) -> Self {
        both(self, other).map(|(a, b)| a * b)
    }

    fn q_div(&self, other: &Self) -> Self {
        both(self, other).and_then(|(a, b)| a.checked_div(b))
    }
}
