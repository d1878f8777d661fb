//! Division with explicit rounding policies.
//!
//! Every policy is derived from one truncating primitive, [`Integer::div_rem`],
//! whose remainder carries the sign of the dividend.

use num_traits::{One, Zero};
use std::cmp::Ordering;

use crate::digits;
use crate::error::{ArithError, Result};
use crate::integer::Integer;

impl Integer {
    /// Truncating division returning `(quotient, remainder)`.
    ///
    /// The remainder satisfies `|r| < |divisor|` and has the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let (q, r) = digits::div_rem(self.magnitude(), divisor.magnitude());
        Ok((
            Self::from_parts(self.sign() * divisor.sign(), q),
            Self::from_parts(self.sign(), r),
        ))
    }

    /// Quotient rounded toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Quotient rounded toward zero. Same as [`Integer::checked_div`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_trunc(&self, divisor: &Self) -> Result<Self> {
        self.checked_div(divisor)
    }

    /// Quotient rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_floor(&self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        if !r.is_zero() && self.sign() != divisor.sign() {
            Ok(q - Self::one())
        } else {
            Ok(q)
        }
    }

    /// Quotient rounded toward positive infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_ceil(&self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        if !r.is_zero() && self.sign() == divisor.sign() {
            Ok(q + Self::one())
        } else {
            Ok(q)
        }
    }

    /// Quotient rounded to the nearest integer, ties to even.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn div_round(&self, divisor: &Self) -> Result<Self> {
        let (q, r) = self.div_rem(divisor)?;
        if r.is_zero() {
            return Ok(q);
        }

        // The exact quotient lies strictly between q and q + step.
        let step = Self::from(self.signum() * divisor.signum());
        let twice = digits::shl(r.magnitude(), 1);
        match digits::cmp(&twice, divisor.magnitude()) {
            Ordering::Less => Ok(q),
            Ordering::Greater => Ok(q + step),
            Ordering::Equal if q.is_even() => Ok(q),
            Ordering::Equal => Ok(q + step),
        }
    }

    /// Remainder with the sign of the divisor (floored modulo).
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        let (_, r) = self.div_rem(divisor)?;
        if !r.is_zero() && r.sign() != divisor.sign() {
            Ok(r + divisor)
        } else {
            Ok(r)
        }
    }

    /// Remainder with the sign of the dividend (truncated remainder).
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_mod_and_rem_signs() {
        assert_eq!(z(10).modulo(&z(4)).unwrap(), z(2));
        assert_eq!(z(10).checked_rem(&z(4)).unwrap(), z(2));
        assert_eq!(z(-10).modulo(&z(4)).unwrap(), z(2));
        assert_eq!(z(-10).checked_rem(&z(4)).unwrap(), z(-2));
        assert_eq!(z(10).modulo(&z(-4)).unwrap(), z(-2));
        assert_eq!(z(10).checked_rem(&z(-4)).unwrap(), z(2));
        assert!(z(-8).modulo(&z(4)).unwrap().is_zero());
    }

    #[test]
    fn test_rounding_family() {
        let a = z(123_456);
        assert_eq!(a.div_trunc(&z(10)).unwrap(), z(12_345));
        assert_eq!(a.div_floor(&z(10)).unwrap(), z(12_345));
        assert_eq!(a.div_ceil(&z(10)).unwrap(), z(12_346));
        assert_eq!(a.div_trunc(&z(20)).unwrap(), z(6_172));
        assert_eq!(a.div_floor(&z(20)).unwrap(), z(6_172));
        assert_eq!(a.div_ceil(&z(20)).unwrap(), z(6_173));
    }

    #[test]
    fn test_rounding_negative_operands() {
        assert_eq!(z(-7).div_trunc(&z(2)).unwrap(), z(-3));
        assert_eq!(z(-7).div_floor(&z(2)).unwrap(), z(-4));
        assert_eq!(z(-7).div_ceil(&z(2)).unwrap(), z(-3));
        assert_eq!(z(-7).div_ceil(&z(-2)).unwrap(), z(4));
        assert_eq!(z(7).div_floor(&z(-2)).unwrap(), z(-4));
        assert_eq!(z(-6).div_floor(&z(2)).unwrap(), z(-3));
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(z(14).div_round(&z(10)).unwrap(), z(1));
        assert_eq!(z(16).div_round(&z(10)).unwrap(), z(2));
        assert_eq!(z(25).div_round(&z(10)).unwrap(), z(2));
        assert_eq!(z(35).div_round(&z(10)).unwrap(), z(4));
        assert_eq!(z(-25).div_round(&z(10)).unwrap(), z(-2));
        assert_eq!(z(-35).div_round(&z(10)).unwrap(), z(-4));
        assert_eq!(z(-16).div_round(&z(10)).unwrap(), z(-2));
        assert_eq!(z(5).div_round(&z(-10)).unwrap(), z(0));
        assert_eq!(z(15).div_round(&z(-10)).unwrap(), z(-2));
    }

    #[test]
    fn test_div_rem_identity() {
        for a in [-17i64, -5, 0, 5, 17] {
            for b in [-4i64, -3, 3, 4] {
                let (q, r) = z(a).div_rem(&z(b)).unwrap();
                assert_eq!(&q * &z(b) + &r, z(a));
                assert!(r.is_zero() || r.sign() == z(a).sign());
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        let zero = Integer::zero();
        assert_eq!(z(1).div_rem(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(z(1).div_floor(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(z(1).div_ceil(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(z(1).div_round(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(z(1).modulo(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(z(1).checked_rem(&zero), Err(ArithError::DivisionByZero));
    }
}
