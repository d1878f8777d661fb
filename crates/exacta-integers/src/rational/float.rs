//! Conversions between rationals and `f64`.

use num_traits::{One, Zero};
use std::cmp::Ordering;

use super::Rational;
use crate::error::{ArithError, Result};
use crate::integer::Integer;

/// Bits of fraction kept when a value has to be converted piecewise.
const FRACTION_BITS: u32 = 52;

/// Splits a finite, non-negative float into `p / q` with `q` a power of two.
fn exact_parts(value: f64) -> Result<(Integer, Integer)> {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    let mantissa = Integer::from(mantissa);
    if exponent >= 0 {
        Ok((mantissa.ash(exponent)?, Integer::one()))
    } else {
        Ok((mantissa, Integer::one().ash(-exponent)?))
    }
}

impl Rational {
    /// Finds the rational with denominator at most `max_denominator` that the
    /// Stern-Brocot search settles on for `value`.
    ///
    /// The search keeps a lower bound `ln/ld` (from `0/1`) and an upper bound
    /// `un/ud` (from `1/0`) around `|value|` and narrows them through their
    /// mediants. When the next mediant's denominator would exceed the limit,
    /// the bound on the side of `|value|` is returned. The sign is restored
    /// at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NonFinite`] for NaN or an infinity and
    /// [`ArithError::InvalidMaxDenominator`] if `max_denominator < 1`.
    pub fn from_f64(value: f64, max_denominator: i64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ArithError::NonFinite);
        }
        if max_denominator < 1 {
            return Err(ArithError::InvalidMaxDenominator);
        }

        let (p, q) = exact_parts(value.abs())?;
        let max_den = Integer::from(max_denominator);
        let one = Integer::one();
        let (mut ln, mut ld) = (Integer::zero(), one.clone());
        let (mut un, mut ud) = (one.clone(), Integer::zero());

        let (n, d) = loop {
            let mn = &ln + &un;
            let md = &ld + &ud;
            match (&p * &md).cmp(&(&q * &mn)) {
                Ordering::Equal => {
                    if md <= max_den {
                        break (mn, md);
                    }
                    if ld < ud {
                        break (ln, ld);
                    }
                    break (un, ud);
                }
                Ordering::Greater => {
                    if md > max_den {
                        break (un, ud);
                    }
                    // Take every consecutive step that keeps raising the
                    // lower bound at once: ln += k*un, ld += k*ud.
                    let below = &p * &ld - &q * &ln;
                    let above = &q * &un - &p * &ud;
                    let mut k = (below - &one) / &above;
                    if !ud.is_zero() {
                        k = k.min((&max_den - &ld) / &ud);
                    }
                    ln = &ln + &k * &un;
                    ld = &ld + &k * &ud;
                }
                Ordering::Less => {
                    if md > max_den {
                        break (ln, ld);
                    }
                    // Same for the upper bound: un += k*ln, ud += k*ld.
                    let below = &p * &ld - &q * &ln;
                    let above = &q * &un - &p * &ud;
                    let mut k = (&max_den - &ud) / &ld;
                    if !below.is_zero() {
                        k = k.min((above - &one) / &below);
                    }
                    un = &un + &k * &ln;
                    ud = &ud + &k * &ld;
                }
            }
        };

        tracing::trace!(value, max_denominator, numerator = %n, denominator = %d, "farey approximation");
        let n = if value < 0.0 { -n } else { n };
        Ok(Self::canonical(n, d))
    }

    /// Converts to the nearest `f64` the two-step method can reach.
    ///
    /// When numerator and denominator both fit in an `f64` the result is
    /// their quotient. Otherwise the value is split into its floor and a
    /// fractional part that is converted with 52 bits of precision, so
    /// values whose parts overflow can still convert to a finite result.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let num = self.num.to_f64();
        let den = self.den.to_f64();
        if num.is_finite() && den.is_finite() {
            return num / den;
        }

        tracing::debug!(
            numerator_bits = self.num.bit_len(),
            denominator_bits = self.den.bit_len(),
            "rational exceeds f64 range, converting piecewise"
        );
        let whole = self.floor();
        let fraction = self - &Self::from_integer(whole.clone());
        let scale = Integer::from(1u64 << FRACTION_BITS);
        // fraction lies in [0, 1), so truncation is floor here.
        let scaled = &fraction.num * &scale / &fraction.den;
        whole.to_f64() + scaled.to_f64() / scale.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(Integer::new(n), Integer::new(d)).unwrap()
    }

    #[test]
    fn test_simple_fractions() {
        assert_eq!(Rational::from_f64(0.5, 100).unwrap(), q(1, 2));
        assert_eq!(Rational::from_f64(-0.75, 10).unwrap(), q(-3, 4));
        assert_eq!(Rational::from_f64(0.333, 10).unwrap(), q(1, 3));
        assert_eq!(Rational::from_f64(0.1, 10).unwrap(), q(1, 10));
        assert_eq!(Rational::from_f64(0.0, 10).unwrap(), Rational::zero());
        assert_eq!(Rational::from_f64(-0.0, 10).unwrap(), Rational::zero());
        assert_eq!(Rational::from_f64(7.0, 1).unwrap(), q(7, 1));
    }

    #[test]
    fn test_pi() {
        assert_eq!(Rational::from_f64(std::f64::consts::PI, 1000).unwrap(), q(355, 113));
        assert_eq!(Rational::from_f64(std::f64::consts::PI, 100).unwrap(), q(22, 7));
    }

    #[test]
    fn test_tie_at_bound() {
        // 5/2 sits exactly between 2/1 and 3/1; the later bound wins.
        assert_eq!(Rational::from_f64(2.5, 1).unwrap(), q(3, 1));
    }

    #[test]
    fn test_large_and_tiny_inputs() {
        let big = Rational::from_f64(1e300, 1).unwrap();
        assert!(big.is_integer());
        assert_eq!(big.to_f64(), 1e300);

        let tiny = Rational::from_f64(1e-300, i64::MAX).unwrap();
        assert_eq!(tiny, Rational::zero());

        let exact = Rational::from_f64(0.375, i64::MAX).unwrap();
        assert_eq!(exact, q(3, 8));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(Rational::from_f64(f64::NAN, 10), Err(ArithError::NonFinite));
        assert_eq!(Rational::from_f64(f64::INFINITY, 10), Err(ArithError::NonFinite));
        assert_eq!(Rational::from_f64(0.5, 0), Err(ArithError::InvalidMaxDenominator));
        assert_eq!(Rational::from_f64(0.5, -3), Err(ArithError::InvalidMaxDenominator));
    }

    #[test]
    fn test_to_f64_small() {
        assert_eq!(q(1, 3).to_f64(), 1.0 / 3.0);
        assert_eq!(q(-7, 4).to_f64(), -1.75);
        assert_eq!(Rational::zero().to_f64(), 0.0);
    }

    #[test]
    fn test_to_f64_beyond_range() {
        let huge = Integer::new(10).pow(400).unwrap();

        let r = Rational::new(&huge * Integer::new(3) + Integer::one(), &huge * Integer::new(2)).unwrap();
        assert!((r.to_f64() - 1.5).abs() < 1e-15);

        let r = Rational::new(-(&huge + Integer::one()), huge.clone()).unwrap();
        assert!((r.to_f64() + 1.0).abs() < 1e-15);

        let numerator = Integer::new(10).pow(700).unwrap() * Integer::new(7) + Integer::one();
        let r = Rational::new(numerator, huge).unwrap();
        assert!((r.to_f64() / 7e300 - 1.0).abs() < 1e-15);
    }
}
