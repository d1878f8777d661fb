//! Exact rational numbers.
//!
//! A [`Rational`] is always kept in canonical form: the denominator is
//! strictly positive, numerator and denominator share no common factor, and
//! zero is stored as `0/1`. Structural equality is therefore numeric
//! equality.

mod float;
mod parse;
mod undefined;

pub use undefined::{RationalResultExt, UNDEFINED_REPR};

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::config::DenominatorPolicy;
use crate::digits;
use crate::error::{ArithError, Result};
use crate::integer::{forward_binop, Integer, Sign};

/// An exact rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: Integer,
    den: Integer,
}

impl Rational {
    /// Builds `numerator / denominator` and reduces it.
    ///
    /// A negative denominator is handled according to
    /// [`DenominatorPolicy::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidDenominator`] if the denominator is zero,
    /// or negative under the strict policy.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        Self::with_policy(numerator, denominator, DenominatorPolicy::DEFAULT)
    }

    /// Builds `numerator / denominator` under an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidDenominator`] if the denominator is zero,
    /// or negative under [`DenominatorPolicy::Strict`].
    pub fn with_policy(
        numerator: Integer,
        denominator: Integer,
        policy: DenominatorPolicy,
    ) -> Result<Self> {
        match (denominator.sign(), policy) {
            (Sign::Zero, _) | (Sign::Minus, DenominatorPolicy::Strict) => {
                Err(ArithError::InvalidDenominator)
            }
            (Sign::Minus, DenominatorPolicy::Normalize) => {
                Ok(Self::canonical(-numerator, -denominator))
            }
            (Sign::Plus, _) => Ok(Self::canonical(numerator, denominator)),
        }
    }

    /// Reduces a fraction whose denominator is already positive.
    pub(crate) fn canonical(num: Integer, den: Integer) -> Self {
        debug_assert!(den.is_positive(), "denominator must be positive");
        if num.is_zero() {
            return Self::zero();
        }
        if den.is_one() {
            return Self { num, den };
        }
        let g = num.gcd(&den);
        if g.is_one() {
            Self { num, den }
        } else {
            Self {
                num: &num / &g,
                den: &den / &g,
            }
        }
    }

    /// The rational `value / 1`.
    #[must_use]
    pub fn from_integer(value: Integer) -> Self {
        Self {
            num: value,
            den: Integer::one(),
        }
    }

    /// The numerator; carries the sign of the value.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// The denominator; always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Consumes the value and returns `(numerator, denominator)`.
    #[must_use]
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns the sign of the value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.num.sign()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `self` is zero.
    pub fn inverse(&self) -> Result<Self> {
        match self.num.sign() {
            Sign::Zero => Err(ArithError::DivisionByZero),
            Sign::Plus => Ok(Self {
                num: self.den.clone(),
                den: self.num.clone(),
            }),
            // The sign has to move back to the numerator.
            Sign::Minus => Ok(Self {
                num: -&self.den,
                den: -&self.num,
            }),
        }
    }

    /// Divides `self` by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        let num = &self.num * &divisor.den;
        let den = &self.den * &divisor.num;
        if den.is_negative() {
            Ok(Self::canonical(-num, -den))
        } else {
            Ok(Self::canonical(num, den))
        }
    }

    /// Three-way comparison.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.num.sign().cmp(&other.num.sign()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if self.den == other.den {
            return self.num.compare(&other.num);
        }
        (&self.num * &other.den).compare(&(&self.den * &other.num))
    }

    /// Truncated quotient and remainder of numerator by denominator.
    fn split(&self) -> (Integer, bool) {
        let (q, r) = digits::div_rem(self.num.magnitude(), self.den.magnitude());
        (Integer::from_parts(self.num.sign(), q), !r.is_empty())
    }

    /// Largest integer not above the value.
    #[must_use]
    pub fn floor(&self) -> Integer {
        match self.split() {
            (q, true) if self.is_negative() => q - Integer::one(),
            (q, _) => q,
        }
    }

    /// Smallest integer not below the value.
    #[must_use]
    pub fn ceil(&self) -> Integer {
        match self.split() {
            (q, true) if self.num.is_positive() => q + Integer::one(),
            (q, _) => q,
        }
    }

    /// Integer part, rounding toward zero.
    #[must_use]
    pub fn trunc(&self) -> Integer {
        self.split().0
    }
}

fn rational_add(a: &Rational, b: &Rational) -> Rational {
    if a.den == b.den {
        return Rational::canonical(&a.num + &b.num, a.den.clone());
    }
    Rational::canonical(
        &a.num * &b.den + &b.num * &a.den,
        &a.den * &b.den,
    )
}

fn rational_sub(a: &Rational, b: &Rational) -> Rational {
    if a.den == b.den {
        return Rational::canonical(&a.num - &b.num, a.den.clone());
    }
    Rational::canonical(
        &a.num * &b.den - &b.num * &a.den,
        &a.den * &b.den,
    )
}

fn rational_mul(a: &Rational, b: &Rational) -> Rational {
    Rational::canonical(&a.num * &b.num, &a.den * &b.den)
}

fn rational_div(a: &Rational, b: &Rational) -> Rational {
    match a.checked_div(b) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

forward_binop!(Rational, Add, add, rational_add);
forward_binop!(Rational, Sub, sub, rational_sub);
forward_binop!(Rational, Mul, mul, rational_mul);
// Panics on a zero divisor; `checked_div` reports it instead.
forward_binop!(Rational, Div, div, rational_div);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<&Integer> for Rational {
    fn from(value: &Integer) -> Self {
        Self::from_integer(value.clone())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::from_integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
