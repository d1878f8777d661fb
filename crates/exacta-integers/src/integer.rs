//! Arbitrary precision integers.
//!
//! An [`Integer`] is stored sign-magnitude: a [`Sign`] tag plus a trimmed
//! little-endian digit vector. Every constructor and operation returns a
//! canonical value, so structural equality is numeric equality.

use num_traits::{Num, One, ToPrimitive, Zero};
use smallvec::smallvec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::digits::{self, Digit, Magnitude, DIGIT_BITS};
use crate::error::{ArithError, Result};

/// The sign of an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Sign {
    /// Strictly negative.
    Minus,
    /// Exactly zero.
    #[default]
    Zero,
    /// Strictly positive.
    Plus,
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Minus => Self::Plus,
            Self::Zero => Self::Zero,
            Self::Plus => Self::Minus,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Plus,
            _ => Self::Minus,
        }
    }
}

/// An arbitrary precision integer.
///
/// Values are immutable once built; every operation produces a new value.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Integer {
    sign: Sign,
    mag: Magnitude,
}

/// Fails with `OutOfMemory` if `count` digits cannot be allocated.
pub(crate) fn reserve_digits(count: u64) -> Result<()> {
    let count = usize::try_from(count).map_err(|_| ArithError::OutOfMemory)?;
    let mut probe: Vec<Digit> = Vec::new();
    probe
        .try_reserve_exact(count)
        .map_err(|_| ArithError::OutOfMemory)
}

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Builds a canonical value from a sign and an untrimmed magnitude.
    pub(crate) fn from_parts(sign: Sign, mut mag: Magnitude) -> Self {
        digits::trim(&mut mag);
        if mag.is_empty() {
            return Self::default();
        }
        debug_assert!(sign != Sign::Zero, "non-zero magnitude with zero sign");
        let sign = if sign == Sign::Zero { Sign::Plus } else { sign };
        Self { sign, mag }
    }

    pub(crate) fn from_u128_signed(negative: bool, value: u128) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Self::from_parts(sign, digits::from_u128(value))
    }

    /// Creates a zero value with room for `digits` digits.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::OutOfMemory`] if the storage cannot be allocated.
    pub fn with_capacity(digits: usize) -> Result<Self> {
        let mut mag = Magnitude::new();
        mag.try_reserve(digits)?;
        Ok(Self {
            sign: Sign::Zero,
            mag,
        })
    }

    pub(crate) fn magnitude(&self) -> &[Digit] {
        &self.mag
    }

    /// Returns the sign tag.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.sign {
            Sign::Minus => -1,
            Sign::Zero => 0,
            Sign::Plus => 1,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Returns true if this integer is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    /// Number of digits in use. Zero still occupies one digit.
    #[must_use]
    pub fn num_digits(&self) -> usize {
        self.mag.len().max(1)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        digits::bit_len(&self.mag)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(
            if self.is_zero() { Sign::Zero } else { Sign::Plus },
            self.mag.clone(),
        )
    }

    /// Three-way comparison in signed order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Plus => digits::cmp(&self.mag, &other.mag),
            Sign::Minus => digits::cmp(&other.mag, &self.mag),
        }
    }

    /// Returns true if the value is even. Zero is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |d| d & 1 == 0)
    }

    /// Returns true if the value is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.to_u64_magnitude()?;
        match self.sign {
            Sign::Minus if magnitude == 1 << 63 => Some(i64::MIN),
            Sign::Minus => i64::try_from(magnitude).ok().map(|v| -v),
            _ => i64::try_from(magnitude).ok(),
        }
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            None
        } else {
            self.to_u64_magnitude()
        }
    }

    fn to_u64_magnitude(&self) -> Option<u64> {
        match self.mag.len() {
            0 => Some(0),
            1 => Some(self.mag[0]),
            _ => None,
        }
    }

    /// Converts to the nearest `f64`.
    ///
    /// Magnitudes beyond the `f64` range become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_len();
        let magnitude = if bits <= u64::from(DIGIT_BITS) {
            self.mag.first().copied().unwrap_or(0) as f64
        } else if bits > 1024 {
            f64::INFINITY
        } else {
            // Keep the top 64 bits and fold everything below into a sticky
            // bit so the conversion rounds exactly once.
            let shift = bits - u64::from(DIGIT_BITS);
            let mut top = digits::shr(&self.mag, shift)[0];
            let whole = (shift / u64::from(DIGIT_BITS)) as usize;
            let partial = (shift % u64::from(DIGIT_BITS)) as u32;
            let low_mask = if partial == 0 { 0 } else { (1 << partial) - 1 };
            let sticky =
                self.mag[..whole].iter().any(|&d| d != 0) || self.mag[whole] & low_mask != 0;
            if sticky {
                top |= 1;
            }
            top as f64 * 2f64.powi(shift as i32)
        };

        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Computes self^exponent by repeated squaring.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeExponent`] if `exponent < 0` and
    /// [`ArithError::OutOfMemory`] if the result cannot be stored.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        let exp = u64::try_from(exponent).map_err(|_| ArithError::NegativeExponent)?;
        if exp == 0 {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let bits = self
            .bit_len()
            .checked_mul(exp)
            .ok_or(ArithError::OutOfMemory)?;
        reserve_digits(bits / u64::from(DIGIT_BITS) + 1)?;

        let mut result: Magnitude = smallvec![1];
        let mut base = self.mag.clone();
        let mut e = exp;
        loop {
            if e & 1 == 1 {
                result = digits::mul(&result, &base);
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            base = digits::mul(&base, &base);
        }

        let sign = if self.is_negative() && exp & 1 == 1 {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Ok(Self::from_parts(sign, result))
    }

    /// Computes the greatest common divisor. The result is never negative.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.mag.clone();
        let mut b = other.mag.clone();
        while !b.is_empty() {
            let (_, r) = digits::div_rem(&a, &b);
            a = b;
            b = r;
        }
        Self::from_parts(Sign::Plus, a)
    }

    /// Computes the least common multiple, zero if either input is zero.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (q, _) = digits::div_rem(&self.mag, &g.mag);
        Self::from_parts(Sign::Plus, digits::mul(&q, &other.mag))
    }

    /// Integer square root, `floor(sqrt(self))`, by Newton iteration.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeSqrt`] for negative input.
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(ArithError::NegativeSqrt);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let n = &self.mag;
        // 2^ceil(bits/2) is an upper bound, so the iteration only descends.
        let mut x = digits::shl(&[1], (self.bit_len() + 1) / 2);
        loop {
            let (q, _) = digits::div_rem(n, &x);
            let y = digits::shr(&digits::add(&x, &q), 1);
            if digits::cmp(&y, &x) != Ordering::Less {
                break;
            }
            x = y;
        }
        Ok(Self::from_parts(Sign::Plus, x))
    }

    /// Computes `n!` by repeated single-digit multiplication.
    #[must_use]
    pub fn factorial(n: u64) -> Self {
        let mut acc: Magnitude = smallvec![1];
        for k in 2..=n {
            digits::mul_add_digit(&mut acc, k, 0);
        }
        Self::from_parts(Sign::Plus, acc)
    }
}

fn add_signed(a_sign: Sign, a: &[Digit], b_sign: Sign, b: &[Digit]) -> Integer {
    match (a_sign, b_sign) {
        (Sign::Zero, _) => Integer::from_parts(b_sign, Magnitude::from_slice(b)),
        (_, Sign::Zero) => Integer::from_parts(a_sign, Magnitude::from_slice(a)),
        _ if a_sign == b_sign => Integer::from_parts(a_sign, digits::add(a, b)),
        _ => match digits::cmp(a, b) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => Integer::from_parts(a_sign, digits::sub(a, b)),
            Ordering::Less => Integer::from_parts(b_sign, digits::sub(b, a)),
        },
    }
}

fn integer_add(a: &Integer, b: &Integer) -> Integer {
    add_signed(a.sign, &a.mag, b.sign, &b.mag)
}

fn integer_sub(a: &Integer, b: &Integer) -> Integer {
    add_signed(a.sign, &a.mag, -b.sign, &b.mag)
}

fn integer_mul(a: &Integer, b: &Integer) -> Integer {
    Integer::from_parts(a.sign * b.sign, digits::mul(&a.mag, &b.mag))
}

fn integer_div(a: &Integer, b: &Integer) -> Integer {
    match a.div_rem(b) {
        Ok((q, _)) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn integer_rem(a: &Integer, b: &Integer) -> Integer {
    match a.div_rem(b) {
        Ok((_, r)) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

/// Implements a binary operator for every owned/borrowed operand pairing
/// by delegating to a `fn(&T, &T) -> T`.
macro_rules! forward_binop {
    ($ty:ident, $imp:ident, $method:ident, $core:path) => {
        impl $imp<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $core(self, rhs)
            }
        }

        impl $imp for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $core(&self, &rhs)
            }
        }

        impl $imp<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                $core(&self, rhs)
            }
        }

        impl $imp<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $core(self, &rhs)
            }
        }
    };
}
pub(crate) use forward_binop;

// Arithmetic operations
forward_binop!(Integer, Add, add, integer_add);
forward_binop!(Integer, Sub, sub, integer_sub);
forward_binop!(Integer, Mul, mul, integer_mul);
// Truncating, like the primitive integers. Both panic on a zero divisor.
forward_binop!(Integer, Div, div, integer_div);
forward_binop!(Integer, Rem, rem, integer_rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            sign: -self.sign,
            mag: self.mag,
        }
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer {
            sign: -self.sign,
            mag: self.mag.clone(),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from_parts(Sign::Plus, smallvec![1])
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.mag.as_slice() == [1]
    }
}

impl Num for Integer {
    type FromStrRadixErr = ArithError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        Integer::from_str_radix(s, radix)
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        Integer::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        Integer::to_u64(self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Integer::to_f64(self))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_u128_signed(value < 0, i128::from(value).unsigned_abs())
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Self::from_u128_signed(false, u128::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64, u128);

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self::from_u128_signed(value < 0, value.unsigned_abs())
    }
}

impl From<isize> for Integer {
    fn from(value: isize) -> Self {
        Self::from(value as i64)
    }
}

impl From<usize> for Integer {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}
