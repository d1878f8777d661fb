//! Bitwise logic on signed integers.
//!
//! Storage is sign-magnitude, but every operator here behaves as if each
//! operand were an infinitely wide two's-complement bit pattern: negative
//! values have infinitely many leading ones. Operands are converted to that
//! view digit by digit on the fly and converted back afterwards.

use num_traits::{One, Zero};
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::digits::{self, Digit, Magnitude, DIGIT_BITS};
use crate::error::Result;
use crate::integer::{forward_binop, reserve_digits, Integer, Sign};

/// The ten binary boolean operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BooleOp {
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!(a & b)`
    Nand,
    /// `!(a | b)`
    Nor,
    /// `!(a ^ b)`
    Eqv,
    /// `!a & b`
    AndC1,
    /// `a & !b`
    AndC2,
    /// `!a | b`
    OrC1,
    /// `a | !b`
    OrC2,
}

impl BooleOp {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nand,
        Self::Nor,
        Self::Eqv,
        Self::AndC1,
        Self::AndC2,
        Self::OrC1,
        Self::OrC2,
    ];

    /// Applies the operator to one digit of each operand.
    #[must_use]
    pub fn apply(self, x: Digit, y: Digit) -> Digit {
        match self {
            Self::And => x & y,
            Self::Or => x | y,
            Self::Xor => x ^ y,
            Self::Nand => !(x & y),
            Self::Nor => !(x | y),
            Self::Eqv => !(x ^ y),
            Self::AndC1 => !x & y,
            Self::AndC2 => x & !y,
            Self::OrC1 => !x | y,
            Self::OrC2 => x | !y,
        }
    }
}

/// Negates a fixed-width two's-complement digit vector in place.
fn negate_in_place(digits: &mut Magnitude) {
    let mut carry = true;
    for d in digits.iter_mut() {
        let (s, c) = (!*d).overflowing_add(Digit::from(carry));
        *d = s;
        carry = c;
    }
}

/// Returns `len` digits of the two's-complement view of `value` and the
/// digit repeated above them.
fn twos_complement(value: &Integer, len: usize) -> (Magnitude, Digit) {
    let mut out = Magnitude::from_slice(value.magnitude());
    out.resize(len, 0);
    if value.is_negative() {
        negate_in_place(&mut out);
        (out, Digit::MAX)
    } else {
        (out, 0)
    }
}

fn from_twos_complement(mut pattern: Magnitude, extension: Digit) -> Integer {
    if extension == 0 {
        Integer::from_parts(Sign::Plus, pattern)
    } else {
        negate_in_place(&mut pattern);
        Integer::from_parts(Sign::Minus, pattern)
    }
}

/// Combines `a` and `b` bit by bit with `op`.
#[must_use]
pub fn boole(op: BooleOp, a: &Integer, b: &Integer) -> Integer {
    // One spare digit guarantees the top digit equals the sign extension.
    let len = a.magnitude().len().max(b.magnitude().len()) + 1;
    let (xa, ea) = twos_complement(a, len);
    let (xb, eb) = twos_complement(b, len);
    let pattern: Magnitude = xa.iter().zip(xb.iter()).map(|(&x, &y)| op.apply(x, y)).collect();
    from_twos_complement(pattern, op.apply(ea, eb))
}

/// `|value| - 1` for a negative value, whose bits are the complement of
/// the two's-complement pattern.
fn complement_pattern(value: &Integer) -> Magnitude {
    digits::sub(value.magnitude(), &[1])
}

impl Integer {
    /// Bitwise complement, `-(self + 1)`.
    #[must_use]
    pub fn bit_not(&self) -> Self {
        -self - Self::one()
    }

    /// Bitwise and.
    #[must_use]
    pub fn bit_and(&self, other: &Self) -> Self {
        boole(BooleOp::And, self, other)
    }

    /// Bitwise inclusive or.
    #[must_use]
    pub fn bit_or(&self, other: &Self) -> Self {
        boole(BooleOp::Or, self, other)
    }

    /// Bitwise exclusive or.
    #[must_use]
    pub fn bit_xor(&self, other: &Self) -> Self {
        boole(BooleOp::Xor, self, other)
    }

    /// Complement of the bitwise and.
    #[must_use]
    pub fn bit_nand(&self, other: &Self) -> Self {
        boole(BooleOp::Nand, self, other)
    }

    /// Complement of the bitwise or.
    #[must_use]
    pub fn bit_nor(&self, other: &Self) -> Self {
        boole(BooleOp::Nor, self, other)
    }

    /// Bitwise equivalence, the complement of xor.
    #[must_use]
    pub fn bit_eqv(&self, other: &Self) -> Self {
        boole(BooleOp::Eqv, self, other)
    }

    /// `!self & other`.
    #[must_use]
    pub fn bit_and_c1(&self, other: &Self) -> Self {
        boole(BooleOp::AndC1, self, other)
    }

    /// `self & !other`.
    #[must_use]
    pub fn bit_and_c2(&self, other: &Self) -> Self {
        boole(BooleOp::AndC2, self, other)
    }

    /// `!self | other`.
    #[must_use]
    pub fn bit_or_c1(&self, other: &Self) -> Self {
        boole(BooleOp::OrC1, self, other)
    }

    /// `self | !other`.
    #[must_use]
    pub fn bit_or_c2(&self, other: &Self) -> Self {
        boole(BooleOp::OrC2, self, other)
    }

    /// Returns bit `index` (LSB is 0) of the two's-complement pattern.
    #[must_use]
    pub fn test_bit(&self, index: u64) -> bool {
        if self.is_negative() {
            !digits::test_bit(&complement_pattern(self), index)
        } else {
            digits::test_bit(self.magnitude(), index)
        }
    }

    /// Counts the set bits of a non-negative value.
    ///
    /// A negative value has infinitely many set bits; for it the zero bits
    /// of the pattern are counted instead, i.e. the set bits of `|self| - 1`.
    #[must_use]
    pub fn bit_count(&self) -> u64 {
        if self.is_negative() {
            digits::count_ones(&complement_pattern(self))
        } else {
            digits::count_ones(self.magnitude())
        }
    }

    /// Arithmetic shift: `self * 2^shift` when `shift >= 0`, otherwise
    /// `floor(self / 2^-shift)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ArithError::OutOfMemory`] if a left shift cannot be
    /// stored.
    pub fn ash(&self, shift: i64) -> Result<Self> {
        if self.is_zero() || shift == 0 {
            return Ok(self.clone());
        }

        let amount = shift.unsigned_abs();
        if shift > 0 {
            reserve_digits((self.bit_len() + amount) / u64::from(DIGIT_BITS) + 1)?;
            return Ok(Self::from_parts(
                self.sign(),
                digits::shl(self.magnitude(), amount),
            ));
        }

        if self.is_negative() {
            // floor(-m / 2^k) = -(((m - 1) >> k) + 1)
            let shifted = digits::shr(&complement_pattern(self), amount);
            Ok(Self::from_parts(Sign::Minus, digits::add(&shifted, &[1])))
        } else {
            Ok(Self::from_parts(
                Sign::Plus,
                digits::shr(self.magnitude(), amount),
            ))
        }
    }
}

fn integer_and(a: &Integer, b: &Integer) -> Integer {
    boole(BooleOp::And, a, b)
}

fn integer_or(a: &Integer, b: &Integer) -> Integer {
    boole(BooleOp::Or, a, b)
}

fn integer_xor(a: &Integer, b: &Integer) -> Integer {
    boole(BooleOp::Xor, a, b)
}

forward_binop!(Integer, BitAnd, bitand, integer_and);
forward_binop!(Integer, BitOr, bitor, integer_or);
forward_binop!(Integer, BitXor, bitxor, integer_xor);

impl Not for Integer {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl Not for &Integer {
    type Output = Integer;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}
