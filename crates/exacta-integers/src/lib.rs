//! # exacta-integers
//!
//! Exact arbitrary precision arithmetic.
//!
//! This crate provides:
//! - Signed integers of unbounded size (`Integer`) with floor, ceiling,
//!   truncating and half-even division, gcd/lcm, square roots, modular
//!   exponentiation and two's-complement bitwise logic
//! - Rationals kept in lowest terms (`Rational`) with exact arithmetic,
//!   string I/O and conversions to and from `f64`
//! - Numeral conversion in bases 2 through 36
//! - Uniform random integers from an explicitly seeded generator
//!
//! Every value is immutable; operations return new values. Fallible
//! operations return [`Result`], while the operator traits panic on a zero
//! divisor like the primitive integer types do.
//!
//! ## Performance Notes
//!
//! - Values up to 128 bits keep their digits inline, without allocating
//! - Multiplication switches to Karatsuba for large balanced operands

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bitwise;
pub mod config;
mod digits;
mod division;
pub mod error;
pub mod integer;
mod modular;
pub mod radix;
pub mod random;
pub mod rational;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use bitwise::{boole, BooleOp};
pub use config::DenominatorPolicy;
pub use digits::{Digit, DIGIT_BITS};
pub use error::{ArithError, ParseError, Result};
pub use integer::{Integer, Sign};
pub use radix::{SignDisplay, Terminator};
pub use random::RandomState;
pub use rational::{Rational, RationalResultExt, UNDEFINED_REPR};
