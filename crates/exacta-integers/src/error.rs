//! Error types shared by the integer and rational layers.

use thiserror::Error;

/// Reasons a numeral could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty.
    #[error("empty numeral")]
    Empty,

    /// A sign was present but no digits followed it.
    #[error("sign without digits")]
    MissingDigits,

    /// A character is not a digit of the requested base.
    #[error("invalid digit {ch:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// More than one sign, or a sign where none is allowed.
    #[error("misplaced sign")]
    MisplacedSign,

    /// A rational literal has nothing before its `/`.
    #[error("missing numerator")]
    MissingNumerator,

    /// The denominator of a rational literal is signed, spaced or empty.
    #[error("malformed denominator")]
    MalformedDenominator,

    /// The exponent of a decimal literal is not an integer.
    #[error("malformed exponent")]
    MalformedExponent,
}

/// Errors produced by arithmetic operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// A numeral was malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The base is outside `2..=36`.
    #[error("invalid base {0}, expected 2..=36")]
    InvalidBase(u32),

    /// Division or reduction by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// `pow` or `mod_exp` was given a negative exponent.
    #[error("negative exponent")]
    NegativeExponent,

    /// `mod_exp` was given a modulus that is zero or negative.
    #[error("modulus must be positive")]
    NonPositiveModulus,

    /// Integer square root of a negative value.
    #[error("square root of a negative number")]
    NegativeSqrt,

    /// `random` was given a bound that is zero or negative.
    #[error("random bound must be positive")]
    NonPositiveBound,

    /// A rational was built with a denominator the active policy rejects.
    #[error("denominator must be positive")]
    InvalidDenominator,

    /// The denominator bound of a float approximation is below one.
    #[error("maximum denominator must be at least 1")]
    InvalidMaxDenominator,

    /// A NaN or infinite float cannot become a rational.
    #[error("value is not finite")]
    NonFinite,

    /// A caller supplied output buffer is too short.
    #[error("buffer too small, {required} bytes required")]
    BufferTooSmall {
        /// Number of bytes the rendering needs.
        required: usize,
    },

    /// An operand was already undefined.
    #[error("undefined value")]
    Undefined,

    /// Storage for a result could not be allocated.
    #[error("out of memory")]
    OutOfMemory,
}

impl ArithError {
    /// Returns true for malformed input (numerals, bases, literals).
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvalidBase(_))
    }

    /// Returns true for mathematically undefined requests.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero
                | Self::NegativeExponent
                | Self::NonPositiveModulus
                | Self::NegativeSqrt
                | Self::NonPositiveBound
                | Self::InvalidDenominator
                | Self::InvalidMaxDenominator
                | Self::NonFinite
        )
    }
}

impl From<smallvec::CollectionAllocErr> for ArithError {
    fn from(_: smallvec::CollectionAllocErr) -> Self {
        Self::OutOfMemory
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArithError>;
