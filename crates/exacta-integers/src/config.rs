//! Build-time policies and limits.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest base accepted by the radix conversions.
pub const MIN_BASE: u32 = 2;

/// Largest base accepted by the radix conversions (`0-9` then `A-Z`).
pub const MAX_BASE: u32 = 36;

/// How `Rational` construction treats a negative denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DenominatorPolicy {
    /// Only strictly positive denominators are accepted.
    Strict,
    /// A negative denominator is accepted and both signs are flipped.
    Normalize,
}

impl DenominatorPolicy {
    /// The policy selected by the `negative-denominator` feature.
    #[cfg(not(feature = "negative-denominator"))]
    pub const DEFAULT: Self = Self::Strict;

    /// The policy selected by the `negative-denominator` feature.
    #[cfg(feature = "negative-denominator")]
    pub const DEFAULT: Self = Self::Normalize;
}

impl Default for DenominatorPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns true if `base` is a supported radix.
#[must_use]
pub const fn is_valid_base(base: u32) -> bool {
    base >= MIN_BASE && base <= MAX_BASE
}
