//! Numeral conversion in bases 2 through 36.
//!
//! Digits are `0-9` then `A-Z`; parsing also accepts `a-z`.

use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

use crate::config::is_valid_base;
use crate::digits::{self, Digit, Magnitude};
use crate::error::{ArithError, ParseError, Result};
use crate::integer::{Integer, Sign};

/// Where parsing of a numeral stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Every character up to the end must be a digit.
    End,
    /// Parsing stops at the first whitespace; the rest is ignored.
    Space,
    /// Parsing stops at the first `/` or whitespace.
    Slash,
}

impl Terminator {
    fn stops_at(self, ch: char) -> bool {
        match self {
            Self::End => false,
            Self::Space => ch.is_whitespace(),
            Self::Slash => ch == '/' || ch.is_whitespace(),
        }
    }
}

/// How the sign of a rendered numeral is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SignDisplay {
    /// Only negative values carry a `-`.
    #[default]
    Negative,
    /// Non-zero values always carry `+` or `-`.
    Always,
}

/// Largest power of `base` that fits in a digit, and its exponent.
fn chunk(base: u32) -> (Digit, u32) {
    let base = Digit::from(base);
    let mut power = base;
    let mut exponent = 1;
    while let Some(next) = power.checked_mul(base) {
        power = next;
        exponent += 1;
    }
    (power, exponent)
}

pub(crate) fn check_base(base: u32) -> Result<()> {
    if is_valid_base(base) {
        Ok(())
    } else {
        Err(ArithError::InvalidBase(base))
    }
}

impl Integer {
    /// Parses a numeral in `base`, optionally preceded by `+` or `-`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported base, an empty string, or any
    /// character that is not a digit of `base`.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self> {
        Self::parse_until(s, base, Terminator::End)
    }

    /// Parses a numeral in `base`, stopping where `terminator` says.
    ///
    /// # Errors
    ///
    /// Same as [`Integer::from_str_radix`] for the consumed prefix.
    pub fn parse_until(s: &str, base: u32, terminator: Terminator) -> Result<Self> {
        check_base(base)?;
        if s.is_empty() {
            return Err(ParseError::Empty.into());
        }

        let (negative, start) = match s.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };

        let (power, per_chunk) = chunk(base);
        let mut mag = Magnitude::new();
        let mut pending: Digit = 0;
        let mut pending_len = 0;
        let mut seen = 0usize;

        for (offset, ch) in s[start..].char_indices() {
            if terminator.stops_at(ch) {
                break;
            }
            let position = start + offset;
            if ch == '+' || ch == '-' {
                return Err(ParseError::MisplacedSign.into());
            }
            let d = ch
                .to_digit(base)
                .ok_or(ParseError::InvalidDigit { ch, position })?;

            pending = pending * Digit::from(base) + Digit::from(d);
            pending_len += 1;
            seen += 1;
            if pending_len == per_chunk {
                digits::mul_add_digit(&mut mag, power, pending);
                pending = 0;
                pending_len = 0;
            }
        }

        if seen == 0 {
            return Err(if start == 1 {
                ParseError::MissingDigits
            } else {
                ParseError::Empty
            }
            .into());
        }
        if pending_len > 0 {
            digits::mul_add_digit(&mut mag, Digit::from(base).pow(pending_len), pending);
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self::from_parts(sign, mag))
    }

    /// Renders the value in `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidBase`] unless `2 <= base <= 36`.
    pub fn to_string_radix(&self, base: u32, sign: SignDisplay) -> Result<String> {
        check_base(base)?;
        Ok(self.render_signed(base, sign))
    }

    /// Renders into a caller supplied buffer and returns the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::BufferTooSmall`] with the required length when
    /// `buf` is too short; nothing is written in that case.
    pub fn write_to_buffer(&self, base: u32, sign: SignDisplay, buf: &mut [u8]) -> Result<usize> {
        let rendered = self.to_string_radix(base, sign)?;
        write_rendered(&rendered, buf)
    }

    /// Sign and digits. `base` must already be valid.
    pub(crate) fn render_signed(&self, base: u32, sign: SignDisplay) -> String {
        let mut out = String::new();
        match (self.sign(), sign) {
            (Sign::Minus, _) => out.push('-'),
            (Sign::Plus, SignDisplay::Always) => out.push('+'),
            _ => {}
        }
        out.push_str(&self.render_magnitude(base));
        out
    }

    /// Unsigned digits of the magnitude. `base` must already be valid.
    fn render_magnitude(&self, base: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let (power, per_chunk) = chunk(base);
        let base = Digit::from(base);
        let mut mag = Magnitude::from_slice(self.magnitude());
        let mut reversed: Vec<u8> = Vec::with_capacity(mag.len() * 20);

        while !mag.is_empty() {
            let mut r = digits::div_rem_digit_in_place(&mut mag, power);
            if mag.is_empty() {
                while r > 0 {
                    reversed.push(digit_char(r % base));
                    r /= base;
                }
            } else {
                for _ in 0..per_chunk {
                    reversed.push(digit_char(r % base));
                    r /= base;
                }
            }
        }

        reversed.iter().rev().map(|&b| char::from(b)).collect()
    }
}

fn digit_char(d: Digit) -> u8 {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    DIGITS[d as usize]
}

pub(crate) fn write_rendered(rendered: &str, buf: &mut [u8]) -> Result<usize> {
    let len = rendered.len();
    if buf.len() < len {
        return Err(ArithError::BufferTooSmall { required: len });
    }
    buf[..len].copy_from_slice(rendered.as_bytes());
    Ok(len)
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.render_magnitude(10))
    }
}

impl fmt::Binary for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.render_magnitude(2))
    }
}

impl fmt::Octal for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.render_magnitude(8))
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.render_magnitude(16))
    }
}

impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.render_magnitude(16).to_ascii_lowercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl FromStr for Integer {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}
