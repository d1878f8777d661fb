//! Rational literals: `[sign]numerator[/denominator]` in bases 2..36, plus
//! exact decimal notation.

use std::fmt;
use std::str::FromStr;

use super::Rational;
use crate::config::DenominatorPolicy;
use crate::error::{ArithError, ParseError, Result};
use crate::integer::Integer;
use crate::radix::{check_base, write_rendered, SignDisplay, Terminator};

fn is_leading_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

fn is_sign(ch: char) -> bool {
    ch == '+' || ch == '-'
}

/// Moves the position of an `InvalidDigit` error by `offset` bytes.
fn shift_position(err: ArithError, offset: usize) -> ArithError {
    match err {
        ArithError::Parse(ParseError::InvalidDigit { ch, position }) => {
            ParseError::InvalidDigit {
                ch,
                position: position + offset,
            }
            .into()
        }
        other => other,
    }
}

fn parse_radix(s: &str, base: u32) -> Result<Rational> {
    check_base(base)?;
    let body = s.trim_start_matches(is_leading_space);
    let offset = s.len() - body.len();

    let unsigned = body.strip_prefix(is_sign).unwrap_or(body);
    if unsigned.starts_with(is_sign) {
        return Err(ParseError::MisplacedSign.into());
    }
    if unsigned.is_empty() {
        return Err(if body.is_empty() {
            ParseError::Empty
        } else {
            ParseError::MissingDigits
        }
        .into());
    }

    let Some(slash) = body.find('/') else {
        let n = Integer::parse_until(body, base, Terminator::Space)
            .map_err(|err| shift_position(err, offset))?;
        return Ok(Rational::from_integer(n));
    };

    let denominator = &body[slash + 1..];
    if denominator.starts_with(|ch: char| is_sign(ch) || ch == ' ') {
        return Err(ParseError::MalformedDenominator.into());
    }

    let n = Integer::parse_until(body, base, Terminator::Slash).map_err(|err| match err {
        ArithError::Parse(ParseError::Empty | ParseError::MissingDigits) => {
            ParseError::MissingNumerator.into()
        }
        other => shift_position(other, offset),
    })?;
    let d = Integer::parse_until(denominator, base, Terminator::Space).map_err(|err| match err {
        ArithError::Parse(ParseError::Empty | ParseError::MissingDigits) => {
            ParseError::MalformedDenominator.into()
        }
        other => shift_position(other, offset + slash + 1),
    })?;

    Rational::with_policy(n, d, DenominatorPolicy::Strict)
}

fn parse_decimal(s: &str) -> Result<Rational> {
    let body = s.trim_start_matches(is_leading_space);
    let offset = s.len() - body.len();

    let (mantissa, exponent) = match body.find(|ch: char| ch == 'e' || ch == 'E') {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    let negative = mantissa.starts_with('-');
    let unsigned = mantissa.strip_prefix(is_sign).unwrap_or(mantissa);
    let sign_len = mantissa.len() - unsigned.len();
    if unsigned.starts_with(is_sign) {
        return Err(ParseError::MisplacedSign.into());
    }

    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(if sign_len == 0 && exponent.is_none() && unsigned.is_empty() {
            ParseError::Empty
        } else {
            ParseError::MissingDigits
        }
        .into());
    }

    let mut digits = String::with_capacity(whole.len() + fraction.len());
    for (index, ch) in unsigned.char_indices() {
        if index == whole.len() {
            continue;
        }
        if !ch.is_ascii_digit() {
            return Err(ParseError::InvalidDigit {
                ch,
                position: offset + sign_len + index,
            }
            .into());
        }
        digits.push(ch);
    }

    let mut value = Integer::from_str_radix(&digits, 10)?;
    if negative {
        value = -value;
    }

    let exponent = match exponent {
        Some(text) => text
            .parse::<i64>()
            .map_err(|_| ParseError::MalformedExponent)?,
        None => 0,
    };
    let fraction_len = i64::try_from(fraction.len()).map_err(|_| ParseError::MalformedExponent)?;
    let scale = exponent
        .checked_sub(fraction_len)
        .ok_or(ParseError::MalformedExponent)?;

    let ten = Integer::new(10);
    if scale >= 0 {
        Ok(Rational::from_integer(value * ten.pow(scale)?))
    } else {
        let places = scale.checked_neg().ok_or(ParseError::MalformedExponent)?;
        Ok(Rational::canonical(value, ten.pow(places)?))
    }
}

impl Rational {
    /// Parses `[sign]numerator[/denominator]` in `base`.
    ///
    /// Leading whitespace is skipped. The denominator must follow the `/`
    /// directly and carry no sign. Parsing of each part stops at the first
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed input, [`ArithError::InvalidBase`]
    /// for an unsupported base and [`ArithError::InvalidDenominator`] for a
    /// zero denominator.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self> {
        parse_radix(s, base).map_err(|err| {
            tracing::debug!(input = s, base, %err, "rejected rational literal");
            err
        })
    }

    /// Parses an exact decimal such as `-12.375` or `6.02e23`.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed input and
    /// [`ArithError::OutOfMemory`] if the exponent is too large to expand.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        parse_decimal(s).map_err(|err| {
            tracing::debug!(input = s, %err, "rejected decimal literal");
            err
        })
    }

    /// Renders `numerator/denominator` in `base`, or just the numerator for
    /// an integral value. Only the numerator carries a sign.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::InvalidBase`] unless `2 <= base <= 36`.
    pub fn to_string_radix(&self, base: u32, sign: SignDisplay) -> Result<String> {
        check_base(base)?;
        Ok(self.render(base, sign))
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

    fn render(&self, base: u32, sign: SignDisplay) -> String {
        let mut out = self.num.render_signed(base, sign);
        if !self.is_integer() {
            out.push('/');
            out.push_str(&self.den.render_signed(base, SignDisplay::Negative));
        }
        out
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if f.sign_plus() {
            SignDisplay::Always
        } else {
            SignDisplay::Negative
        };
        f.pad(&self.render(10, sign))
    }
}

impl FromStr for Rational {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}
