//! Unsigned magnitude primitives.
//!
//! A magnitude is a little-endian sequence of 64-bit digits without a
//! most-significant zero digit. Zero is the empty sequence. Every function
//! here accepts trimmed input and returns trimmed output unless noted.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// A single digit of a magnitude.
pub type Digit = u64;

/// Width of a [`Digit`] in bits.
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Digit storage. Values up to 128 bits stay inline.
pub type Magnitude = SmallVec<[Digit; 2]>;

/// Below this operand length schoolbook multiplication wins.
const KARATSUBA_THRESHOLD: usize = 32;

/// Drops most-significant zero digits.
pub(crate) fn trim(mag: &mut Magnitude) {
    while mag.last() == Some(&0) {
        mag.pop();
    }
}

/// Returns the slice without its most-significant zero digits.
fn trimmed(digits: &[Digit]) -> &[Digit] {
    let len = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
    &digits[..len]
}

pub(crate) fn from_u128(value: u128) -> Magnitude {
    let mut mag: Magnitude = smallvec![value as Digit, (value >> DIGIT_BITS) as Digit];
    trim(&mut mag);
    mag
}

/// Compares two magnitudes.
pub(crate) fn cmp(a: &[Digit], b: &[Digit]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Number of significant bits.
pub(crate) fn bit_len(a: &[Digit]) -> u64 {
    match a.last() {
        None => 0,
        Some(&top) => {
            (a.len() as u64 - 1) * u64::from(DIGIT_BITS) + u64::from(DIGIT_BITS - top.leading_zeros())
        }
    }
}

/// Bit `index` of the magnitude.
pub(crate) fn test_bit(a: &[Digit], index: u64) -> bool {
    let digit = index / u64::from(DIGIT_BITS);
    let Ok(digit) = usize::try_from(digit) else {
        return false;
    };
    a.get(digit)
        .is_some_and(|&d| (d >> (index % u64::from(DIGIT_BITS))) & 1 == 1)
}

pub(crate) fn count_ones(a: &[Digit]) -> u64 {
    a.iter().map(|d| u64::from(d.count_ones())).sum()
}

pub(crate) fn add(a: &[Digit], b: &[Digit]) -> Magnitude {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Magnitude::with_capacity(long.len() + 1);
    let mut carry = false;

    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (s, c1) = x.overflowing_add(y);
        let (s, c2) = s.overflowing_add(Digit::from(carry));
        out.push(s);
        carry = c1 || c2;
    }

    if carry {
        out.push(1);
    }
    out
}

/// Computes `a - b`. Requires `a >= b`.
pub(crate) fn sub(a: &[Digit], b: &[Digit]) -> Magnitude {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut out = Magnitude::with_capacity(a.len());
    let mut borrow = false;

    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        let (d, b1) = x.overflowing_sub(y);
        let (d, b2) = d.overflowing_sub(Digit::from(borrow));
        out.push(d);
        borrow = b1 || b2;
    }

    trim(&mut out);
    out
}

/// Adds `x * BASE^shift` into `acc`, growing it as needed.
fn add_shifted(acc: &mut Magnitude, x: &[Digit], shift: usize) {
    if x.is_empty() {
        return;
    }
    if acc.len() < shift + x.len() {
        acc.resize(shift + x.len(), 0);
    }

    let mut carry = false;
    for (i, &y) in x.iter().enumerate() {
        let (s, c1) = acc[shift + i].overflowing_add(y);
        let (s, c2) = s.overflowing_add(Digit::from(carry));
        acc[shift + i] = s;
        carry = c1 || c2;
    }

    let mut k = shift + x.len();
    while carry {
        if k == acc.len() {
            acc.push(1);
            break;
        }
        let (s, c) = acc[k].overflowing_add(1);
        acc[k] = s;
        carry = c;
        k += 1;
    }
}

pub(crate) fn mul(a: &[Digit], b: &[Digit]) -> Magnitude {
    if a.is_empty() || b.is_empty() {
        return Magnitude::new();
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.len() >= KARATSUBA_THRESHOLD && long.len() < 2 * short.len() {
        karatsuba(a, b)
    } else {
        schoolbook(a, b)
    }
}

fn schoolbook(a: &[Digit], b: &[Digit]) -> Magnitude {
    let mut out: Magnitude = smallvec![0; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: u128 = 0;
        for (j, &y) in b.iter().enumerate() {
            let t = u128::from(x) * u128::from(y) + u128::from(out[i + j]) + carry;
            out[i + j] = t as Digit;
            carry = t >> DIGIT_BITS;
        }
        out[i + b.len()] = carry as Digit;
    }

    trim(&mut out);
    out
}

/// Karatsuba multiplication for balanced operands.
fn karatsuba(a: &[Digit], b: &[Digit]) -> Magnitude {
    let half = a.len().max(b.len()) / 2;
    let split = |x: &'_ [Digit]| -> (Magnitude, Magnitude) {
        let cut = half.min(x.len());
        (
            Magnitude::from_slice(trimmed(&x[..cut])),
            Magnitude::from_slice(&x[cut..]),
        )
    };
    let (a0, a1) = split(a);
    let (b0, b1) = split(b);

    // z1 = (a0 + a1)(b0 + b1) - z0 - z2
    let z0 = mul(&a0, &b0);
    let z2 = mul(&a1, &b1);
    let cross = mul(&add(&a0, &a1), &add(&b0, &b1));
    let z1 = sub(&sub(&cross, &z0), &z2);

    let mut out = Magnitude::with_capacity(a.len() + b.len() + 1);
    out.extend_from_slice(&z0);
    add_shifted(&mut out, &z1, half);
    add_shifted(&mut out, &z2, 2 * half);
    trim(&mut out);
    out
}

/// Computes `mag = mag * m + a` in place.
pub(crate) fn mul_add_digit(mag: &mut Magnitude, m: Digit, a: Digit) {
    let mut carry = u128::from(a);
    for d in mag.iter_mut() {
        let t = u128::from(*d) * u128::from(m) + carry;
        *d = t as Digit;
        carry = t >> DIGIT_BITS;
    }
    if carry != 0 {
        mag.push(carry as Digit);
    }
    trim(mag);
}

/// Divides in place by a single non-zero digit and returns the remainder.
pub(crate) fn div_rem_digit_in_place(mag: &mut Magnitude, d: Digit) -> Digit {
    debug_assert!(d != 0);
    let d = u128::from(d);
    let mut rem: u128 = 0;
    for x in mag.iter_mut().rev() {
        let cur = (rem << DIGIT_BITS) | u128::from(*x);
        *x = (cur / d) as Digit;
        rem = cur % d;
    }
    trim(mag);
    rem as Digit
}

pub(crate) fn shl(a: &[Digit], n: u64) -> Magnitude {
    if a.is_empty() {
        return Magnitude::new();
    }
    let digit_shift = (n / u64::from(DIGIT_BITS)) as usize;
    let bit_shift = (n % u64::from(DIGIT_BITS)) as u32;

    let mut out = Magnitude::with_capacity(a.len() + digit_shift + 1);
    out.resize(digit_shift, 0);
    if bit_shift == 0 {
        out.extend_from_slice(a);
    } else {
        let mut carry = 0;
        for &x in a {
            out.push((x << bit_shift) | carry);
            carry = x >> (DIGIT_BITS - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    out
}

pub(crate) fn shr(a: &[Digit], n: u64) -> Magnitude {
    let digit_shift = n / u64::from(DIGIT_BITS);
    if digit_shift >= a.len() as u64 {
        return Magnitude::new();
    }
    let src = &a[digit_shift as usize..];
    let bit_shift = (n % u64::from(DIGIT_BITS)) as u32;
    if bit_shift == 0 {
        return Magnitude::from_slice(src);
    }

    let mut out = Magnitude::with_capacity(src.len());
    for (i, &x) in src.iter().enumerate() {
        let hi = src.get(i + 1).copied().unwrap_or(0);
        out.push((x >> bit_shift) | (hi << (DIGIT_BITS - bit_shift)));
    }
    trim(&mut out);
    out
}

/// Truncating division of magnitudes: returns `(u / v, u % v)`.
///
/// Uses Knuth's algorithm D with 128-bit intermediate products.
///
/// # Panics
///
/// Panics if `v` is zero.
pub(crate) fn div_rem(u: &[Digit], v: &[Digit]) -> (Magnitude, Magnitude) {
    assert!(!v.is_empty(), "magnitude division by zero");

    if cmp(u, v) == Ordering::Less {
        return (Magnitude::new(), Magnitude::from_slice(u));
    }

    if v.len() == 1 {
        let mut q = Magnitude::from_slice(u);
        let r = div_rem_digit_in_place(&mut q, v[0]);
        let mut r: Magnitude = smallvec![r];
        trim(&mut r);
        return (q, r);
    }

    // Normalise so the top divisor digit has its high bit set.
    let shift = v[v.len() - 1].leading_zeros();
    let v = shl(v, u64::from(shift));
    let mut un = shl(u, u64::from(shift));
    un.resize(u.len() + 1, 0);

    let n = v.len();
    let m = u.len() - n;
    let base: u128 = 1 << DIGIT_BITS;
    let v_top = u128::from(v[n - 1]);
    let v_next = u128::from(v[n - 2]);
    let mut q: Magnitude = smallvec![0; m + 1];

    for j in (0..=m).rev() {
        let num = (u128::from(un[j + n]) << DIGIT_BITS) | u128::from(un[j + n - 1]);
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;

        while qhat >= base || qhat * v_next > ((rhat << DIGIT_BITS) | u128::from(un[j + n - 2])) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= base {
                break;
            }
        }

        // Multiply and subtract qhat * v from the current window.
        let mut borrow: i128 = 0;
        let mut carry: u128 = 0;
        for i in 0..n {
            let p = qhat * u128::from(v[i]) + carry;
            carry = p >> DIGIT_BITS;
            let t = i128::from(un[i + j]) - borrow - i128::from(p as Digit);
            un[i + j] = t as Digit;
            borrow = i128::from(t < 0);
        }
        let t = i128::from(un[j + n]) - borrow - carry as i128;
        un[j + n] = t as Digit;

        if t < 0 {
            // qhat was one too large; add the divisor back.
            qhat -= 1;
            let mut c: u128 = 0;
            for i in 0..n {
                let s = u128::from(un[i + j]) + u128::from(v[i]) + c;
                un[i + j] = s as Digit;
                c = s >> DIGIT_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(c as Digit);
        }

        q[j] = qhat as Digit;
    }

    trim(&mut q);
    let r = shr(trimmed(&un[..n]), u64::from(shift));
    (q, r)
}
