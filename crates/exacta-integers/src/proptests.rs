//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{boole, BooleOp, Integer, Rational, SignDisplay};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for multi-digit integers of either sign
    fn big_int() -> impl Strategy<Value = Integer> {
        (any::<bool>(), prop::collection::vec(any::<u64>(), 0..6)).prop_map(|(negative, words)| {
            let magnitude = words.iter().fold(Integer::zero(), |acc, &w| {
                acc.ash(64).unwrap() + Integer::from(w)
            });
            if negative {
                -magnitude
            } else {
                magnitude
            }
        })
    }

    fn non_zero_big_int() -> impl Strategy<Value = Integer> {
        big_int().prop_filter("non-zero", |n| !n.is_zero())
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (big_int(), non_zero_big_int()).prop_map(|(n, d)| {
            let (n, d) = if d.is_negative() { (-n, -d) } else { (n, d) };
            Rational::new(n, d).unwrap()
        })
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn integer_mul_associative(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn integer_additive_inverse(a in big_int()) {
            prop_assert!((&a + -&a).is_zero());
            prop_assert_eq!(&a - &a, Integer::zero());
        }

        #[test]
        fn integer_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (i128::from(a), i128::from(b));
            prop_assert_eq!(Integer::new(a) + Integer::new(b), Integer::from(x + y));
            prop_assert_eq!(Integer::new(a) - Integer::new(b), Integer::from(x - y));
            prop_assert_eq!(Integer::new(a) * Integer::new(b), Integer::from(x * y));
            prop_assert_eq!(Integer::new(a).compare(&Integer::new(b)), a.cmp(&b));
        }

        // Division

        #[test]
        fn floor_division_identity(a in big_int(), b in non_zero_big_int()) {
            let q = a.div_floor(&b).unwrap();
            let r = a.modulo(&b).unwrap();
            prop_assert_eq!(&b * &q + &r, a);
            prop_assert!(r.is_zero() || r.sign() == b.sign());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn truncating_division_identity(a in big_int(), b in non_zero_big_int()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&b * &q + &r, a.clone());
            prop_assert!(r.is_zero() || r.sign() == a.sign());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn ceiling_is_floor_plus_one(a in big_int(), b in non_zero_big_int()) {
            let floor = a.div_floor(&b).unwrap();
            let ceil = a.div_ceil(&b).unwrap();
            if a.modulo(&b).unwrap().is_zero() {
                prop_assert_eq!(ceil, floor);
            } else {
                prop_assert_eq!(ceil, floor + Integer::one());
            }
        }

        #[test]
        fn rounding_is_nearest(a in big_int(), b in non_zero_big_int()) {
            let q = a.div_round(&b).unwrap();
            let error = (&a - &q * &b).abs();
            prop_assert!(error.ash(1).unwrap() <= b.abs());
        }

        #[test]
        fn small_division_matches_i64(a in small_int(), b in non_zero_int()) {
            let floor = if a % b != 0 && (a < 0) != (b < 0) { a / b - 1 } else { a / b };
            prop_assert_eq!(Integer::new(a).div_floor(&Integer::new(b)).unwrap(), Integer::new(floor));
            prop_assert_eq!(Integer::new(a).checked_rem(&Integer::new(b)).unwrap(), Integer::new(a % b));
            prop_assert_eq!(Integer::new(a).checked_div(&Integer::new(b)).unwrap(), Integer::new(a / b));
        }

        // GCD, roots, powers

        #[test]
        fn gcd_divides_both(a in non_zero_big_int(), b in non_zero_big_int()) {
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
            prop_assert_eq!(&g * a.lcm(&b), (&a * &b).abs());
        }

        #[test]
        fn sqrt_brackets_input(a in big_int()) {
            let n = a.abs();
            let r = n.sqrt().unwrap();
            prop_assert!(&r * &r <= n);
            let next = &r + Integer::one();
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn mod_exp_matches_pow(base in small_int(), exponent in 0i64..20, modulus in 1i64..1000) {
            let m = Integer::new(modulus);
            let expected = Integer::new(base).pow(exponent).unwrap().modulo(&m).unwrap();
            prop_assert_eq!(
                Integer::new(base).mod_exp(&Integer::new(exponent), &m).unwrap(),
                expected
            );
        }

        // Numerals

        #[test]
        fn radix_round_trip(a in big_int(), base in 2u32..=36) {
            let text = a.to_string_radix(base, SignDisplay::Negative).unwrap();
            prop_assert_eq!(Integer::from_str_radix(&text, base).unwrap(), a.clone());
            let forced = a.to_string_radix(base, SignDisplay::Always).unwrap();
            prop_assert_eq!(Integer::from_str_radix(&forced, base).unwrap(), a);
        }

        #[test]
        fn decimal_matches_i64(a in any::<i64>()) {
            prop_assert_eq!(Integer::new(a).to_string(), a.to_string());
            prop_assert_eq!(Integer::new(a).to_f64(), a as f64);
        }

        // Bitwise logic

        #[test]
        fn boole_matches_i64(a in any::<i64>(), b in any::<i64>()) {
            for op in BooleOp::ALL {
                let expected = op.apply(a as u64, b as u64) as i64;
                prop_assert_eq!(boole(op, &Integer::new(a), &Integer::new(b)), Integer::new(expected));
            }
        }

        #[test]
        fn de_morgan(a in big_int(), b in big_int()) {
            prop_assert_eq!(!(&a & &b), !&a | !&b);
            prop_assert_eq!(!(&a | &b), !&a & !&b);
            prop_assert_eq!(&a ^ &b, (&a | &b).bit_and_c2(&(&a & &b)));
        }

        #[test]
        fn ash_is_floor_of_power_of_two(a in big_int(), shift in 0i64..200) {
            let power = Integer::one().ash(shift).unwrap();
            prop_assert_eq!(a.ash(shift).unwrap(), &a * &power);
            prop_assert_eq!(a.ash(-shift).unwrap(), a.div_floor(&power).unwrap());
        }

        #[test]
        fn bits_match_i64(a in any::<i64>(), index in 0u64..64) {
            prop_assert_eq!(Integer::new(a).test_bit(index), (a >> index) & 1 == 1);
            let expected = if a < 0 { (!a).count_ones() } else { a.count_ones() };
            prop_assert_eq!(Integer::new(a).bit_count(), u64::from(expected));
        }

        // Rational field axioms

        #[test]
        fn rational_canonical_form(r in rational()) {
            prop_assert!(r.denominator().is_positive());
            prop_assert!(r.numerator().gcd(r.denominator()).is_one());
        }

        #[test]
        fn rational_results_stay_canonical(a in rational(), b in rational()) {
            for r in [&a + &b, &a - &b, &a * &b] {
                prop_assert!(r.denominator().is_positive());
                prop_assert!(r.numerator().gcd(r.denominator()).is_one());
            }
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
        }

        #[test]
        fn rational_multiplicative_inverse(a in rational()) {
            prop_assume!(!a.is_zero());
            prop_assert!((&a * a.inverse().unwrap()).is_one());
            prop_assert_eq!(a.checked_div(&a).unwrap(), Rational::one());
        }

        #[test]
        fn rational_order_matches_f64(
            num_a in small_int(),
            den_a in 1i64..1000,
            num_b in small_int(),
            den_b in 1i64..1000
        ) {
            let a = Rational::new(Integer::new(num_a), Integer::new(den_a)).unwrap();
            let b = Rational::new(Integer::new(num_b), Integer::new(den_b)).unwrap();
            if a < b {
                prop_assert!(a.to_f64() <= b.to_f64());
            }
            prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        }

        #[test]
        fn rational_string_round_trip(r in rational(), base in 2u32..=36) {
            let text = r.to_string_radix(base, SignDisplay::Negative).unwrap();
            prop_assert_eq!(Rational::from_str_radix(&text, base).unwrap(), r);
        }

        #[test]
        fn rational_floor_brackets(r in rational()) {
            let floor = Rational::from_integer(r.floor());
            prop_assert!(floor <= r);
            prop_assert!(r < floor + Rational::one());
        }

        #[test]
        fn from_f64_respects_bound(x in -1e6f64..1e6, max_den in 1i64..10_000) {
            let r = Rational::from_f64(x, max_den).unwrap();
            prop_assert!(r.denominator() <= &Integer::new(max_den));
            // Both bounds around x are within 1/max_den of it.
            prop_assert!((r.to_f64() - x).abs() <= 1.0 / max_den as f64 + 1e-9);
        }
    }
}
