//! Property-based tests for exact arithmetic and the emit/parse round trip.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{gcd, parse_value, Emit, EmitFormat, Poly, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn construction_normalizes(n in any::<i64>().prop_filter("abs", |n| *n != i64::MIN), d in non_zero_int()) {
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denom() > 0);
            prop_assert_eq!(gcd(r.numer(), r.denom()), 1);
            // Same value as n/d.
            prop_assert_eq!(r.numer() as i128 * d as i128, n as i128 * r.denom() as i128);
        }

        #[test]
        fn add_then_sub_is_identity(a in rational(), b in rational()) {
            prop_assert_eq!(a.checked_add(b).unwrap().checked_sub(b).unwrap(), a);
        }

        #[test]
        fn mul_then_div_is_identity(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!(a.checked_mul(b).unwrap().checked_div(b).unwrap(), a);
        }

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_distributes(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn emit_parse_round_trip(r in rational()) {
            prop_assert_eq!(parse_value(&r.emit(EmitFormat::Latex)).unwrap(), r);
            prop_assert_eq!(parse_value(&r.emit(EmitFormat::Pretty)).unwrap(), r);
        }

        #[test]
        fn eval_linear(c0 in -9i64..=9, c1 in -9i64..=9, x in rational()) {
            let expected = Rational::from(c1) * x + Rational::from(c0);
            prop_assert_eq!(Poly::new(vec![c0, c1]).eval(x).unwrap(), expected);
        }

        #[test]
        fn eval_zero_poly(x in rational()) {
            prop_assert!(Poly::new(vec![0]).eval(x).unwrap().is_zero());
        }
    }
}
