use crate::errors::ArithmeticError;
use crate::math::{gcd, Rational};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// An evaluation point, as drawn from a candidate set.
///
/// Fractions keep the numerator and denominator exactly as they were drawn, so a point like
/// `1/-2` is emitted as written. Use [`Point::to_rational`] for arithmetic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Point {
    Int(i64),
    Frac { numer: i64, denom: i64 },
}

impl Point {
    pub fn to_rational(self) -> Result<Rational, ArithmeticError> {
        match self {
            Point::Int(i) => Ok(Rational::from(i)),
            Point::Frac { numer, denom } => Rational::new(numer, denom),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Int(0)
    }
}

/// Inclusive bounds and kinds of evaluation points to draw from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ValueBounds {
    pub numer_min: i64,
    pub numer_max: i64,
    pub denom_min: i64,
    pub denom_max: i64,
    pub allow_int: bool,
    pub allow_frac: bool,
}

/// Enumerates every eligible evaluation point for `bounds`.
///
/// Integers come from the numerator range. Fractions pair every numerator with every denominator
/// `d` where `|d| > 1` and the pair is already coprime, so no value is listed twice and no
/// fraction looks like an integer.
pub fn candidates(bounds: &ValueBounds) -> Vec<Point> {
    let mut choices = Vec::new();

    if bounds.allow_int {
        choices.extend((bounds.numer_min..=bounds.numer_max).map(Point::Int));
    }

    if bounds.allow_frac {
        for numer in bounds.numer_min..=bounds.numer_max {
            for denom in bounds.denom_min..=bounds.denom_max {
                // Widened so that i64::MIN bounds have an absolute value.
                if denom.unsigned_abs() > 1 && gcd(numer as i128, denom as i128) == 1 {
                    choices.push(Point::Frac { numer, denom });
                }
            }
        }
    }

    choices
}

/// Draws an evaluation point uniformly from the [candidates] for `bounds`.
/// If there are no candidates, the point is 0.
pub fn random_point<R: Rng + ?Sized>(bounds: &ValueBounds, rng: &mut R) -> Point {
    let choices = candidates(bounds);
    trace!(candidates = choices.len(), "drawing evaluation point");
    choices.choose(rng).copied().unwrap_or_default()
}
