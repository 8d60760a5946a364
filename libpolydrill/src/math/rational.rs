use crate::errors::ArithmeticError;
use crate::math::gcd;

use core::convert::TryFrom;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// An exact fraction, always stored in lowest terms with a positive denominator.
///
/// Zero is represented as `0/1`. Arithmetic widens to `i128` before reducing, so only results
/// whose *reduced* form exceeds `i64` fail with [`ArithmeticError::Overflow`].
///
/// # Examples:
///
/// ```
/// use libpolydrill::Rational;
///
/// let half = Rational::new(2, -4).unwrap();
/// assert_eq!((half.numer(), half.denom()), (-1, 2));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    n: i64,
    d: i64,
}

impl Rational {
    /// Creates a reduced fraction `n/d`, failing when `d` is zero.
    pub fn new(n: i64, d: i64) -> Result<Self, ArithmeticError> {
        Self::reduce(n as i128, d as i128)
    }

    /// Normalizes a wide fraction: positive denominator, lowest terms, then narrows to `i64`.
    fn reduce(mut n: i128, mut d: i128) -> Result<Self, ArithmeticError> {
        if d == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if d < 0 {
            n = -n;
            d = -d;
        }
        let g = gcd(n, d);
        let narrow = |v: i128| i64::try_from(v / g).map_err(|_| ArithmeticError::Overflow);
        Ok(Self {
            n: narrow(n)?,
            d: narrow(d)?,
        })
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        self.n
    }

    #[inline]
    pub fn denom(&self) -> i64 {
        self.d
    }

    /// Whether the value has no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.d == 1
    }

    pub fn checked_add(self, other: Self) -> Result<Self, ArithmeticError> {
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * d + c * b, b * d)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, ArithmeticError> {
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * d - c * b, b * d)
    }

    pub fn checked_mul(self, other: Self) -> Result<Self, ArithmeticError> {
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * c, b * d)
    }

    /// Divides `self` by `other`, failing when `other` is zero.
    pub fn checked_div(self, other: Self) -> Result<Self, ArithmeticError> {
        if other.n == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * d, b * c)
    }

    /// `(self.n, self.d, other.n, other.d)`, widened so that any pairwise product and the sum of
    /// two such products cannot overflow.
    #[inline]
    fn widen(self, other: Self) -> (i128, i128, i128, i128) {
        (
            self.n as i128,
            self.d as i128,
            other.n as i128,
            other.d as i128,
        )
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self { n, d: 1 }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self { n: 0, d: 1 }
    }

    fn is_zero(&self) -> bool {
        self.n == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self { n: 1, d: 1 }
    }
}

/// Implements an operator on `Rational` in terms of its checked counterpart. Like the primitive
/// integer operators, these panic when the checked operation fails.
macro_rules! rational_op_impl {
    ($($op:ident::$method:ident => $checked:ident)*) => {$(
        impl $op for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                match self.$checked(other) {
                    Ok(r) => r,
                    Err(e) => panic!("attempt to {} {} and {}: {}", stringify!($method), self, other, e),
                }
            }
        }
    )*};
}

rational_op_impl! {
    Add::add => checked_add
    Sub::sub => checked_sub
    Mul::mul => checked_mul
    Div::div => checked_div
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        // -i64::MIN is out of range.
        match Self::reduce(-(self.n as i128), self.d as i128) {
            Ok(r) => r,
            Err(e) => panic!("attempt to negate {}: {}", self, e),
        }
    }
}
