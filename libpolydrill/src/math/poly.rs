use crate::errors::ArithmeticError;
use crate::math::Rational;

use num_traits::{One, Zero};

/// A polynomial in `x` with integer coefficients.
///
/// Coefficients are indexed by exponent, so `coeffs[0]` is the constant term.
#[derive(Default, Clone, Eq, PartialEq, Debug)]
pub struct Poly {
    coeffs: Vec<i64>,
}

impl From<Vec<i64>> for Poly {
    fn from(v: Vec<i64>) -> Poly {
        Self::new(v)
    }
}

impl From<&[i64]> for Poly {
    fn from(v: &[i64]) -> Poly {
        Self::new(v.to_vec())
    }
}

/// Creates a new polynomial from coefficients in ascending exponent order.
///
/// # Examples:
///
/// ```
/// use libpolydrill::poly;
///
/// assert_eq!(poly![3, 2].coeffs(), &[3, 2]); // 2x + 3
/// assert_eq!(poly![-4, 0, 1].deg(), 2); // x^2 - 4
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),+ $(,)?) => (
        $crate::Poly::new(vec![$($x),+])
    );
}

impl Poly {
    pub fn new(coeffs: Vec<i64>) -> Self {
        Self { coeffs }
    }

    /// Coefficients in ascending exponent order.
    #[inline]
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Gets the degree of the polynomial, the highest exponent it holds a coefficient for.
    /// A polynomial with no coefficients has degree 0.
    #[inline]
    pub fn deg(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns the leading coefficient, i.e. the coefficient of the highest-degree term.
    /// If the polynomial has no coefficients, the leading coefficient is 0.
    #[inline]
    pub fn lc(&self) -> i64 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// Evaluates the polynomial exactly at a value `x`.
    ///
    /// Powers of `x` are accumulated by repeated multiplication starting from 1; an empty
    /// polynomial evaluates to 0.
    ///
    /// # Examples:
    ///
    /// ```
    /// use libpolydrill::{poly, Rational};
    ///
    /// // (2x + 3)(1/2) -> 4
    /// assert_eq!(poly![3, 2].eval(Rational::new(1, 2)?)?, Rational::from(4));
    /// # Ok::<(), libpolydrill::ArithmeticError>(())
    /// ```
    pub fn eval(&self, x: Rational) -> Result<Rational, ArithmeticError> {
        let mut result = Rational::zero();
        let mut power = Rational::one();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                power = power.checked_mul(x)?;
            }
            if c != 0 {
                result = result.checked_add(power.checked_mul(Rational::from(c))?)?;
            }
        }
        Ok(result)
    }
}
