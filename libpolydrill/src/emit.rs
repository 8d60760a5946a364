//! Emit strategies for libpolydrill values.

use crate::generator::Point;
use crate::math::{Poly, Rational};

use core::fmt;

/// The format in which a value should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Plain-text form.
    /// For example, one half is output as `1/2` and `x` squared as `x^2`.
    Pretty,
    /// LaTeX math mode form, ready for a typesetter like MathJax.
    /// For example, one half is output as `\frac{1}{2}` and `x` squared as `x^{2}`.
    Latex,
}

impl Default for EmitFormat {
    fn default() -> Self {
        Self::Latex
    }
}

impl From<&str> for EmitFormat {
    fn from(s: &str) -> Self {
        match s {
            "pretty" => Self::Pretty,
            _ => Self::Latex,
        }
    }
}

impl From<String> for EmitFormat {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    // Display is trivially implementable using `emit_pretty`, with the `fmt_emit_impl` macro.
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(),
            EmitFormat::Latex => self.emit_latex(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [LaTeX emit format][EmitFormat::Latex]
    fn emit_latex(&self) -> String;
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
#[doc(hidden)]
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty())
            }
        }
    };
}

/// Emits a numerator and denominator as-is, without normalization.
fn emit_fraction(numer: i64, denom: i64, form: EmitFormat) -> String {
    match form {
        EmitFormat::Pretty => format!("{}/{}", numer, denom),
        EmitFormat::Latex => format!("\\frac{{{}}}{{{}}}", numer, denom),
    }
}

fmt_emit_impl!(Rational);
impl Emit for Rational {
    fn emit_pretty(&self) -> String {
        self.emit_value(EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        self.emit_value(EmitFormat::Latex)
    }
}

impl Rational {
    fn emit_value(&self, form: EmitFormat) -> String {
        if self.is_integer() {
            self.numer().to_string()
        } else {
            emit_fraction(self.numer(), self.denom(), form)
        }
    }
}

fmt_emit_impl!(Point);
impl Emit for Point {
    fn emit_pretty(&self) -> String {
        self.emit_value(EmitFormat::Pretty)
    }

    fn emit_latex(&self) -> String {
        self.emit_value(EmitFormat::Latex)
    }
}

impl Point {
    fn emit_value(&self, form: EmitFormat) -> String {
        match *self {
            Point::Int(i) => i.to_string(),
            Point::Frac { numer, denom } => emit_fraction(numer, denom, form),
        }
    }
}

fmt_emit_impl!(Poly);
impl Emit for Poly {
    fn emit_pretty(&self) -> String {
        self.emit_terms(|pow| format!("^{}", pow))
    }

    fn emit_latex(&self) -> String {
        self.emit_terms(|pow| format!("^{{{}}}", pow))
    }
}

impl Poly {
    /// Emits terms from the highest exponent down. Zero terms are skipped, except for the
    /// constant term, which is always written.
    fn emit_terms(&self, emit_pow: impl Fn(usize) -> String) -> String {
        if self.coeffs().is_empty() {
            return "0".to_owned();
        }

        let mut terms = Vec::with_capacity(self.coeffs().len());
        for (i, &coeff) in self.coeffs().iter().enumerate().rev() {
            if coeff == 0 && i != 0 {
                continue;
            }
            let mut term = String::with_capacity(8);
            if coeff == -1 && i != 0 {
                term.push('-');
            } else if coeff != 1 || i == 0 {
                term.push_str(&coeff.to_string());
            }
            if i >= 1 {
                term.push('x');
            }
            if i >= 2 {
                term.push_str(&emit_pow(i));
            }
            terms.push(term);
        }
        // 3x + -2 -> 3x - 2
        terms.join(" + ").replace("+ -", "- ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn emit_rational() {
        let cases = [
            ((4, 1), "4", "4"),
            ((-3, 1), "-3", "-3"),
            ((0, 7), "0", "0"),
            ((1, 2), "\\frac{1}{2}", "1/2"),
            ((3, -6), "\\frac{-1}{2}", "-1/2"),
        ];
        for ((n, d), latex, pretty) in cases.iter() {
            let r = Rational::new(*n, *d).unwrap();
            assert_eq!(r.emit(EmitFormat::Latex), *latex);
            assert_eq!(r.emit(EmitFormat::Pretty), *pretty);
            assert_eq!(r.to_string(), *pretty);
        }
    }

    #[test]
    fn emit_point_raw() {
        let p = Point::Frac {
            numer: 1,
            denom: -2,
        };
        assert_eq!(p.emit_latex(), "\\frac{1}{-2}");
        assert_eq!(p.emit_pretty(), "1/-2");
        assert_eq!(Point::Int(-4).emit_latex(), "-4");
    }

    const POLY_CASES: &[(&[i64], &str, &str)] = &[
        (&[3, 2], "2x + 3", "2x + 3"),
        (&[5], "5", "5"),
        (&[-7], "-7", "-7"),
        (&[0, 0, 1], "x^{2} + 0", "x^2 + 0"),
        (&[-1, -1, -1], "-x^{2} - x - 1", "-x^2 - x - 1"),
        (&[1, 1, 1, 1], "x^{3} + x^{2} + x + 1", "x^3 + x^2 + x + 1"),
        (&[4, 0, -9, 0, 2], "2x^{4} - 9x^{2} + 4", "2x^4 - 9x^2 + 4"),
        (&[-2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3], "3x^{10} - 2", "3x^10 - 2"),
    ];

    #[test]
    fn emit_poly() {
        for (coeffs, latex, pretty) in POLY_CASES.iter() {
            let p = Poly::from(*coeffs);
            assert_eq!(p.emit_latex(), *latex, "{:?}", coeffs);
            assert_eq!(p.emit_pretty(), *pretty, "{:?}", coeffs);
        }
    }

    #[test]
    fn emit_format_from_str() {
        assert_eq!(EmitFormat::from("pretty"), EmitFormat::Pretty);
        assert_eq!(EmitFormat::from("latex"), EmitFormat::Latex);
        assert_eq!(poly![1, -1].emit(EmitFormat::default()), "-x + 1");
    }
}
