//! Errors produced by libpolydrill, and the diagnostic codes they map to.

use crate::diagnostics::{DiagnosticRecord, DiagnosticRegistry};

use thiserror::Error;

/// An exact arithmetic operation could not produce a value.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArithmeticError {
    /// A fraction was constructed with a zero denominator, or a value was divided by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The reduced result does not fit in a 64-bit numerator and denominator.
    #[error("arithmetic overflow: the exact result does not fit in a 64-bit fraction")]
    Overflow,
}

/// Value text could not be read back into a [`Rational`](crate::Rational).
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error(r#"malformed value text "{0}""#)]
    MalformedValueText(String),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A [`ProblemConfig`](crate::ProblemConfig) was rejected before generation.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ConfigError {
    #[error("invalid {bound} bounds: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        bound: &'static str,
        min: i64,
        max: i64,
    },
    #[error("{what} {value} exceeds the limit of {limit}")]
    ExceedsLimit {
        what: &'static str,
        value: u128,
        limit: u128,
    },
}

/// Any libpolydrill failure.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ArithmeticError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => DivisionByZero::CODE,
            Self::Overflow => Overflow::CODE,
        }
    }
}

impl Error {
    /// The diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arithmetic(e) | Self::Parse(ParseError::Arithmetic(e)) => e.code(),
            Self::Parse(ParseError::MalformedValueText(_)) => MalformedValueText::CODE,
            Self::Config(ConfigError::InvertedRange { .. }) => InvertedRange::CODE,
            Self::Config(ConfigError::ExceedsLimit { .. }) => ExceedsLimit::CODE,
        }
    }
}

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        pub struct PolydrillErrors;

        impl DiagnosticRegistry for PolydrillErrors {
            #[allow(clippy::vec_init_then_push)]
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }
    };
}

define_errors! {
    ///This error fires when a fraction would have a zero denominator.
    ///
    ///Fractions are constructed with a numerator and a non-zero denominator, for example
    ///
    ///```text
    ///\frac{3}{4}
    ///```
    ///
    ///Writing "\frac{3}{0}", or dividing any value by a value equal to zero, has no exact
    ///answer. When this happens during problem generation, the whole batch is aborted and no
    ///problems are produced.
    E0001: DivisionByZero

    ///This error fires when the exact answer to a problem is too large to represent.
    ///
    ///Answers are kept as reduced fractions with 64-bit numerators and denominators. Evaluating a
    ///high-degree polynomial at a fraction with a large denominator can exceed that range; for
    ///example, evaluating a degree-30 polynomial at
    ///
    ///```text
    ///\frac{1}{9}
    ///```
    ///
    ///needs a denominator of 9^30. Lower the maximum degree or narrow the numerator and
    ///denominator bounds.
    E0002: Overflow

    ///This error fires when a value cannot be read as an integer or a fraction.
    ///
    ///Values are accepted in one of the forms
    ///
    ///```text
    ///-3
    ///\frac{1}{2}
    ///1/2
    ///```
    ///
    ///Any other text, like "\frac{1}{x}" or "0.5", is rejected.
    E0003: MalformedValueText

    ///This error fires when a configured range has a minimum larger than its maximum.
    ///
    ///Problem configurations bound the polynomial degree, the numerators, and the denominators
    ///of evaluation points with inclusive ranges. A range like
    ///
    ///```text
    ///min degree = 4
    ///max degree = 2
    ///```
    ///
    ///contains no values, and is rejected before any problem is generated. Note that empty
    ///candidate sets that arise from valid ranges, such as only allowing fractions with
    ///denominators in [-1, 1], are not errors; the evaluation point falls back to 0.
    E0004: InvertedRange

    ///This error fires when a configuration asks for more than problem generation supports.
    ///
    ///The limits are
    ///
    ///```text
    ///degree            at most 256
    ///value magnitude   at most 9223372036854775807
    ///candidate count   at most 1000000
    ///```
    ///
    ///Value bounds must not be -9223372036854775808, whose magnitude does not fit in a value.
    ///The candidate count is the number of integers in the numerator bounds when integers are
    ///allowed, plus that number times the number of integers in the denominator bounds when
    ///fractions are allowed. Narrow the bounds, or allow fewer kinds of values, to stay within it.
    E0005: ExceedsLimit
}
