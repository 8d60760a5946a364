//! Random polynomial-evaluation practice problems with exact fractional answers.
//!
//! libpolydrill is organized leaves-first:
//!
//! - [math](crate::Rational): exact fractions and integer polynomials evaluated over them.
//! - [generator](crate::generate_problems): random evaluation points, polynomials and problems,
//!   drawn from an injected random source.
//! - [emit](crate::Emit) and [parse](crate::parse_value): LaTeX and plain-text markup.
//! - [diagnostics]: coded, explainable errors for front ends.

pub mod diagnostics;

mod errors;
pub use errors::{ArithmeticError, ConfigError, Error, ParseError};

mod config;
pub use config::{ProblemConfig, MAX_CANDIDATES, MAX_DEGREE};

mod math;
pub use math::*;

mod generator;
pub use generator::{
    candidates, generate_polynomial, generate_problem, generate_problems, random_point, Point,
    Problem, ProblemSheet, ProblemSink, ValueBounds, MAX_COEFF,
};

mod emit;
pub use emit::{Emit, EmitFormat};

mod parser;
pub use parser::parse_value;

mod proptests;
