use super::{generate_polynomial, random_point, Point};
use crate::config::ProblemConfig;
use crate::emit::{Emit, EmitFormat};
use crate::errors::{ArithmeticError, Error};
use crate::math::{Poly, Rational};

use rand::Rng;
use tracing::{debug, info};

/// A polynomial evaluation problem: evaluate `poly` at `point`. `value` is the exact answer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Problem {
    pub poly: Poly,
    pub point: Point,
    pub value: Rational,
}

impl Problem {
    /// Builds the problem for `poly` at `point`, computing its answer.
    pub fn new(poly: Poly, point: Point) -> Result<Self, ArithmeticError> {
        let value = poly.eval(point.to_rational()?)?;
        Ok(Self { poly, point, value })
    }

    /// Emits the problem statement, like `f(x) = 2x + 3,\quad x = \frac{1}{2}`.
    pub fn emit_statement(&self, form: EmitFormat) -> String {
        let separator = match form {
            EmitFormat::Latex => ",\\quad",
            EmitFormat::Pretty => ",",
        };
        format!(
            "f(x) = {}{} x = {}",
            self.poly.emit(form),
            separator,
            self.point.emit(form)
        )
    }

    /// Emits the answer, like `f(\frac{1}{2}) = 4`.
    pub fn emit_answer(&self, form: EmitFormat) -> String {
        format!("f({}) = {}", self.point.emit(form), self.value.emit(form))
    }
}

/// A display surface for generated problems.
pub trait ProblemSink {
    /// Appends the `i`-th problem statement and its answer.
    fn push(&mut self, problem: String, answer: String);

    /// Called once, after every problem of a batch has been pushed.
    fn typeset(&mut self) {}
}

/// A [ProblemSink] collecting problems and answers in generation order.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct ProblemSheet {
    pub problems: Vec<String>,
    pub answers: Vec<String>,
    /// Number of times the sheet was typeset.
    pub typeset_passes: usize,
}

impl ProblemSink for ProblemSheet {
    fn push(&mut self, problem: String, answer: String) {
        self.problems.push(problem);
        self.answers.push(answer);
    }

    fn typeset(&mut self) {
        self.typeset_passes += 1;
    }
}

/// Generates one problem: a degree drawn uniformly from the configured range, a polynomial of
/// that degree, then an evaluation point.
///
/// The configuration is validated first; `config.count` is ignored.
pub fn generate_problem<R: Rng + ?Sized>(
    config: &ProblemConfig,
    rng: &mut R,
) -> Result<Problem, Error> {
    config.validate()?;
    Ok(draw_problem(config, rng)?)
}

/// Draws one problem from a configuration that has passed [`ProblemConfig::validate`].
fn draw_problem<R: Rng + ?Sized>(
    config: &ProblemConfig,
    rng: &mut R,
) -> Result<Problem, ArithmeticError> {
    let degree = rng.gen_range(config.min_degree..=config.max_degree) as usize;
    let poly = generate_polynomial(degree, rng);
    let point = random_point(&config.value_bounds(), rng);
    Problem::new(poly, point)
}

/// Generates `config.count` problems, emits them to `sink` in generation order, and typesets the
/// sink once.
///
/// The configuration is validated first. Every problem is generated before any is emitted, so
/// if one fails the sink receives nothing.
pub fn generate_problems<R, S>(
    config: &ProblemConfig,
    form: EmitFormat,
    rng: &mut R,
    sink: &mut S,
) -> Result<(), Error>
where
    R: Rng + ?Sized,
    S: ProblemSink + ?Sized,
{
    config.validate()?;

    let mut problems = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let problem = draw_problem(config, rng)?;
        debug!(
            index = i,
            degree = problem.poly.deg(),
            point = %problem.point,
            value = %problem.value,
            "generated problem"
        );
        problems.push(problem);
    }

    for problem in &problems {
        sink.push(problem.emit_statement(form), problem.emit_answer(form));
    }
    sink.typeset();

    info!(count = problems.len(), "generated problem sheet");
    Ok(())
}
