//! Problem sheet configuration.

use crate::errors::ConfigError;
use crate::generator::ValueBounds;

/// Options controlling a generated problem sheet.
///
/// All ranges are inclusive. A configuration must pass [`ProblemConfig::validate`] before it is
/// used; [`generate_problems`](crate::generate_problems) does this itself.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ProblemConfig {
    /// Number of problems to generate.
    pub count: usize,
    pub min_degree: u32,
    pub max_degree: u32,
    /// Bounds on integer evaluation points and on fraction numerators.
    pub numer_min: i64,
    pub numer_max: i64,
    /// Bounds on fraction denominators. Denominators of 0 and ±1 are never drawn.
    pub denom_min: i64,
    pub denom_max: i64,
    /// Whether integers may be drawn as evaluation points.
    pub allow_int: bool,
    /// Whether fractions may be drawn as evaluation points.
    pub allow_frac: bool,
}

/// Largest polynomial degree a configuration may ask for.
pub const MAX_DEGREE: u32 = 256;

/// Largest number of evaluation points a configuration may enumerate per problem.
pub const MAX_CANDIDATES: u128 = 1_000_000;

impl ProblemConfig {
    /// Rejects configurations that generation cannot handle:
    ///
    /// - ranges whose minimum exceeds their maximum;
    /// - value bounds of `i64::MIN`, whose magnitude is not an `i64`;
    /// - a maximum degree above [MAX_DEGREE];
    /// - more than [MAX_CANDIDATES] candidate evaluation points.
    ///
    /// Ranges that are valid but admit no evaluation point, such as disallowing both integers
    /// and fractions, are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("degree", self.min_degree as i64, self.max_degree as i64)?;
        check_range("numerator", self.numer_min, self.numer_max)?;
        check_range("denominator", self.denom_min, self.denom_max)?;

        for &(what, value) in &[
            ("numerator magnitude", self.numer_min),
            ("numerator magnitude", self.numer_max),
            ("denominator magnitude", self.denom_min),
            ("denominator magnitude", self.denom_max),
        ] {
            check_limit(what, value.unsigned_abs() as u128, i64::MAX as u128)?;
        }
        check_limit("degree", self.max_degree as u128, MAX_DEGREE as u128)?;
        check_limit("candidate count", self.candidate_space(), MAX_CANDIDATES)?;
        Ok(())
    }

    /// Upper bound on the number of candidate evaluation points, before fractions that are not
    /// in lowest terms are filtered out.
    fn candidate_space(&self) -> u128 {
        let numers = span(self.numer_min, self.numer_max);
        let mut space = 0u128;
        if self.allow_int {
            space = space.saturating_add(numers);
        }
        if self.allow_frac {
            let denoms = span(self.denom_min, self.denom_max);
            space = space.saturating_add(numers.saturating_mul(denoms));
        }
        space
    }

    pub fn value_bounds(&self) -> ValueBounds {
        ValueBounds {
            numer_min: self.numer_min,
            numer_max: self.numer_max,
            denom_min: self.denom_min,
            denom_max: self.denom_max,
            allow_int: self.allow_int,
            allow_frac: self.allow_frac,
        }
    }
}

/// Number of integers in `[min, max]`; `min <= max` must hold.
fn span(min: i64, max: i64) -> u128 {
    (max as i128 - min as i128 + 1) as u128
}

fn check_limit(what: &'static str, value: u128, limit: u128) -> Result<(), ConfigError> {
    if value > limit {
        Err(ConfigError::ExceedsLimit { what, value, limit })
    } else {
        Ok(())
    }
}

fn check_range(bound: &'static str, min: i64, max: i64) -> Result<(), ConfigError> {
    if min > max {
        Err(ConfigError::InvertedRange { bound, min, max })
    } else {
        Ok(())
    }
}
