use crate::math::Poly;

use rand::Rng;

/// Largest coefficient magnitude drawn for a generated polynomial.
pub const MAX_COEFF: i64 = 9;

/// Generates a random polynomial of exactly degree `degree`.
///
/// Exponents are visited from `degree` down to 0, each drawing a coefficient uniformly from
/// `[-9, 9]`. A zero drawn for the leading term is redrawn from `[1, 9]`, so the leading
/// coefficient is never zero. The draw order is part of the contract: a given random stream
/// always produces the same polynomial.
pub fn generate_polynomial<R: Rng + ?Sized>(degree: usize, rng: &mut R) -> Poly {
    let mut coeffs = vec![0; degree + 1];
    for i in (0..=degree).rev() {
        let mut coeff = rng.gen_range(-MAX_COEFF..=MAX_COEFF);
        if i == degree && coeff == 0 {
            coeff = rng.gen_range(1..=MAX_COEFF);
        }
        coeffs[i] = coeff;
    }
    Poly::new(coeffs)
}
