//! Exact arithmetic over integers and fractions, and integer polynomials evaluated with it.

mod gcd;
pub use gcd::*;

mod rational;
pub use rational::*;

mod poly;
pub use poly::*;
