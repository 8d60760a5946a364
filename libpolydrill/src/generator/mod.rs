//! Random problem generation.
//!
//! Every generator takes its random source as an argument, so a seeded generator reproduces a
//! problem sheet exactly.

mod value;
pub use value::*;

mod poly;
pub use poly::*;

mod problem;
pub use problem::*;
