use num_traits::{PrimInt, Signed};

/// Calculates the GCD for (u, v) ∈ (Z, Z).
///
/// The result is always non-negative, and `gcd(x, 0) = |x|`. Callers must not pass
/// `N::min_value()`, whose absolute value is not representable in `N`.
pub fn gcd<N: Signed + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u.abs(), v.abs())
}

/// The [Euclidean GCD] algorithm.
/// Implemented ∀ (u, v) ∈ (N, N).
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}
