//! Exact weights for ranking comparisons.
//!
//! Quotients of votes by rational divisors are kept as `BigRational` so that
//! equality at a seat cutoff is decided exactly. The two divisor families
//! whose divisors are not rational (Huntington-Hill's geometric means,
//! modified Sainte-Laguë's 1.4) use `f64` instead; for those, a tie is
//! defined as exact `f64` equality under `total_cmp`.

use std::cmp::Ordering;

use num::{BigInt, BigRational};

/// The exact fraction `num / den`. `den` must be nonzero.
pub(crate) fn ratio(num: u64, den: u64) -> BigRational {
    BigRational::new(BigInt::from(num), BigInt::from(den))
}

pub(crate) fn integer(n: u64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// An `f64` ranking weight with a total order, so the shared cutoff logic
/// can treat float and rational weights uniformly. The engines never
/// produce a NaN (votes are finite and divisors positive), so `total_cmp`
/// coincides with the numeric order.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct FloatWeight(pub f64);

impl Eq for FloatWeight {}

impl Ord for FloatWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
