//! This is a crate for proportional apportionment: distributing a fixed
//! number of indivisible seats among parties in proportion to their votes.
//!
//! It implements the largest remainder (Hamilton) method, the classic
//! divisor methods (D'Hondt, Sainte-Laguë and its modified variant,
//! Huntington-Hill, Adams, Dean) and the Balinski-Young quota method, all
//! on exact arithmetic with a deterministic tie-breaking contract.
//!
//! Example usage:
//! ```
//! use apportion::{compute, Method, Options};
//!
//! let result = compute(Method::DHondt, &[14, 28, 7, 35], 12, &Options::default()).unwrap();
//! assert_eq!(result.seats, vec![2, 4, 1, 5]);
//! assert!(result.ties.is_empty());
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod methods;

mod error;
mod threshold;
mod ties;
mod verify;
mod weight;

pub use error::Error;
pub use methods::{compute, Method, Options};
pub use threshold::apply_threshold;
pub use ties::{TieEvent, TiePolicy};
pub use verify::{quota_violations, within_quota, Bound, QuotaViolation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a single apportionment: one seat count per party, in the
/// same order as the vote vector, plus every tie that had to be broken to
/// get there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Apportionment {
    /// Seats per party; sums to the requested seat total.
    pub seats: Vec<u32>,
    /// Ties broken in favor of earlier parties, in the order they occurred.
    pub ties: Vec<TieEvent>,
}

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The canonical party labels used when the caller supplies none: `A`..`Z`,
/// then `a`..`z`, then the same letters with a numeric suffix (`A1`, `B1`,
/// ...). Labels are purely presentational.
pub fn default_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let c = LETTERS[i % LETTERS.len()] as char;
            if i < LETTERS.len() {
                c.to_string()
            } else {
                format!("{}{}", c, i / LETTERS.len())
            }
        })
        .collect()
}
