//! Post-hoc quota validation: does a given allocation stay within every
//! party's lower and upper quota? The allocation does not have to come from
//! this crate.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which quota bound a violation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    Lower,
    Upper,
}

/// One party's violated quota bound.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuotaViolation {
    /// Index into the vote vector.
    pub party: usize,
    pub bound: Bound,
    /// The violated bound: `floor(votes * seats / total)` for the lower
    /// quota, `ceil(...)` for the upper.
    pub quota: u64,
    /// Seats the party actually holds.
    pub seats: u32,
}

/// Verifies whether a given assignment of representatives is within quota.
pub fn within_quota(votes: &[u64], allocation: &[u32]) -> bool {
    quota_violations(votes, allocation).is_empty()
}

/// Every violated quota bound, in party order. Empty when the allocation is
/// within quota. The seat total is taken from the allocation itself.
pub fn quota_violations(votes: &[u64], allocation: &[u32]) -> Vec<QuotaViolation> {
    debug_assert_eq!(votes.len(), allocation.len());
    let total: u128 = votes.iter().map(|&v| u128::from(v)).sum();
    let seats: u128 = allocation.iter().map(|&a| u128::from(a)).sum();
    let mut violations = Vec::new();
    if total == 0 {
        // No votes at all: any seated party is out of quota.
        for (party, &a) in allocation.iter().enumerate() {
            if a > 0 {
                violations.push(QuotaViolation { party, bound: Bound::Upper, quota: 0, seats: a });
            }
        }
        return violations;
    }
    for (party, (&v, &a)) in votes.iter().zip(allocation).enumerate() {
        let exact = u128::from(v) * seats;
        let lower = (exact / total) as u64;
        let upper = (exact.div_ceil(total)) as u64;
        if u64::from(a) > upper {
            debug!(
                "upper quota of party {} violated: quota is {}, but has {} representatives",
                party, upper, a
            );
            violations.push(QuotaViolation { party, bound: Bound::Upper, quota: upper, seats: a });
        }
        if u64::from(a) < lower {
            debug!(
                "lower quota of party {} violated: quota is {}, but has only {} representatives",
                party, lower, a
            );
            violations.push(QuotaViolation { party, bound: Bound::Lower, quota: lower, seats: a });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balinski_young_example_within() {
        let votes = [5117, 4400, 162, 161, 160];
        assert!(within_quota(&votes, &[51, 44, 2, 2, 1]));
    }

    #[test]
    fn balinski_young_example_violations() {
        let votes = [5117, 4400, 162, 161, 160];
        assert!(!within_quota(&votes, &[52, 45, 1, 1, 1]));
        assert!(!within_quota(&votes, &[52, 43, 2, 1, 2]));
    }

    #[test]
    fn violations_name_party_and_bound() {
        let votes = [5117, 4400, 162, 161, 160];
        let violations = quota_violations(&votes, &[52, 45, 1, 1, 1]);
        // A's quota is 51.17, so 52 seats still fit its upper quota; only
        // B exceeds ceil(44.0) = 44.
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].party, 1);
        assert_eq!(violations[0].bound, Bound::Upper);
        assert_eq!(violations[0].quota, 44);
        assert_eq!(violations[0].seats, 45);
    }

    #[test]
    fn no_votes_means_no_seats() {
        assert!(within_quota(&[0, 0], &[0, 0]));
        assert!(!within_quota(&[0, 0], &[1, 0]));
    }
}
