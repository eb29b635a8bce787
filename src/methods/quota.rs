//! The quota method of Balinski and Young.
//!
//! See Balinski, M. L., & Young, H. P. (1975). The quota method of
//! apportionment. The American Mathematical Monthly, 82(7), 701-730.
//!
//! One seat is assigned per round: the party with the largest quotient
//! `votes / (seats held + 1)` wins the round, unless seating it would
//! violate its upper quota for the house size reached in that round. The
//! result therefore sums to the seat total and stays within quota by
//! construction.

use num::BigRational;

use crate::error::Error;
use crate::ties::{TieEvent, TieSink};
use crate::weight::ratio;

pub(super) fn allocate(
    votes: &[u64],
    seats: u32,
    sink: &mut TieSink,
) -> Result<Vec<u32>, Error> {
    let total: u128 = votes.iter().map(|&v| u128::from(v)).sum();
    let mut representatives = vec![0u32; votes.len()];

    for round in 1..=seats {
        let mut best: Option<BigRational> = None;
        let mut tied: Vec<usize> = Vec::new();
        for (party, &v) in votes.iter().enumerate() {
            // Upper quota for a house of `round` seats; parties at their
            // cap sit the round out. Zero-vote parties have a cap of zero
            // and never qualify.
            let cap = (u128::from(v) * u128::from(round)).div_ceil(total);
            if u128::from(representatives[party]) >= cap {
                continue;
            }
            let quotient = ratio(v, u64::from(representatives[party]) + 1);
            match &best {
                Some(b) if quotient < *b => {}
                Some(b) if quotient == *b => tied.push(party),
                _ => {
                    best = Some(quotient);
                    tied = vec![party];
                }
            }
        }
        // The caps for a house of `round` seats sum to at least `round`,
        // so some party is always admissible.
        let winner = *tied.first().expect("no admissible party this round");
        if tied.len() > 1 {
            sink.record(TieEvent {
                round: Some(round),
                favored: vec![winner],
                disadvantaged: tied[1..].to_vec(),
            })?;
        }
        representatives[winner] += 1;
    }
    Ok(representatives)
}

#[cfg(test)]
mod tests {
    use crate::methods::{compute, Method, Options};
    use crate::{within_quota, Error, TiePolicy};

    fn seats_of(votes: &[u64], seats: u32) -> Vec<u32> {
        compute(Method::Quota, votes, seats, &Options::default()).unwrap().seats
    }

    #[test]
    fn balinski_young_examples() {
        assert_eq!(seats_of(&[5117, 4400, 162, 161, 160], 100), vec![52, 44, 2, 1, 1]);
        assert_eq!(seats_of(&[9061, 7179, 5259, 3319, 1182], 26), vec![10, 7, 5, 3, 1]);
    }

    #[test]
    fn ties_broken_per_round_in_party_order() {
        let result =
            compute(Method::Quota, &[2, 1, 1, 2, 2], 2, &Options::default()).unwrap();
        assert_eq!(result.seats, vec![1, 0, 0, 1, 0]);
        assert_eq!(result.ties.len(), 2);
        assert_eq!(result.ties[0].round, Some(1));
        assert_eq!(result.ties[0].favored, vec![0]);
        assert_eq!(result.ties[0].disadvantaged, vec![3, 4]);
        assert_eq!(result.ties[1].round, Some(2));
        assert_eq!(result.ties[1].favored, vec![3]);
        assert_eq!(result.ties[1].disadvantaged, vec![4]);
    }

    #[test]
    fn tie_rejection_is_unsupported() {
        let options = Options { ties: TiePolicy::Reject, ..Options::default() };
        assert!(matches!(
            compute(Method::Quota, &[3, 2, 1], 4, &options),
            Err(Error::UnsupportedOption(_))
        ));
    }

    #[quickcheck]
    fn qc_never_violates_quota(votes: Vec<u16>, seats: u8) -> bool {
        let votes: Vec<u64> = votes.into_iter().map(u64::from).collect();
        if votes.iter().all(|&v| v == 0) {
            return true;
        }
        let result =
            compute(Method::Quota, &votes, u32::from(seats), &Options::default()).unwrap();
        within_quota(&votes, &result.seats)
    }
}
