//! Largest remainder method with Hare quota (Hamilton).
//!
//! Each party first receives the floor of its exact entitlement
//! `votes * seats / total`; the leftover seats go to the largest fractional
//! remainders. The method can violate quota on some inputs, which is a
//! known property, not a defect.

use num::{BigInt, BigRational, ToPrimitive};

use crate::error::Error;
use crate::ties::{award_tied_seats, TieSink};

pub(super) fn allocate(
    votes: &[u64],
    seats: u32,
    sink: &mut TieSink,
) -> Result<Vec<u32>, Error> {
    let total: u64 = votes.iter().sum();
    let entitlements: Vec<BigRational> = votes
        .iter()
        .map(|&v| BigRational::new(BigInt::from(v) * BigInt::from(seats), BigInt::from(total)))
        .collect();
    let mut representatives: Vec<u32> = entitlements
        .iter()
        // A floored entitlement never exceeds the seat total.
        .map(|e| e.floor().to_integer().to_u32().unwrap_or(u32::MAX))
        .collect();

    let assigned: u32 = representatives.iter().sum();
    if assigned < seats {
        let remainders: Vec<BigRational> =
            entitlements.iter().map(|e| e - e.floor()).collect();
        let missing = (seats - assigned) as usize;

        let mut sorted: Vec<&BigRational> = remainders.iter().collect();
        sorted.sort_unstable();
        let cutoff = sorted[sorted.len() - missing].clone();

        let mut remaining = missing;
        for (party, r) in remainders.iter().enumerate() {
            if *r > cutoff {
                representatives[party] += 1;
                remaining -= 1;
            }
        }
        let tied: Vec<usize> = remainders
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == cutoff)
            .map(|(party, _)| party)
            .collect();
        let (favored, event) = award_tied_seats(tied, remaining, None);
        for party in favored {
            representatives[party] += 1;
        }
        if let Some(event) = event {
            sink.record(event)?;
        }
    }
    Ok(representatives)
}
