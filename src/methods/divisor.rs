//! The shared divisor-method engine.
//!
//! Every divisor method divides each party's votes by a method-specific
//! divisor sequence and hands seats to the largest quotients. The methods
//! differ only in their [`Scheme`]: the divisor sequence itself and whether
//! every party with votes is seeded with one seat before ranking starts
//! (Huntington-Hill, Adams and Dean have a zero in their divisor sequence,
//! which amounts to seeding).

use num::BigRational;

use super::Method;
use crate::error::Error;
use crate::ties::{award_tied_seats, TieSink};
use crate::weight::{integer, ratio, FloatWeight};

/// Divisor sequence of a method. Rational families are computed exactly;
/// Huntington-Hill's geometric means and modified Sainte-Laguë's first
/// divisor 1.4 are not rational, so those two families rank `f64` weights.
enum DivisorSequence {
    Exact(fn(usize) -> BigRational),
    Float(fn(usize) -> f64),
}

/// Configuration record for one divisor method.
pub(super) struct Scheme {
    divisors: DivisorSequence,
    /// Seed every party with positive votes with one seat before ranking.
    seeded: bool,
}

fn count_up(k: usize) -> BigRational {
    integer(k as u64 + 1)
}

fn odd_numbers(k: usize) -> BigRational {
    integer(2 * k as u64 + 1)
}

fn modified_odd_numbers(k: usize) -> f64 {
    if k == 0 {
        1.4
    } else {
        (2 * k + 1) as f64
    }
}

fn geometric_means(k: usize) -> f64 {
    (((k + 1) * (k + 2)) as f64).sqrt()
}

fn harmonic_means(k: usize) -> BigRational {
    let k = k as u64;
    ratio(2 * (k + 1) * (k + 2), 2 * (k + 1) + 1)
}

impl Scheme {
    pub(super) fn of(method: Method) -> Scheme {
        match method {
            Method::DHondt => {
                Scheme { divisors: DivisorSequence::Exact(count_up), seeded: false }
            }
            Method::SainteLague => {
                Scheme { divisors: DivisorSequence::Exact(odd_numbers), seeded: false }
            }
            Method::ModifiedSainteLague => {
                Scheme { divisors: DivisorSequence::Float(modified_odd_numbers), seeded: false }
            }
            Method::HuntingtonHill => {
                Scheme { divisors: DivisorSequence::Float(geometric_means), seeded: true }
            }
            Method::Adams => {
                Scheme { divisors: DivisorSequence::Exact(count_up), seeded: true }
            }
            Method::Dean => {
                Scheme { divisors: DivisorSequence::Exact(harmonic_means), seeded: true }
            }
            Method::LargestRemainder | Method::Quota => {
                unreachable!("not a divisor method")
            }
        }
    }
}

pub(super) fn allocate(
    votes: &[u64],
    seats: u32,
    scheme: &Scheme,
    sink: &mut TieSink,
) -> Result<Vec<u32>, Error> {
    let positive = votes.iter().filter(|&&v| v > 0).count();
    let representatives = if scheme.seeded {
        if (seats as usize) < positive {
            return fewer_seats_than_parties(votes, seats, sink);
        }
        votes.iter().map(|&v| u32::from(v > 0)).collect()
    } else {
        vec![0; votes.len()]
    };
    match scheme.divisors {
        DivisorSequence::Exact(divisor) => {
            let weights: Vec<Vec<BigRational>> = votes
                .iter()
                .map(|&v| (0..seats as usize).map(|k| integer(v) / divisor(k)).collect())
                .collect();
            assign(weights, seats, representatives, sink)
        }
        DivisorSequence::Float(divisor) => {
            let weights: Vec<Vec<FloatWeight>> = votes
                .iter()
                .map(|&v| {
                    (0..seats as usize)
                        .map(|k| FloatWeight(v as f64 / divisor(k)))
                        .collect()
                })
                .collect();
            assign(weights, seats, representatives, sink)
        }
    }
}

/// Ranks all weights across all parties and divisors, finds the cutoff for
/// the remaining seats, seats everything strictly above it, and breaks the
/// tie at the cutoff in vote-vector order.
fn assign<W: Clone + Ord>(
    weights: Vec<Vec<W>>,
    seats: u32,
    mut representatives: Vec<u32>,
    sink: &mut TieSink,
) -> Result<Vec<u32>, Error> {
    let assigned: u32 = representatives.iter().sum();
    if assigned >= seats {
        return Ok(representatives);
    }
    let remaining = (seats - assigned) as usize;

    let mut flat: Vec<&W> = weights.iter().flatten().collect();
    flat.sort_unstable();
    let cutoff = flat[flat.len() - remaining].clone();

    for (party, row) in weights.iter().enumerate() {
        representatives[party] += row.iter().filter(|w| **w > cutoff).count() as u32;
    }

    let assigned: u32 = representatives.iter().sum();
    if assigned < seats {
        // A party's weights are strictly decreasing, so each tied party
        // holds the cutoff value exactly once.
        let tied: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(&cutoff))
            .map(|(party, _)| party)
            .collect();
        let (favored, event) = award_tied_seats(tied, (seats - assigned) as usize, None);
        for party in favored {
            representatives[party] += 1;
        }
        if let Some(event) = event {
            sink.record(event)?;
        }
    }
    Ok(representatives)
}

/// Degenerate rule for the seeded methods: with fewer seats than parties
/// holding votes, the strongest parties receive one seat each, with the tie
/// at the last seat broken in vote-vector order.
fn fewer_seats_than_parties(
    votes: &[u64],
    seats: u32,
    sink: &mut TieSink,
) -> Result<Vec<u32>, Error> {
    log::debug!("fewer seats than parties; {} strongest parties receive one seat", seats);
    let mut representatives = vec![0; votes.len()];
    let mut sorted = votes.to_vec();
    sorted.sort_unstable();
    let min_count = sorted[votes.len() - seats as usize];

    let mut remaining = seats as usize;
    for (party, &v) in votes.iter().enumerate() {
        if v > min_count {
            representatives[party] = 1;
            remaining -= 1;
        }
    }
    let tied: Vec<usize> = votes
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == min_count)
        .map(|(party, _)| party)
        .collect();
    let (favored, event) = award_tied_seats(tied, remaining, None);
    for party in favored {
        representatives[party] = 1;
    }
    if let Some(event) = event {
        sink.record(event)?;
    }
    Ok(representatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::{compute, Options};
    use crate::TiePolicy;

    fn seats_of(method: Method, votes: &[u64], seats: u32) -> Vec<u32> {
        compute(method, votes, seats, &Options::default()).unwrap().seats
    }

    #[test]
    fn dhondt_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::DHondt, &[5117, 4400, 162, 161, 160], 100),
            vec![52, 45, 1, 1, 1]
        );
        assert_eq!(
            seats_of(Method::DHondt, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![10, 7, 5, 3, 1]
        );
    }

    #[test]
    fn sainte_lague_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::SainteLague, &[5117, 4400, 162, 161, 160], 100),
            vec![51, 43, 2, 2, 2]
        );
        assert_eq!(
            seats_of(Method::SainteLague, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![9, 8, 5, 3, 1]
        );
    }

    #[test]
    fn modified_sainte_lague_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::ModifiedSainteLague, &[5117, 4400, 162, 161, 160], 100),
            vec![51, 43, 2, 2, 2]
        );
        assert_eq!(
            seats_of(Method::ModifiedSainteLague, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![9, 8, 5, 3, 1]
        );
    }

    #[test]
    fn huntington_hill_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::HuntingtonHill, &[5117, 4400, 162, 161, 160], 100),
            vec![51, 43, 2, 2, 2]
        );
        assert_eq!(
            seats_of(Method::HuntingtonHill, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![9, 7, 6, 3, 1]
        );
    }

    #[test]
    fn adams_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::Adams, &[5117, 4400, 162, 161, 160], 100),
            vec![51, 43, 2, 2, 2]
        );
        assert_eq!(
            seats_of(Method::Adams, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![9, 7, 5, 3, 2]
        );
    }

    #[test]
    fn dean_balinski_young_examples() {
        assert_eq!(
            seats_of(Method::Dean, &[5117, 4400, 162, 161, 160], 100),
            vec![51, 43, 2, 2, 2]
        );
        assert_eq!(
            seats_of(Method::Dean, &[9061, 7179, 5259, 3319, 1182], 26),
            vec![9, 7, 5, 4, 1]
        );
    }

    #[test]
    fn sainte_lague_and_modified_diverge() {
        let standard = seats_of(Method::SainteLague, &[6, 1], 4);
        let modified = seats_of(Method::ModifiedSainteLague, &[6, 1], 4);
        assert_eq!(standard, vec![3, 1]);
        assert_eq!(modified, vec![4, 0]);
    }

    #[test]
    fn seeded_methods_with_fewer_seats_than_parties() {
        for method in [Method::HuntingtonHill, Method::Adams, Method::Dean] {
            assert_eq!(
                seats_of(method, &[10, 9, 8, 8, 11, 12], 3),
                vec![1, 0, 0, 0, 1, 1]
            );
        }
    }

    #[test]
    fn fewer_seats_tie_goes_to_earliest_party() {
        let result =
            compute(Method::Adams, &[2, 1, 1, 2, 2], 2, &Options::default()).unwrap();
        assert_eq!(result.seats, vec![1, 0, 0, 1, 0]);
        assert_eq!(result.ties.len(), 1);
        assert_eq!(result.ties[0].favored, vec![0, 3]);
        assert_eq!(result.ties[0].disadvantaged, vec![4]);
    }

    #[test]
    fn fewer_seats_tie_never_locks_out_a_stronger_party() {
        // Party C is strictly strongest and must be seated even though the
        // two tied parties come first in the vote vector.
        let result =
            compute(Method::Adams, &[5, 5, 9], 2, &Options::default()).unwrap();
        assert_eq!(result.seats, vec![1, 0, 1]);
        assert_eq!(result.ties[0].favored, vec![0]);
        assert_eq!(result.ties[0].disadvantaged, vec![1]);
    }

    #[test]
    fn cutoff_tie_reported_with_reject_policy() {
        let options = Options { ties: TiePolicy::Reject, ..Options::default() };
        for method in [
            Method::DHondt,
            Method::SainteLague,
            Method::ModifiedSainteLague,
            Method::HuntingtonHill,
            Method::Adams,
            Method::Dean,
        ] {
            assert!(matches!(
                compute(method, &[11, 11, 11], 4, &options),
                Err(Error::TieOccurred(_))
            ));
            // An uncontested boundary is not a tie.
            assert_eq!(
                compute(method, &[12, 12, 11, 12], 3, &options).unwrap().seats,
                vec![1, 1, 0, 1]
            );
        }
    }

    #[test]
    fn single_party_takes_every_seat() {
        for method in [
            Method::DHondt,
            Method::SainteLague,
            Method::ModifiedSainteLague,
            Method::HuntingtonHill,
            Method::Adams,
            Method::Dean,
        ] {
            assert_eq!(seats_of(method, &[1], 1), vec![1]);
            assert_eq!(seats_of(method, &[7], 9), vec![9]);
        }
    }
}
