//! Electoral threshold: parties whose vote share lies strictly below a
//! cutoff fraction are zeroed out before any method runs. Exclusion is
//! permanent for that computation; a zeroed party can never regain seats
//! through a later degenerate rule.

use num::BigRational;

use crate::error::Error;
use crate::weight::integer;

/// Sets vote counts to 0 if the threshold is not met.
///
/// The cutoff comparison `vote < threshold * total` is made in exact
/// rational arithmetic on the threshold's binary value, so no float
/// rounding can flip an at-the-cutoff party. `None` is the identity.
pub fn apply_threshold(votes: &[u64], threshold: Option<f64>) -> Result<Vec<u64>, Error> {
    let Some(threshold) = threshold else {
        return Ok(votes.to_vec());
    };
    if !(0.0..1.0).contains(&threshold) {
        return Err(Error::InvalidInput(format!(
            "threshold must lie in [0, 1), got {}",
            threshold
        )));
    }
    // In range, so finite; from_float only fails on NaN or infinity.
    let threshold = BigRational::from_float(threshold)
        .ok_or_else(|| Error::InvalidInput("threshold must be finite".into()))?;
    let total: u64 = votes.iter().sum();
    let min_votes = integer(total) * threshold;
    Ok(votes
        .iter()
        .map(|&v| if integer(v) < min_votes { 0 } else { v })
        .collect())
}
