//! The apportionment methods and the shared entry point, [`compute`].

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::threshold::apply_threshold;
use crate::ties::{TiePolicy, TieSink};
use crate::{default_labels, Apportionment};

mod divisor;
mod largest_remainder;
mod quota;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every supported apportionment method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Largest remainder with Hare quota (Hamilton).
    LargestRemainder,
    /// D'Hondt (Jefferson), divisors 1, 2, 3, ...
    DHondt,
    /// Sainte-Laguë (Webster), divisors 1, 3, 5, ...
    SainteLague,
    /// Sainte-Laguë with first divisor raised to 1.4.
    ModifiedSainteLague,
    /// Huntington-Hill (equal proportions), geometric-mean divisors.
    HuntingtonHill,
    /// Adams (smallest divisor), seeded divisors 1, 2, 3, ...
    Adams,
    /// Dean (harmonic mean).
    Dean,
    /// The quota method of Balinski and Young.
    Quota,
}

/// All methods, in a stable order. Handy for iterating in tests and
/// comparisons.
pub const METHODS: [Method; 8] = [
    Method::LargestRemainder,
    Method::DHondt,
    Method::SainteLague,
    Method::ModifiedSainteLague,
    Method::HuntingtonHill,
    Method::Adams,
    Method::Dean,
    Method::Quota,
];

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::LargestRemainder => "largest remainder (Hamilton)",
            Method::DHondt => "D'Hondt (Jefferson)",
            Method::SainteLague => "Sainte-Laguë (Webster)",
            Method::ModifiedSainteLague => "modified Sainte-Laguë",
            Method::HuntingtonHill => "Huntington-Hill",
            Method::Adams => "Adams",
            Method::Dean => "Dean",
            Method::Quota => "quota (Balinski-Young)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method name, including the historical aliases.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "lrm" | "hamilton" | "largest_remainder" => Ok(Method::LargestRemainder),
            "dhondt" | "jefferson" | "greatestdivisors" => Ok(Method::DHondt),
            "saintelague" | "webster" | "majorfractions" => Ok(Method::SainteLague),
            "modified_saintelague" => Ok(Method::ModifiedSainteLague),
            "huntington" | "hill" | "equalproportions" => Ok(Method::HuntingtonHill),
            "adams" | "smallestdivisor" => Ok(Method::Adams),
            "dean" | "harmonicmean" => Ok(Method::Dean),
            "quota" => Ok(Method::Quota),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

/// Caller options for [`compute`]. The defaults are no threshold, ties
/// broken in vote-vector order, and alphabetic labels.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Party labels parallel to the vote vector; purely presentational,
    /// used in tie narratives. Defaults to [`default_labels`].
    pub labels: Option<Vec<String>>,
    /// Minimum vote share required for any seats, in `[0, 1)`.
    pub threshold: Option<f64>,
    pub ties: TiePolicy,
}

/// Apportions `seats` seats among the parties of `votes`.
///
/// The returned allocation is parallel to `votes` and sums to `seats`.
/// Every exact tie that had to be broken on the way is reported in the
/// result; with [`TiePolicy::Reject`] the first one fails the computation
/// instead.
pub fn compute(
    method: Method,
    votes: &[u64],
    seats: u32,
    options: &Options,
) -> Result<Apportionment, Error> {
    if votes.is_empty() {
        return Err(Error::InvalidInput("at least one party is required".into()));
    }
    let labels = match &options.labels {
        Some(labels) => {
            if labels.len() != votes.len() {
                return Err(Error::InvalidInput(format!(
                    "{} labels given for {} parties",
                    labels.len(),
                    votes.len()
                )));
            }
            labels.clone()
        }
        None => default_labels(votes.len()),
    };
    if method == Method::Quota && options.ties == TiePolicy::Reject {
        return Err(Error::UnsupportedOption(
            "tie rejection is not supported for the quota method",
        ));
    }

    let votes = apply_threshold(votes, options.threshold)?;
    if seats == 0 {
        return Ok(Apportionment { seats: vec![0; votes.len()], ties: Vec::new() });
    }
    if votes.iter().all(|&v| v == 0) {
        return Err(Error::InvalidInput(
            "no party has any votes left to apportion seats by".into(),
        ));
    }

    debug!("{} method", method);
    let mut sink = TieSink::new(options.ties, &labels);
    let representatives = match method {
        Method::LargestRemainder => largest_remainder::allocate(&votes, seats, &mut sink)?,
        Method::Quota => quota::allocate(&votes, seats, &mut sink)?,
        _ => divisor::allocate(&votes, seats, &divisor::Scheme::of(method), &mut sink)?,
    };
    debug_assert_eq!(representatives.iter().sum::<u32>(), seats);
    Ok(Apportionment { seats: representatives, ties: sink.into_events() })
}
