//! Tie detection and resolution, shared by every engine.
//!
//! A tie exists when several parties are exactly equal at a seat-assignment
//! boundary and not all of them can be seated. The contract is
//! deterministic: contested seats go to the earliest parties in vote-vector
//! order, and the rest are recorded as disadvantaged. With
//! [`TiePolicy::Reject`] the computation fails instead.

use std::fmt;

use log::debug;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a decision boundary is genuinely tied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TiePolicy {
    /// Break the tie in favor of earlier parties and record a [`TieEvent`].
    #[default]
    Allow,
    /// Fail with [`Error::TieOccurred`](crate::Error::TieOccurred) instead
    /// of resolving arbitrarily.
    Reject,
}

/// A broken tie: which parties were equal at the boundary, who got the
/// contested seats and who did not. Party indices refer to the vote vector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TieEvent {
    /// Assignment round, for the round-based quota method only.
    pub round: Option<u32>,
    /// Tied parties that received a seat.
    pub favored: Vec<usize>,
    /// Tied parties that were left out.
    pub disadvantaged: Vec<usize>,
}

impl TieEvent {
    /// Tie narrative with party labels: broken in favor of some, to the
    /// disadvantage of others.
    pub fn describe(&self, labels: &[String]) -> String {
        let names = |parties: &[usize]| {
            parties
                .iter()
                .map(|&i| labels.get(i).map(String::as_str).unwrap_or("?"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut message = String::new();
        if let Some(round) = self.round {
            message.push_str(&format!("tiebreaking necessary in round {}: ", round));
        }
        message.push_str(&format!(
            "ties broken in favor of: {}; to the disadvantage of: {}",
            names(&self.favored),
            names(&self.disadvantaged)
        ));
        message
    }
}

impl fmt::Display for TieEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(round) = self.round {
            write!(f, "round {}: ", round)?;
        }
        write!(
            f,
            "parties {:?} favored over parties {:?}",
            self.favored, self.disadvantaged
        )
    }
}

/// Hand out `available` seats among `tied` parties, earliest first.
/// Returns the favored parties and, when not everyone fits, the tie event.
pub(crate) fn award_tied_seats(
    tied: Vec<usize>,
    available: usize,
    round: Option<u32>,
) -> (Vec<usize>, Option<TieEvent>) {
    debug_assert!(tied.len() >= available);
    if tied.len() <= available {
        return (tied, None);
    }
    let favored = tied[..available].to_vec();
    let disadvantaged = tied[available..].to_vec();
    let event = TieEvent { round, favored: favored.clone(), disadvantaged };
    (favored, Some(event))
}

/// Collects tie events for one computation, honoring the tie policy.
pub(crate) struct TieSink<'a> {
    policy: TiePolicy,
    labels: &'a [String],
    events: Vec<TieEvent>,
}

impl<'a> TieSink<'a> {
    pub(crate) fn new(policy: TiePolicy, labels: &'a [String]) -> Self {
        TieSink { policy, labels, events: Vec::new() }
    }

    pub(crate) fn record(&mut self, event: TieEvent) -> Result<(), Error> {
        debug!("tiebreaking in order of: {:?}", &self.labels);
        debug!("{}", event.describe(self.labels));
        match self.policy {
            TiePolicy::Reject => Err(Error::TieOccurred(event)),
            TiePolicy::Allow => {
                self.events.push(event);
                Ok(())
            }
        }
    }

    pub(crate) fn into_events(self) -> Vec<TieEvent> {
        self.events
    }
}
