use thiserror::Error;

use crate::ties::TieEvent;

/// Errors reported by the apportionment engine. Nothing is retried or
/// recovered internally; there is no partial result on failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Structurally invalid input: an empty vote vector, no positive votes
    /// while seats remain to distribute, mismatched label length, or a
    /// threshold outside `[0, 1)`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The method name is not one of the supported methods or their aliases.
    #[error("apportionment method `{0}` not known")]
    UnknownMethod(String),

    /// A decision boundary was genuinely tied and the tie policy was
    /// [`TiePolicy::Reject`](crate::TiePolicy::Reject).
    #[error("tie occurred: {0}")]
    TieOccurred(TieEvent),

    /// The requested option combination is not supported, e.g. tie
    /// rejection for the quota method.
    #[error("unsupported option: {0}")]
    UnsupportedOption(&'static str),
}
