use thiserror::Error;

/// Reasons a voting rule could not pick a winner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    /// The dictator or tie-breaking voter is not one of the table's voters.
    #[error("agent {0} is not a valid voter")]
    InvalidAgent(String),

    #[error("score vector has {found} weights, but there are {expected} candidates")]
    InvalidScoreVector { expected: usize, found: usize },

    #[error("there are no candidates to elect")]
    NoCandidates,

    /// The table listed a candidate and a voter but had no rank for the pair.
    #[error("voter {voter} has no preference for candidate {candidate}")]
    MissingPreference { candidate: String, voter: String },

    #[error("rank {rank} is outside of the {candidates} candidates")]
    InvalidRank { rank: usize, candidates: usize },

    #[error("integer overflow: score of candidate {0} is too large")]
    Overflow(String),
}

/// Reasons a ballot could not be added to a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallotError {
    #[error("vote must rank all {expected} candidates, but ranked {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("value {value} is larger than or equal to the number of candidates")]
    OutOfRange { value: usize },

    #[error("value {value} appears more than once in the vote")]
    Duplicate { value: usize },

    #[error("candidate {0} is not part of the election")]
    UnknownCandidate(String),

    #[error("candidate {0} is listed more than once")]
    DuplicateCandidate(String),

    #[error("voter {0} has already voted")]
    DuplicateVoter(String),
}
