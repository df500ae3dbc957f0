use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{break_tie, check_agent, favourite};
use crate::{error::VotingError, formats::Preferences};

/// The result of a single transferable vote count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StvOutcome<C> {
    pub winner: C,
    /// The candidates eliminated in each round, in order.
    pub eliminated: Vec<Vec<C>>,
    /// `true` if every remaining candidate was tied and the tie-breaking
    /// voter decided the winner.
    pub tie_broken: bool,
}

/// Single transferable vote with one seat. See [`stv_rounds`].
pub fn stv<P: Preferences>(table: &P, tie_break: &P::Voter) -> Result<P::Candidate, VotingError> {
    stv_rounds(table, tie_break).map(|outcome| outcome.winner)
}

/// Count the votes in rounds. Every round, each vote counts for the
/// remaining candidate its voter ranks highest, and all candidates with the
/// fewest votes are eliminated together. When every remaining candidate has
/// the same number of votes, `tie_break` picks the winner among them.
pub fn stv_rounds<P: Preferences>(
    table: &P,
    tie_break: &P::Voter,
) -> Result<StvOutcome<P::Candidate>, VotingError> {
    check_agent(table, tie_break)?;
    let voters = table.voters();
    let mut active = table.candidates();
    let mut eliminated = Vec::new();
    while active.len() > 1 {
        let mut count: BTreeMap<P::Candidate, usize> =
            active.iter().map(|c| (c.clone(), 0)).collect();
        for voter in &voters {
            // The voter's first choice may already be eliminated, so we look
            // for their favourite among the remaining candidates.
            let top = favourite(table, voter, &active)?;
            *count.entry(top).or_insert(0) += 1;
        }
        let round = eliminated.len() + 1;
        trace!(round, ?count, "counted votes");

        let (Some(&min), Some(&max)) = (count.values().min(), count.values().max()) else {
            return Err(VotingError::NoCandidates);
        };
        if min == max {
            let winner = break_tie(table, tie_break, &active)?;
            return Ok(StvOutcome { winner, eliminated, tie_broken: true });
        }

        let (losers, remaining): (Vec<_>, Vec<_>) =
            active.into_iter().partition(|c| count.get(c) == Some(&min));
        debug!(round, votes = min, ?losers, "eliminated candidates");
        eliminated.push(losers);
        active = remaining;
    }
    let winner = active.pop().ok_or(VotingError::NoCandidates)?;
    Ok(StvOutcome { winner, eliminated, tie_broken: false })
}
