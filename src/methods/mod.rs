//! The voting methods. Every method reads a table implementing
//! [`Preferences`] and elects exactly one candidate.
//!
//! Methods which need to break ties take a `tie_break` voter. When several
//! candidates are tied, the one the `tie_break` voter prefers among the tied
//! candidates wins.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{error::VotingError, formats::Preferences};

/// The candidates with the highest score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner<C> {
    Solo(C),
    Ties(Vec<C>),
}

/// Find the candidates with the highest score, or `None` if there are no
/// candidates.
pub fn top_scorers<C: Clone + Ord>(scores: &BTreeMap<C, i64>) -> Option<Winner<C>> {
    let max = *scores.values().max()?;
    let mut winners: Vec<C> =
        scores.iter().filter(|&(_, &s)| s == max).map(|(c, _)| c.clone()).collect();
    match winners.len() {
        1 => winners.pop().map(Winner::Solo),
        _ => Some(Winner::Ties(winners)),
    }
}

/// The candidate in `among` which `voter` ranks highest.
pub fn favourite<P: Preferences>(
    table: &P,
    voter: &P::Voter,
    among: &[P::Candidate],
) -> Result<P::Candidate, VotingError> {
    let mut best: Option<(usize, &P::Candidate)> = None;
    for c in among {
        let rank = rank_of(table, c, voter)?;
        if best.map_or(true, |(b, _)| rank < b) {
            best = Some((rank, c));
        }
    }
    best.map(|(_, c)| c.clone()).ok_or(VotingError::NoCandidates)
}

/// The candidate in `among` which `voter` ranks lowest.
pub fn least_favourite<P: Preferences>(
    table: &P,
    voter: &P::Voter,
    among: &[P::Candidate],
) -> Result<P::Candidate, VotingError> {
    let mut worst: Option<(usize, &P::Candidate)> = None;
    for c in among {
        let rank = rank_of(table, c, voter)?;
        if worst.map_or(true, |(w, _)| rank > w) {
            worst = Some((rank, c));
        }
    }
    worst.map(|(_, c)| c.clone()).ok_or(VotingError::NoCandidates)
}

pub(crate) fn rank_of<P: Preferences>(
    table: &P,
    candidate: &P::Candidate,
    voter: &P::Voter,
) -> Result<usize, VotingError> {
    table.get_preference(candidate, voter).ok_or_else(|| VotingError::MissingPreference {
        candidate: format!("{:?}", candidate),
        voter: format!("{:?}", voter),
    })
}

pub(crate) fn check_agent<P: Preferences>(table: &P, agent: &P::Voter) -> Result<(), VotingError> {
    if table.is_voter(agent) {
        Ok(())
    } else {
        Err(VotingError::InvalidAgent(format!("{:?}", agent)))
    }
}

pub(crate) fn zero_scores<C: Clone + Ord>(candidates: &[C]) -> BTreeMap<C, i64> {
    candidates.iter().map(|c| (c.clone(), 0)).collect()
}

pub(crate) fn add_points<C: Clone + Ord + std::fmt::Debug>(
    scores: &mut BTreeMap<C, i64>,
    candidate: &C,
    points: i64,
) -> Result<(), VotingError> {
    let score = scores.entry(candidate.clone()).or_insert(0);
    *score = score
        .checked_add(points)
        .ok_or_else(|| VotingError::Overflow(format!("{:?}", candidate)))?;
    Ok(())
}

/// Resolve a tie in favour of the candidate `tie_break` prefers.
pub(crate) fn break_tie<P: Preferences>(
    table: &P,
    tie_break: &P::Voter,
    tied: &[P::Candidate],
) -> Result<P::Candidate, VotingError> {
    let winner = favourite(table, tie_break, tied)?;
    debug!(?tied, ?tie_break, ?winner, "broke tie");
    Ok(winner)
}

/// Elect the highest scoring candidate, breaking ties with `tie_break`.
pub(crate) fn highest_score<P: Preferences>(
    table: &P,
    scores: &BTreeMap<P::Candidate, i64>,
    tie_break: &P::Voter,
) -> Result<P::Candidate, VotingError> {
    match top_scorers(scores).ok_or(VotingError::NoCandidates)? {
        Winner::Solo(c) => Ok(c),
        Winner::Ties(tied) => break_tie(table, tie_break, &tied),
    }
}


mod borda;
pub use borda::{borda, borda_scores};
mod dictatorship;
pub use dictatorship::dictatorship;
mod plurality;
pub use plurality::{plurality, plurality_scores};
mod rule;
pub use rule::Rule;
mod scoring;
pub use scoring::{scoring_rule, tally};
mod stv;
pub use stv::{stv, stv_rounds, StvOutcome};
mod veto;
pub use veto::{veto, veto_scores};
