use std::collections::BTreeMap;

use super::{add_points, check_agent, highest_score, rank_of, zero_scores};
use crate::{error::VotingError, formats::Preferences};

/// Elect the candidate with the highest total score, where every voter gives
/// `score_vector[r]` points to the candidate they ranked `r`.
///
/// `score_vector` is sorted from highest to lowest before it is used, so the
/// largest weight always goes to the favourite candidate. Ties are won by the
/// candidate `tie_break` prefers.
pub fn scoring_rule<P: Preferences>(
    table: &P,
    score_vector: &[i64],
    tie_break: &P::Voter,
) -> Result<P::Candidate, VotingError> {
    check_agent(table, tie_break)?;
    let score = tally(table, score_vector)?;
    highest_score(table, &score, tie_break)
}

/// The total score of every candidate under `score_vector`.
pub fn tally<P: Preferences>(
    table: &P,
    score_vector: &[i64],
) -> Result<BTreeMap<P::Candidate, i64>, VotingError> {
    let candidates = table.candidates();
    if score_vector.len() != candidates.len() {
        return Err(VotingError::InvalidScoreVector {
            expected: candidates.len(),
            found: score_vector.len(),
        });
    }
    let mut weights = score_vector.to_vec();
    weights.sort_unstable_by(|a, b| b.cmp(a));

    let mut score = zero_scores(&candidates);
    for voter in table.voters() {
        for c in &candidates {
            let rank = rank_of(table, c, &voter)?;
            let &points = weights
                .get(rank)
                .ok_or(VotingError::InvalidRank { rank, candidates: candidates.len() })?;
            add_points(&mut score, c, points)?;
        }
    }
    Ok(score)
}
