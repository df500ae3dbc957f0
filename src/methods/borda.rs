use std::collections::BTreeMap;

use super::{add_points, check_agent, highest_score, rank_of, zero_scores};
use crate::{error::VotingError, formats::Preferences};

/// Borda count: every candidate gets one point for every candidate ranked
/// below it on each vote.
pub fn borda<P: Preferences>(table: &P, tie_break: &P::Voter) -> Result<P::Candidate, VotingError> {
    check_agent(table, tie_break)?;
    let score = borda_scores(table)?;
    highest_score(table, &score, tie_break)
}

/// The Borda score of every candidate.
pub fn borda_scores<P: Preferences>(
    table: &P,
) -> Result<BTreeMap<P::Candidate, i64>, VotingError> {
    let candidates = table.candidates();
    let n = candidates.len();
    let mut score = zero_scores(&candidates);
    for voter in table.voters() {
        for c in &candidates {
            let rank = rank_of(table, c, &voter)?;
            if rank >= n {
                return Err(VotingError::InvalidRank { rank, candidates: n });
            }
            let ranked_below = n - 1 - rank;
            add_points(&mut score, c, ranked_below as i64)?;
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::TotalRanking;

    #[test]
    fn compromise_wins() {
        // 0 has the most first places, but 1 is everyone's first or second
        // choice.
        let mut votes = TotalRanking::new(4);
        votes.add_order(&[0, 1, 2, 3]).unwrap();
        votes.add_order(&[0, 1, 3, 2]).unwrap();
        votes.add_order(&[2, 1, 3, 0]).unwrap();
        votes.add_order(&[3, 1, 2, 0]).unwrap();
        votes.add_order(&[1, 2, 3, 0]).unwrap();
        assert_eq!(borda_scores(&votes).unwrap().into_values().collect::<Vec<_>>(), vec![
            6, 11, 7, 6
        ]);
        assert_eq!(borda(&votes, &0), Ok(1));
    }

    #[test]
    fn no_voters_ties_everyone() {
        let votes = TotalRanking::new(3);
        assert_eq!(borda_scores(&votes).unwrap().into_values().collect::<Vec<_>>(), vec![0, 0, 0]);
        // There is no voter who can break the tie
        assert_eq!(borda(&votes, &0), Err(VotingError::InvalidAgent("0".into())));
    }
}
