use std::collections::BTreeMap;

use super::{add_points, check_agent, highest_score, least_favourite, zero_scores};
use crate::{error::VotingError, formats::Preferences};

/// Every voter vetoes their least preferred candidate. The candidate vetoed
/// by the fewest voters wins.
pub fn veto<P: Preferences>(table: &P, tie_break: &P::Voter) -> Result<P::Candidate, VotingError> {
    check_agent(table, tie_break)?;
    let score = veto_scores(table)?;
    highest_score(table, &score, tie_break)
}

/// The number of voters who didn't rank each candidate last.
pub fn veto_scores<P: Preferences>(table: &P) -> Result<BTreeMap<P::Candidate, i64>, VotingError> {
    let candidates = table.candidates();
    let mut score = zero_scores(&candidates);
    for voter in table.voters() {
        let bottom = least_favourite(table, &voter, &candidates)?;
        for c in candidates.iter().filter(|&c| *c != bottom) {
            add_points(&mut score, c, 1)?;
        }
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::TotalRanking;

    #[test]
    fn fewest_vetoes() {
        let mut votes = TotalRanking::new(3);
        votes.add_order(&[0, 1, 2]).unwrap();
        votes.add_order(&[0, 2, 1]).unwrap();
        votes.add_order(&[1, 2, 0]).unwrap();
        assert_eq!(veto_scores(&votes).unwrap().into_values().collect::<Vec<_>>(), vec![2, 2, 2]);
        assert_eq!(veto(&votes, &2), Ok(1));

        votes.add_order(&[2, 0, 1]).unwrap();
        assert_eq!(veto_scores(&votes).unwrap().into_values().collect::<Vec<_>>(), vec![3, 2, 3]);
        assert_eq!(veto(&votes, &1), Ok(0));
        assert_eq!(veto(&votes, &3), Ok(2));
    }

    #[test]
    fn single_candidate() {
        let mut votes = TotalRanking::new(1);
        votes.add(&[0]).unwrap();
        assert_eq!(veto(&votes, &0), Ok(0));
    }
}
