use std::collections::BTreeMap;

use super::{add_points, check_agent, favourite, highest_score, zero_scores};
use crate::{error::VotingError, formats::Preferences};

/// First past the post: the candidate ranked first by the most voters wins.
pub fn plurality<P: Preferences>(
    table: &P,
    tie_break: &P::Voter,
) -> Result<P::Candidate, VotingError> {
    check_agent(table, tie_break)?;
    let score = plurality_scores(table)?;
    highest_score(table, &score, tie_break)
}

/// The number of voters who ranked each candidate first.
pub fn plurality_scores<P: Preferences>(
    table: &P,
) -> Result<BTreeMap<P::Candidate, i64>, VotingError> {
    let candidates = table.candidates();
    let mut score = zero_scores(&candidates);
    for voter in table.voters() {
        let top = favourite(table, &voter, &candidates)?;
        add_points(&mut score, &top, 1)?;
    }
    Ok(score)
}
