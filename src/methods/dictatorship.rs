use super::{check_agent, favourite};
use crate::{error::VotingError, formats::Preferences};

/// Elect the favourite candidate of `agent`, ignoring every other voter.
pub fn dictatorship<P: Preferences>(
    table: &P,
    agent: &P::Voter,
) -> Result<P::Candidate, VotingError> {
    check_agent(table, agent)?;
    favourite(table, agent, &table.candidates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{Profile, TotalRanking};

    #[test]
    fn follows_agent() {
        let mut votes = TotalRanking::new(3);
        votes.add_order(&[1, 2, 0]).unwrap();
        votes.add_order(&[2, 0, 1]).unwrap();
        votes.add_order(&[2, 1, 0]).unwrap();
        assert_eq!(dictatorship(&votes, &0), Ok(1));
        assert_eq!(dictatorship(&votes, &1), Ok(2));
    }

    #[quickcheck]
    fn rank_zero(votes: TotalRanking, agent: usize) -> bool {
        if votes.voter_count() == 0 {
            return true;
        }
        let agent = agent % votes.voter_count();
        match dictatorship(&votes, &agent) {
            Ok(c) => votes.get_preference(&c, &agent) == Some(0),
            Err(_) => false,
        }
    }

    #[test]
    fn invalid_agent() {
        let profile = Profile::new(["a", "b"]).unwrap().with_voter("x", &["b", "a"]).unwrap();
        assert_eq!(dictatorship(&profile, &"x"), Ok("b"));
        assert_eq!(dictatorship(&profile, &"y"), Err(VotingError::InvalidAgent("\"y\"".into())));
    }

    #[test]
    fn no_candidates() {
        let profile: Profile<&str, u8> = Profile::new([]).unwrap().with_voter(0, &[]).unwrap();
        assert_eq!(dictatorship(&profile, &0), Err(VotingError::NoCandidates));
    }
}
