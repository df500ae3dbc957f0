use std::fmt::{self, Display};

use rand::seq::SliceRandom;

use super::Preferences;
use crate::error::BallotError;

/// Every voter gives every candidate a unique rank. Candidates and voters are
/// both numbered from 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalRanking {
    // Has size candidates * voters. Row `i` holds the ranks voter `i` gave to
    // each candidate.
    votes: Vec<usize>,
    candidates: usize,
    voters: usize,
}

impl TotalRanking {
    pub fn new(candidates: usize) -> Self {
        TotalRanking { votes: Vec::new(), candidates, voters: 0 }
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    pub fn voter_count(&self) -> usize {
        self.voters
    }

    // The ranks voter `i` gave each candidate.
    pub(crate) fn vote_i(&self, i: usize) -> &[usize] {
        &self.votes[i * self.candidates..(i + 1) * self.candidates]
    }

    // Check if a given total ranking is valid, i.e.
    // 1. len(votes) = candidates * voters
    // 2. Every ranking is total
    // Without candidates every vote is empty, but there may still be voters.
    pub(crate) fn valid(&self) -> bool {
        if self.votes.len() != self.voters * self.candidates {
            return false;
        }
        (0..self.voters).all(|i| check_ranks(self.vote_i(i), self.candidates).is_ok())
    }

    /// Add a vote where `ranks[c]` is the rank given to candidate `c`.
    pub fn add(&mut self, ranks: &[usize]) -> Result<(), BallotError> {
        check_ranks(ranks, self.candidates)?;
        self.votes.extend_from_slice(ranks);
        self.voters += 1;
        debug_assert!(self.valid());
        Ok(())
    }

    /// Add a vote listing the candidates from most to least preferred.
    pub fn add_order(&mut self, order: &[usize]) -> Result<(), BallotError> {
        // A permutation is valid exactly when its inverse is
        check_ranks(order, self.candidates)?;
        let mut ranks = vec![0; self.candidates];
        for (rank, &c) in order.iter().enumerate() {
            ranks[c] = rank;
        }
        self.add(&ranks)
    }

    /// Sample and add `new_voters` uniformly random votes, using random
    /// numbers from `rng`.
    pub fn generate_uniform<R: rand::Rng>(&mut self, rng: &mut R, new_voters: usize) {
        if self.candidates == 0 {
            return;
        }
        let mut v: Vec<usize> = (0..self.candidates).collect();
        self.votes.reserve(self.candidates * new_voters);
        for _ in 0..new_voters {
            v.shuffle(rng);
            self.votes.extend_from_slice(&v);
        }
        self.voters += new_voters;
        debug_assert!(self.valid());
    }
}

// Every value must be below `candidates` and appear once.
fn check_ranks(v: &[usize], candidates: usize) -> Result<(), BallotError> {
    if v.len() != candidates {
        return Err(BallotError::WrongLength { expected: candidates, found: v.len() });
    }
    let mut seen = vec![false; candidates];
    for &value in v {
        if value >= candidates {
            return Err(BallotError::OutOfRange { value });
        }
        if seen[value] {
            return Err(BallotError::Duplicate { value });
        }
        seen[value] = true;
    }
    Ok(())
}

impl Display for TotalRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.voters {
            let vote = self.vote_i(i);
            if let Some((last, rest)) = vote.split_last() {
                for v in rest {
                    write!(f, "{},", v)?;
                }
                writeln!(f, "{}", last)?;
            }
        }
        Ok(())
    }
}

impl Preferences for TotalRanking {
    type Candidate = usize;
    type Voter = usize;

    fn candidates(&self) -> Vec<usize> {
        (0..self.candidates).collect()
    }

    fn voters(&self) -> Vec<usize> {
        (0..self.voters).collect()
    }

    fn get_preference(&self, candidate: &usize, voter: &usize) -> Option<usize> {
        if *candidate < self.candidates && *voter < self.voters {
            Some(self.votes[voter * self.candidates + candidate])
        } else {
            None
        }
    }

    fn is_voter(&self, voter: &usize) -> bool {
        *voter < self.voters
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};

    use super::*;
    use crate::{error::VotingError, methods::plurality, tests::std_rng};

    impl Arbitrary for TotalRanking {
        fn arbitrary(g: &mut Gen) -> Self {
            let (mut voters, mut candidates): (usize, usize) = Arbitrary::arbitrary(g);

            // `Arbitrary` for numbers will generate "problematic" examples such as
            // `usize::max_value()` but we'll use them to allocate vectors so we'll
            // limit them.
            candidates = candidates % g.size();
            voters = if candidates != 0 { voters % g.size() } else { 0 };

            let mut votes = TotalRanking::new(candidates);
            votes.generate_uniform(&mut std_rng(g), voters);
            votes
        }
    }

    #[quickcheck]
    fn arbitrary(votes: TotalRanking) -> bool {
        votes.valid()
    }

    #[quickcheck]
    fn every_vote_has_a_favourite(votes: TotalRanking) -> bool {
        votes.voters().iter().all(|v| {
            votes.candidates().iter().filter(|c| votes.get_preference(c, v) == Some(0)).count()
                == 1
        })
    }

    #[test]
    fn add_ranks() {
        let mut votes = TotalRanking::new(3);
        votes.add(&[2, 0, 1]).unwrap();
        assert_eq!(votes.get_preference(&0, &0), Some(2));
        assert_eq!(votes.get_preference(&1, &0), Some(0));
        assert_eq!(votes.get_preference(&2, &0), Some(1));
        assert_eq!(votes.get_preference(&3, &0), None);
        assert_eq!(votes.get_preference(&0, &1), None);
    }

    #[test]
    fn add_order_inverts() {
        let mut votes = TotalRanking::new(3);
        votes.add_order(&[2, 0, 1]).unwrap();
        assert_eq!(votes.vote_i(0), &[1, 2, 0]);
    }

    #[test]
    fn reject_invalid_votes() {
        let mut votes = TotalRanking::new(3);
        assert_eq!(votes.add(&[0, 1]), Err(BallotError::WrongLength { expected: 3, found: 2 }));
        assert_eq!(votes.add(&[0, 1, 3]), Err(BallotError::OutOfRange { value: 3 }));
        assert_eq!(votes.add(&[0, 1, 1]), Err(BallotError::Duplicate { value: 1 }));
        assert_eq!(votes.add_order(&[2, 2, 0]), Err(BallotError::Duplicate { value: 2 }));
        assert_eq!(votes.voter_count(), 0);
        assert!(votes.valid());
    }

    #[test]
    fn voters_without_candidates() {
        let mut votes = TotalRanking::new(0);
        assert_eq!(votes.add(&[]), Ok(()));
        assert_eq!(votes.add_order(&[]), Ok(()));
        assert_eq!(votes.add(&[0]), Err(BallotError::WrongLength { expected: 0, found: 1 }));
        assert_eq!(votes.voter_count(), 2);
        assert!(votes.valid());
        assert_eq!(votes.to_string(), "");
        assert_eq!(plurality(&votes, &1), Err(VotingError::NoCandidates));
    }

    #[test]
    fn display() {
        let mut votes = TotalRanking::new(3);
        votes.add(&[0, 1, 2]).unwrap();
        votes.add(&[2, 0, 1]).unwrap();
        assert_eq!(votes.to_string(), "0,1,2\n2,0,1\n");
    }
}
