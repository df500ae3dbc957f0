use std::collections::BTreeMap;
use std::fmt::Debug;

use super::Preferences;
use crate::error::BallotError;

/// Preferences over named candidates, cast by named voters.
///
/// ```
/// use social_choice::formats::{Preferences, Profile};
///
/// let profile = Profile::new(["apple", "pear", "plum"])
///     .unwrap()
///     .with_voter("ann", &["pear", "plum", "apple"])
///     .unwrap();
/// assert_eq!(profile.get_preference(&"apple", &"ann"), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile<C, V> {
    // Position of every candidate in `ranks`
    candidates: BTreeMap<C, usize>,
    // The rank every voter gave each candidate, indexed by candidate position
    ranks: BTreeMap<V, Vec<usize>>,
}

impl<C, V> Profile<C, V>
where
    C: Clone + Ord + Debug,
    V: Clone + Ord + Debug,
{
    pub fn new<I: IntoIterator<Item = C>>(candidates: I) -> Result<Self, BallotError> {
        let mut map = BTreeMap::new();
        for c in candidates {
            let position = map.len();
            if map.contains_key(&c) {
                return Err(BallotError::DuplicateCandidate(format!("{:?}", c)));
            }
            map.insert(c, position);
        }
        Ok(Profile { candidates: map, ranks: BTreeMap::new() })
    }

    /// Add a vote from `voter`, listing every candidate from most to least
    /// preferred.
    pub fn add_voter(&mut self, voter: V, order: &[C]) -> Result<(), BallotError> {
        if self.ranks.contains_key(&voter) {
            return Err(BallotError::DuplicateVoter(format!("{:?}", voter)));
        }
        if order.len() != self.candidates.len() {
            return Err(BallotError::WrongLength {
                expected: self.candidates.len(),
                found: order.len(),
            });
        }
        // `usize::MAX` marks candidates which haven't been ranked yet
        let mut ranks = vec![usize::MAX; self.candidates.len()];
        for (rank, c) in order.iter().enumerate() {
            let &position = self
                .candidates
                .get(c)
                .ok_or_else(|| BallotError::UnknownCandidate(format!("{:?}", c)))?;
            if ranks[position] != usize::MAX {
                return Err(BallotError::DuplicateCandidate(format!("{:?}", c)));
            }
            ranks[position] = rank;
        }
        self.ranks.insert(voter, ranks);
        Ok(())
    }

    /// Like [`add_voter`](Self::add_voter), but can be chained.
    pub fn with_voter(mut self, voter: V, order: &[C]) -> Result<Self, BallotError> {
        self.add_voter(voter, order)?;
        Ok(self)
    }

    pub fn voter_count(&self) -> usize {
        self.ranks.len()
    }
}

impl<C, V> Preferences for Profile<C, V>
where
    C: Clone + Ord + Debug,
    V: Clone + Ord + Debug,
{
    type Candidate = C;
    type Voter = V;

    fn candidates(&self) -> Vec<C> {
        self.candidates.keys().cloned().collect()
    }

    fn voters(&self) -> Vec<V> {
        self.ranks.keys().cloned().collect()
    }

    fn get_preference(&self, candidate: &C, voter: &V) -> Option<usize> {
        let &position = self.candidates.get(candidate)?;
        self.ranks.get(voter).map(|ranks| ranks[position])
    }

    fn is_voter(&self, voter: &V) -> bool {
        self.ranks.contains_key(voter)
    }
}
