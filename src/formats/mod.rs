//! Tables of preferences which the voting methods read from.
//!
//! Every table implements [`Preferences`], which answers one question: which
//! rank did a voter give a candidate? Ranks start at 0 for the most preferred
//! candidate, and every voter ranks every candidate exactly once.

use std::fmt::Debug;

/// A read-only table of ranked preferences.
pub trait Preferences {
    type Candidate: Clone + Ord + Debug;
    type Voter: Clone + Ord + Debug;

    /// List every candidate
    fn candidates(&self) -> Vec<Self::Candidate>;

    /// List every voter
    fn voters(&self) -> Vec<Self::Voter>;

    /// The rank `voter` gave `candidate`, where 0 is their favourite. Returns
    /// `None` if either of them is unknown to the table.
    fn get_preference(&self, candidate: &Self::Candidate, voter: &Self::Voter) -> Option<usize>;

    fn is_voter(&self, voter: &Self::Voter) -> bool {
        self.voters().contains(voter)
    }
}

impl<P: Preferences + ?Sized> Preferences for &P {
    type Candidate = P::Candidate;
    type Voter = P::Voter;

    fn candidates(&self) -> Vec<Self::Candidate> {
        (**self).candidates()
    }

    fn voters(&self) -> Vec<Self::Voter> {
        (**self).voters()
    }

    fn get_preference(&self, candidate: &Self::Candidate, voter: &Self::Voter) -> Option<usize> {
        (**self).get_preference(candidate, voter)
    }

    fn is_voter(&self, voter: &Self::Voter) -> bool {
        (**self).is_voter(voter)
    }
}

mod profile;
pub use profile::Profile;
mod total_ranking;
pub use total_ranking::TotalRanking;
