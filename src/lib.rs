//! This is a crate of social choice functions: voting methods which elect a
//! single winner from a table of ranked preferences.
//!
//! The methods are dictatorship, general scoring rules, plurality, veto, Borda
//! count and single transferable vote. Every method reads a table through the
//! [`Preferences`](formats::Preferences) trait, so they work just as well on
//! numbered candidates as on named ones.
//!
//! Example usage:
//! ```
//! use social_choice::prelude::*;
//! use social_choice::methods::{borda, plurality};
//! use social_choice::formats::TotalRanking;
//!
//! let mut votes = TotalRanking::new(3);
//! votes.add_order(&[0, 1, 2]).unwrap();
//! votes.add_order(&[0, 2, 1]).unwrap();
//! votes.add_order(&[1, 2, 0]).unwrap();
//! votes.add_order(&[2, 1, 0]).unwrap();
//!
//! assert_eq!(plurality(&votes, &3), Ok(0));
//! // Every candidate has a Borda score of 4, so voter 3 breaks the tie
//! assert_eq!(borda(&votes, &3), Ok(2));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod error;
pub mod formats;
pub mod methods;

/// Commonly used traits
pub mod prelude {
    pub use super::{
        error::{BallotError, VotingError},
        formats::Preferences,
    };
}
