use serde::{Deserialize, Serialize};

use super::{borda, dictatorship, plurality, scoring_rule, stv, veto};
use crate::{error::VotingError, formats::Preferences};

/// A voting method together with its parameters, so the method used for an
/// election can be chosen at runtime, e.g. from a configuration file:
///
/// ```
/// use social_choice::formats::TotalRanking;
/// use social_choice::methods::Rule;
///
/// let rule: Rule<usize> = serde_json::from_str(r#"{"rule": "plurality", "tie_break": 0}"#).unwrap();
/// let mut votes = TotalRanking::new(2);
/// votes.add_order(&[1, 0]).unwrap();
/// assert_eq!(rule.winner(&votes), Ok(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule<V> {
    Dictatorship { agent: V },
    Scoring { score_vector: Vec<i64>, tie_break: V },
    Plurality { tie_break: V },
    Veto { tie_break: V },
    Borda { tie_break: V },
    Stv { tie_break: V },
}

impl<V> Rule<V> {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Dictatorship { .. } => "dictatorship",
            Rule::Scoring { .. } => "scoring",
            Rule::Plurality { .. } => "plurality",
            Rule::Veto { .. } => "veto",
            Rule::Borda { .. } => "borda",
            Rule::Stv { .. } => "stv",
        }
    }

    /// Run the election described by this rule on `table`.
    pub fn winner<P>(&self, table: &P) -> Result<P::Candidate, VotingError>
    where
        P: Preferences<Voter = V>,
    {
        match self {
            Rule::Dictatorship { agent } => dictatorship(table, agent),
            Rule::Scoring { score_vector, tie_break } => scoring_rule(table, score_vector, tie_break),
            Rule::Plurality { tie_break } => plurality(table, tie_break),
            Rule::Veto { tie_break } => veto(table, tie_break),
            Rule::Borda { tie_break } => borda(table, tie_break),
            Rule::Stv { tie_break } => stv(table, tie_break),
        }
    }
}
