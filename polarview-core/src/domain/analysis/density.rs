// polarview-core/src/domain/analysis/density.rs

use std::collections::BTreeMap;

use crate::domain::legislature::member::{MemberVote, Party};
use crate::domain::legislature::term::TermYears;

/// Per-term score distributions: every Republican and every Democrat ideal
/// point of the term, in input row order.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityRow {
    pub term: u32,
    pub republican_scores: Vec<f64>,
    pub democrat_scores: Vec<f64>,
    pub years: TermYears,
}

/// Groups scores by (term, party) and pivots to one row per term. Inner-join
/// semantics: a term with members of only one party does not appear. Within
/// a group, score order follows the input row order (not sorted).
pub fn density_by_term(votes: &[MemberVote]) -> Vec<DensityRow> {
    let mut groups: BTreeMap<u32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for vote in votes {
        let (republicans, democrats) = groups.entry(vote.term).or_default();
        match vote.party {
            Party::Republican => republicans.push(vote.score),
            Party::Democrat => democrats.push(vote.score),
        }
    }

    groups
        .into_iter()
        .filter(|(_, (republicans, democrats))| !republicans.is_empty() && !democrats.is_empty())
        .map(|(term, (republican_scores, democrat_scores))| DensityRow {
            term,
            republican_scores,
            democrat_scores,
            years: TermYears::from_term(term),
        })
        .collect()
}
