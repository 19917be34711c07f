// polarview-core/src/domain/analysis/polarization.rs

use std::collections::BTreeMap;

use crate::domain::analysis::stats;
use crate::domain::legislature::member::{MemberVote, Party};
use crate::domain::legislature::term::TermYears;

/// Per-term polarization index on a 0-100 scale: the distance of each
/// party's median ideal point from zero, averaged over the two parties.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarizationRow {
    pub term: u32,
    pub percentage: f64,
    pub years: TermYears,
}

/// Sums the absolute per-party medians per term, halves and scales by 100.
/// A term with members of only one party still yields a row (the sum runs
/// over whatever parties are present); there is no join at this step.
pub fn polarization_by_term(votes: &[MemberVote]) -> Vec<PolarizationRow> {
    let mut groups: BTreeMap<(u32, Party), Vec<f64>> = BTreeMap::new();
    for vote in votes {
        groups
            .entry((vote.term, vote.party))
            .or_default()
            .push(vote.score);
    }

    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for ((term, _party), scores) in &groups {
        if let Some(median) = stats::median(scores) {
            *sums.entry(*term).or_insert(0.0) += median.abs();
        }
    }

    sums.into_iter()
        .map(|(term, sum)| PolarizationRow {
            term,
            percentage: sum / 2.0 * 100.0,
            years: TermYears::from_term(term),
        })
        .collect()
}
