// polarview-core/src/domain/analysis/extremism.rs

use std::collections::BTreeMap;

use crate::domain::analysis::stats;
use crate::domain::geo::HexCell;
use crate::domain::legislature::member::MemberVote;

/// Abbreviation of the synthetic national-median row appended to the map
/// table. The hex grid carries no such cell, so the geo inner join drops it
/// again — an observable quirk of the pipeline that is kept as-is.
pub const NATIONAL_AGGREGATE: &str = "US";

/// One map-table row before the geo join.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub state: String,
    /// `None` only possible for the synthetic national row.
    pub extremism_change: Option<f64>,
    pub current_score: f64,
}

/// One map-table row after the geo join.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRow {
    pub state_abbr: String,
    pub extremism_change: Option<f64>,
    pub current_score: f64,
    pub state_name: String,
    pub hex_row: i64,
    pub hex_col: i64,
}

/// Median ideal point per state at the given term.
pub fn current_scores(votes: &[MemberVote], term: u32) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for vote in votes.iter().filter(|v| v.term == term) {
        groups.entry(vote.state.clone()).or_default().push(vote.score);
    }
    groups
        .into_iter()
        .filter_map(|(state, scores)| stats::median(&scores).map(|m| (state, m)))
        .collect()
}

/// Change in the median *absolute* ideal point per state between the two
/// endpoint terms, sorted by state. A state present at only one endpoint has
/// no defined difference and is excluded.
pub fn extremism_changes(
    votes: &[MemberVote],
    early_term: u32,
    late_term: u32,
) -> Vec<(String, f64)> {
    let mut early: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut late: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for vote in votes {
        if vote.term == early_term {
            early.entry(&vote.state).or_default().push(vote.score);
        }
        if vote.term == late_term {
            late.entry(&vote.state).or_default().push(vote.score);
        }
    }

    let mut changes = Vec::new();
    for (state, late_scores) in &late {
        let Some(early_scores) = early.get(state) else {
            continue;
        };
        if let (Some(early_median), Some(late_median)) =
            (stats::median(early_scores), stats::median(late_scores))
        {
            changes.push((state.to_string(), late_median.abs() - early_median.abs()));
        }
    }
    // BTreeMap iteration already yields states in sorted order
    changes
}

/// Joins the change table with the current-score table (inner join on
/// state), then appends the synthetic national row carrying the median of
/// all changes and the median of all current scores.
pub fn map_entries(changes: &[(String, f64)], current: &BTreeMap<String, f64>) -> Vec<MapEntry> {
    let mut entries: Vec<MapEntry> = changes
        .iter()
        .filter_map(|(state, change)| {
            current.get(state).map(|score| MapEntry {
                state: state.clone(),
                extremism_change: Some(*change),
                current_score: *score,
            })
        })
        .collect();

    let all_changes: Vec<f64> = entries.iter().filter_map(|e| e.extremism_change).collect();
    let all_scores: Vec<f64> = entries.iter().map(|e| e.current_score).collect();
    if let Some(score_median) = stats::median(&all_scores) {
        entries.push(MapEntry {
            state: NATIONAL_AGGREGATE.to_string(),
            extremism_change: stats::median(&all_changes),
            current_score: score_median,
        });
    }
    entries
}

/// Inner join with the hex grid on the state abbreviation. Entries without a
/// hex cell are dropped (notably the synthetic national row); row order
/// follows the hex grid.
pub fn geo_join(entries: &[MapEntry], cells: &[HexCell]) -> Vec<MapRow> {
    let by_state: BTreeMap<&str, &MapEntry> =
        entries.iter().map(|e| (e.state.as_str(), e)).collect();

    cells
        .iter()
        .filter_map(|cell| {
            by_state.get(cell.abbr.as_str()).map(|entry| MapRow {
                state_abbr: cell.abbr.clone(),
                extremism_change: entry.extremism_change,
                current_score: entry.current_score,
                state_name: cell.name.clone(),
                hex_row: cell.row,
                hex_col: cell.col,
            })
        })
        .collect()
}
