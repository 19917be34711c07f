// polarview-core/src/application/pipeline.rs

use serde::Serialize;
use tracing::info;

use crate::domain::analysis::density::{self, DensityRow};
use crate::domain::analysis::extremism::{self, MapRow};
use crate::domain::analysis::polarization::{self, PolarizationRow};
use crate::domain::legislature::member::MemberVote;
use crate::domain::legislature::term::TermWindow;
use crate::error::PolarViewError;
use crate::ports::source::{HexGridSource, VoteSource};

/// The three derived tables of one pipeline run.
pub struct PipelineOutput {
    pub density: Vec<DensityRow>,
    pub polarization: Vec<PolarizationRow>,
    pub map: Vec<MapRow>,
}

/// Run summary handed back to the caller for reporting.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub window: Option<(u32, u32)>,
    pub cleaned_rows: usize,
    pub density_rows: usize,
    pub polarization_rows: usize,
    pub map_rows: usize,
}

/// Executes the whole batch transformation: load both tables, scope and
/// clean the member votes, then derive the density, polarization and map
/// tables. One deterministic in-memory pass; nothing is written here.
pub fn run_pipeline<V, H>(
    votes_source: &V,
    hex_source: &H,
) -> Result<(PipelineOutput, RunResult), PolarViewError>
where
    V: VoteSource,
    H: HexGridSource,
{
    println!("📥 Loading input tables...");
    let raw_votes = votes_source.load()?;
    let hex_cells = hex_source.load()?;
    info!(
        raw_rows = raw_votes.len(),
        hex_cells = hex_cells.len(),
        "Inputs loaded"
    );

    // Scope window over the *unfiltered* load: the newest term present is
    // treated as incomplete and excluded. An input with no terms at all
    // yields an empty window and header-only outputs, not an error.
    let window = TermWindow::from_terms(raw_votes.iter().filter_map(|r| r.term));

    println!("🧹 Cleaning member-vote rows...");
    let votes: Vec<MemberVote> = match window {
        Some(w) => raw_votes
            .into_iter()
            .filter(|r| r.term.is_some_and(|t| w.contains(t)))
            .filter_map(MemberVote::from_raw)
            .collect(),
        None => Vec::new(),
    };
    info!(cleaned_rows = votes.len(), ?window, "Cleaning done");

    println!("📊 Aggregating per-term distributions...");
    let density = density::density_by_term(&votes);
    let polarization = polarization::polarization_by_term(&votes);

    println!("🗺️  Building the state map table...");
    let map = match observed_endpoints(&votes) {
        Some((first, last)) => {
            let current = extremism::current_scores(&votes, last);
            let changes = extremism::extremism_changes(&votes, first, last);
            let entries = extremism::map_entries(&changes, &current);
            extremism::geo_join(&entries, &hex_cells)
        }
        None => Vec::new(),
    };

    let result = RunResult {
        window: window.map(|w| (w.first, w.last)),
        cleaned_rows: votes.len(),
        density_rows: density.len(),
        polarization_rows: polarization.len(),
        map_rows: map.len(),
    };

    Ok((
        PipelineOutput {
            density,
            polarization,
            map,
        },
        result,
    ))
}

/// Minimum and maximum terms actually present in the cleaned data. With a
/// sparse input these can sit strictly inside the nominal scope window.
fn observed_endpoints(votes: &[MemberVote]) -> Option<(u32, u32)> {
    let first = votes.iter().map(|v| v.term).min()?;
    let last = votes.iter().map(|v| v.term).max()?;
    Some((first, last))
}
