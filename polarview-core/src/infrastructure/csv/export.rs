// polarview-core/src/infrastructure/csv/export.rs
//
// Serializes the three derived tables. Each table is rendered into an
// in-memory buffer so the caller can commit it atomically; the header row
// is always present, even for an empty table.

use csv::Writer;

use crate::domain::analysis::density::DensityRow;
use crate::domain::analysis::extremism::MapRow;
use crate::domain::analysis::polarization::PolarizationRow;
use crate::error::PolarViewError;

pub const DENSITY_FILE: &str = "density_data.csv";
pub const POLARIZATION_FILE: &str = "scatterplot_df_data.csv";
pub const MAP_FILE: &str = "hexmap.csv";

/// Renders the density table. The per-party score lists are nested
/// containers in memory and become JSON-array cells on disk, so list
/// boundaries stay unambiguous inside a CSV field.
pub fn density_csv(rows: &[DensityRow]) -> Result<Vec<u8>, PolarViewError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record([
            "congress",
            "R_nominate_dim1",
            "D_nominate_dim1",
            "starting_yr",
            "ending_yr",
            "year",
        ])
        .map_err(write_error)?;

    for row in rows {
        writer
            .write_record([
                row.term.to_string(),
                score_list(&row.republican_scores)?,
                score_list(&row.democrat_scores)?,
                row.years.start.to_string(),
                row.years.end.to_string(),
                row.years.label.clone(),
            ])
            .map_err(write_error)?;
    }
    finish(writer)
}

/// Renders the polarization table.
pub fn polarization_csv(rows: &[PolarizationRow]) -> Result<Vec<u8>, PolarViewError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record([
            "congress",
            "polarization_percentage",
            "starting_yr",
            "ending_yr",
            "year",
        ])
        .map_err(write_error)?;

    for row in rows {
        writer
            .write_record([
                row.term.to_string(),
                row.percentage.to_string(),
                row.years.start.to_string(),
                row.years.end.to_string(),
                row.years.label.clone(),
            ])
            .map_err(write_error)?;
    }
    finish(writer)
}

/// Renders the map table. An absent extremism change (only possible for a
/// surviving synthetic row) becomes an empty cell.
pub fn map_csv(rows: &[MapRow]) -> Result<Vec<u8>, PolarViewError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record([
            "StateAbbr",
            "extremism_change",
            "current_score",
            "StateName",
            "HexRow",
            "HexCol",
        ])
        .map_err(write_error)?;

    for row in rows {
        writer
            .write_record([
                row.state_abbr.clone(),
                row.extremism_change.map(|c| c.to_string()).unwrap_or_default(),
                row.current_score.to_string(),
                row.state_name.clone(),
                row.hex_row.to_string(),
                row.hex_col.to_string(),
            ])
            .map_err(write_error)?;
    }
    finish(writer)
}

fn score_list(scores: &[f64]) -> Result<String, PolarViewError> {
    serde_json::to_string(scores)
        .map_err(|e| PolarViewError::InternalError(format!("Score list serialization: {}", e)))
}

fn write_error(err: csv::Error) -> PolarViewError {
    PolarViewError::InternalError(format!("CSV buffer write: {}", err))
}

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, PolarViewError> {
    writer
        .into_inner()
        .map_err(|e| PolarViewError::InternalError(format!("CSV buffer flush: {}", e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::legislature::term::TermYears;

    #[test]
    fn test_density_cells_are_json_lists() {
        let rows = vec![DensityRow {
            term: 113,
            republican_scores: vec![0.5, 0.75, 0.25],
            democrat_scores: vec![-0.5, -0.25],
            years: TermYears::from_term(113),
        }];
        let bytes = density_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "congress,R_nominate_dim1,D_nominate_dim1,starting_yr,ending_yr,year\n\
             113,\"[0.5,0.75,0.25]\",\"[-0.5,-0.25]\",2013,2015,2013-15\n"
        );
    }

    #[test]
    fn test_empty_tables_keep_header_row() {
        let text = String::from_utf8(polarization_csv(&[]).unwrap()).unwrap();
        assert_eq!(
            text,
            "congress,polarization_percentage,starting_yr,ending_yr,year\n"
        );
    }

    #[test]
    fn test_map_row_rendering() {
        let rows = vec![MapRow {
            state_abbr: "CA".to_string(),
            extremism_change: Some(0.25),
            current_score: -0.5,
            state_name: "California".to_string(),
            hex_row: 5,
            hex_col: 1,
        }];
        let text = String::from_utf8(map_csv(&rows).unwrap()).unwrap();
        assert_eq!(
            text,
            "StateAbbr,extremism_change,current_score,StateName,HexRow,HexCol\n\
             CA,0.25,-0.5,California,5,1\n"
        );
    }
}
