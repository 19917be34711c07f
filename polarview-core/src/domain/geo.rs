// polarview-core/src/domain/geo.rs

use serde::Deserialize;

/// One hex-grid cell per jurisdiction, used to place states on a hexagonal
/// map. Only these four columns of the source table are retained; whatever
/// else the file carries is discarded at load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HexCell {
    #[serde(rename = "StateAbbr")]
    pub abbr: String,

    #[serde(rename = "StateName")]
    pub name: String,

    #[serde(rename = "HexRow")]
    pub row: i64,

    #[serde(rename = "HexCol")]
    pub col: i64,
}
