// polarview-core/src/ports/source.rs
//
// The pipeline consumes its two tabular inputs through these ports; the
// CSV adapters in the infrastructure layer are the production
// implementations, tests plug in in-memory fakes.

use crate::domain::geo::HexCell;
use crate::domain::legislature::member::RawMemberVote;
use crate::error::PolarViewError;

/// Supplies the member-vote table (one row per legislator per term).
pub trait VoteSource {
    fn load(&self) -> Result<Vec<RawMemberVote>, PolarViewError>;
}

/// Supplies the hex-grid table (one cell per jurisdiction).
pub trait HexGridSource {
    fn load(&self) -> Result<Vec<HexCell>, PolarViewError>;
}
