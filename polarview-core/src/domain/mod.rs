// polarview-core/src/domain/mod.rs

pub mod analysis;
pub mod geo;
pub mod legislature;
