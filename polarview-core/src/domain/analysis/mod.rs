// polarview-core/src/domain/analysis/mod.rs

pub mod density;
pub mod extremism;
pub mod polarization;
pub mod stats;
