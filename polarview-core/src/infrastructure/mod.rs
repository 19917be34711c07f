// polarview-core/src/infrastructure/mod.rs

pub mod csv;
pub mod error;
pub mod fs;
