// polarview-core/src/application/mod.rs

pub mod clean;
pub mod export;
pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use polarview_core::application::{run_pipeline, write_outputs, clean_outputs};`
// without knowing the internal file layout.

pub use clean::clean_outputs;
pub use export::write_outputs;
pub use pipeline::{run_pipeline, PipelineOutput, RunResult};
