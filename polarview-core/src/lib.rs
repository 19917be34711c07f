// polarview-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the two tabular input collaborators.
pub mod ports;

// 2. Domain (pure transformations)
// Records, cleaning rules, window/year derivation, aggregations.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// CSV readers/writers, atomic file persistence.
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (run, export, clean).
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use polarview_core::PolarViewError;
pub use error::PolarViewError;
