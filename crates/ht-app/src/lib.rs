//! Shared application service layer for the harness twin.
//!
//! Builds a validated [`HarnessTwin`] from ECU descriptors and a netlist, then
//! answers "can this load draw that current?" queries against it. The CLI
//! and any other frontend go through this crate.

pub mod dataset_service;
pub mod error;
pub mod twin;

// Re-export key types for convenience
pub use dataset_service::{QueryRecord, QueryResult, build_twin, load_dataset, run_queries};
pub use error::{AppError, AppResult};
pub use twin::{HarnessTwin, TwinBuilder};
