//! Graph-specific error types.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural invariant violations found when sealing a loaded graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A pin has no internal edge from an ECU.
    #[error("Pin {pin} is not owned by any ECU")]
    OrphanPin { pin: String },

    /// A pin has internal edges from more than one ECU.
    #[error("Pin {pin} is owned by {count} ECUs (expected 1)")]
    MultipleOwners { pin: String, count: usize },

    /// A wire edge has no mirror, or the mirror carries different attributes.
    #[error("Wire {from} -> {to} has no matching reverse segment")]
    AsymmetricWire { from: String, to: String },

    /// An internal edge that does not run from an ECU to a pin.
    #[error("Internal edge {from} -> {to} must connect an ECU to one of its pins")]
    InternalEdgeMisuse { from: String, to: String },
}

/// Errors from tracing a load back to its power source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    #[error("No path to power source found for {load}")]
    NoPowerPath { load: String },
}
