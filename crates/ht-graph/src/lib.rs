//! ht-graph: graph/model layer for harness-twin.
//!
//! Provides:
//! - The harness graph store (ECUs, pins, splices/loads, wires)
//! - Invariant validation (pin ownership, wire symmetry)
//! - Power-path resolution from a load to its nearest pin
//!
//! # Example
//!
//! ```
//! use ht_graph::{EdgeKind, HarnessGraph, NodeKind, PinAttrs, WireAttrs, resolve_power_path};
//!
//! let mut graph = HarnessGraph::new();
//! graph.add_node("BCM", NodeKind::Ecu { raw_spec: serde_json::Value::Null });
//! graph.add_node("BCM:Pin4", NodeKind::Pin(PinAttrs::new(5.0, 12.0)));
//! graph.add_edge("BCM", "BCM:Pin4", EdgeKind::Internal);
//! let wire = EdgeKind::Wire(WireAttrs::new(18, 1.5, 0.021));
//! graph.add_edge("BCM:Pin4", "Lamp", wire);
//! graph.add_edge("Lamp", "BCM:Pin4", wire);
//!
//! let path = resolve_power_path(&graph, "Lamp").unwrap();
//! assert_eq!(path.pin.key, "BCM:Pin4");
//! assert_eq!(path.hop_count(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod path;
pub mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult, ResolveError};
pub use graph::{Edge, EdgeKind, GraphSummary, HarnessGraph, Node, NodeKind, PinAttrs, WireAttrs};
pub use path::{PathHop, PathSpec, PinRef, resolve_power_path};
pub use validate::{is_unpowered, validate_invariants};
