//! ht-physics: electrical checks along a resolved power path.
//!
//! Provides:
//! - Series resistance accumulation over wire segments
//! - Voltage drop by Ohm's law
//! - Pass/fail rules (pin capacity, voltage drop) behind the `LoadRule` trait
//!
//! All rules run on every evaluation; a request can fail any subset of them.
//!
//! # Example
//!
//! ```
//! use ht_graph::{EdgeKind, HarnessGraph, NodeKind, PinAttrs, WireAttrs, resolve_power_path};
//! use ht_physics::Evaluator;
//!
//! let mut graph = HarnessGraph::new();
//! graph.add_node("BCM", NodeKind::Ecu { raw_spec: serde_json::Value::Null });
//! graph.add_node("BCM:Pin4", NodeKind::Pin(PinAttrs::new(5.0, 12.0)));
//! graph.add_edge("BCM", "BCM:Pin4", EdgeKind::Internal);
//! let wire = EdgeKind::Wire(WireAttrs::new(18, 2.0, 0.021));
//! graph.add_edge("BCM:Pin4", "Lamp", wire);
//! graph.add_edge("Lamp", "BCM:Pin4", wire);
//!
//! let path = resolve_power_path(&graph, "Lamp").unwrap();
//! let verdict = Evaluator::default().evaluate(&path, 4.0);
//! assert!(verdict.passed());
//! assert_eq!(verdict.voltage_drop_v, 0.168);
//! ```

pub mod error;
pub mod evaluator;
pub mod resistance;
pub mod rules;
pub mod verdict;

// Re-exports
pub use error::{PhysicsError, PhysicsResult};
pub use evaluator::{EvaluationLimits, Evaluator};
pub use resistance::{path_resistance, segment_resistance, voltage_drop};
pub use rules::{CapacityRule, LoadRule, RuleInput, VoltageDropRule};
pub use verdict::{RuleOutcome, RuleStatus, Verdict, VerdictReport};
