//! Graph validation logic.

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeKind, HarnessGraph};

/// Validate the loaded graph: every pin has one owning ECU, internal edges
/// only run ECU -> pin, and every wire has an identical reverse segment.
pub fn validate_invariants(graph: &HarnessGraph) -> GraphResult<()> {
    validate_internal_edges(graph)?;
    validate_pin_ownership(graph)?;
    validate_wire_symmetry(graph)
}

fn validate_internal_edges(graph: &HarnessGraph) -> GraphResult<()> {
    for edge in graph.edges.iter().filter(|e| e.kind.is_internal()) {
        let from = &graph.nodes[edge.from.slot()];
        let to = &graph.nodes[edge.to.slot()];
        if !from.kind.is_ecu() || !to.kind.is_pin() {
            return Err(GraphError::InternalEdgeMisuse {
                from: from.key.clone(),
                to: to.key.clone(),
            });
        }
    }
    Ok(())
}

fn validate_pin_ownership(graph: &HarnessGraph) -> GraphResult<()> {
    // Count owners per node slot
    let mut owners = vec![0_usize; graph.nodes.len()];
    for edge in graph.edges.iter().filter(|e| e.kind.is_internal()) {
        owners[edge.to.slot()] += 1;
    }

    for node in graph.nodes.iter().filter(|n| n.kind.is_pin()) {
        match owners[node.id.slot()] {
            1 => {}
            0 => {
                return Err(GraphError::OrphanPin {
                    pin: node.key.clone(),
                });
            }
            count => {
                return Err(GraphError::MultipleOwners {
                    pin: node.key.clone(),
                    count,
                });
            }
        }
    }
    Ok(())
}

fn validate_wire_symmetry(graph: &HarnessGraph) -> GraphResult<()> {
    for edge in &graph.edges {
        let EdgeKind::Wire(attrs) = &edge.kind else {
            continue;
        };
        let from = graph.key_of(edge.from);
        let to = graph.key_of(edge.to);
        let mirrored = graph
            .get_edge(to, from)
            .is_some_and(|mirror| mirror.kind.as_wire() == Some(attrs));
        if !mirrored {
            return Err(GraphError::AsymmetricWire {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }
    Ok(())
}

/// True when the graph holds no pin, so no load can resolve.
pub fn is_unpowered(graph: &HarnessGraph) -> bool {
    !graph.nodes.iter().any(|n| n.kind.is_pin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeKind, PinAttrs, WireAttrs};

    fn ecu() -> NodeKind {
        NodeKind::Ecu {
            raw_spec: serde_json::Value::Null,
        }
    }

    fn wire() -> EdgeKind {
        EdgeKind::Wire(WireAttrs::new(18, 1.5, 0.021))
    }

    fn owned_pin() -> HarnessGraph {
        let mut g = HarnessGraph::new();
        g.add_node("ECU", ecu());
        g.add_node("ECU:P1", NodeKind::Pin(PinAttrs::new(5.0, 12.0)));
        g.add_edge("ECU", "ECU:P1", EdgeKind::Internal);
        g
    }

    #[test]
    fn validate_empty_graph() {
        assert!(validate_invariants(&HarnessGraph::new()).is_ok());
        assert!(is_unpowered(&HarnessGraph::new()));
    }

    #[test]
    fn validate_owned_pin_with_symmetric_wire() {
        let mut g = owned_pin();
        g.add_edge("ECU:P1", "Load", wire());
        g.add_edge("Load", "ECU:P1", wire());
        assert!(validate_invariants(&g).is_ok());
        assert!(!is_unpowered(&g));
    }

    #[test]
    fn orphan_pin_rejected() {
        let mut g = HarnessGraph::new();
        g.add_node("Lonely:P1", NodeKind::Pin(PinAttrs::new(5.0, 12.0)));
        assert_eq!(
            validate_invariants(&g),
            Err(GraphError::OrphanPin {
                pin: "Lonely:P1".into()
            })
        );
    }

    #[test]
    fn pin_with_two_owners_rejected() {
        let mut g = owned_pin();
        g.add_node("ECU2", ecu());
        g.add_edge("ECU2", "ECU:P1", EdgeKind::Internal);
        assert!(matches!(
            validate_invariants(&g),
            Err(GraphError::MultipleOwners { count: 2, .. })
        ));
    }

    #[test]
    fn one_way_wire_rejected() {
        let mut g = owned_pin();
        g.add_edge("ECU:P1", "Load", wire());
        assert!(matches!(
            validate_invariants(&g),
            Err(GraphError::AsymmetricWire { .. })
        ));
    }

    #[test]
    fn mismatched_mirror_rejected() {
        let mut g = owned_pin();
        g.add_edge("ECU:P1", "Load", wire());
        g.add_edge(
            "Load",
            "ECU:P1",
            EdgeKind::Wire(WireAttrs::new(18, 2.0, 0.021)),
        );
        assert!(matches!(
            validate_invariants(&g),
            Err(GraphError::AsymmetricWire { .. })
        ));
    }

    #[test]
    fn internal_edge_between_generics_rejected() {
        let mut g = HarnessGraph::new();
        g.add_edge("A", "B", EdgeKind::Internal);
        assert!(matches!(
            validate_invariants(&g),
            Err(GraphError::InternalEdgeMisuse { .. })
        ));
    }
}
