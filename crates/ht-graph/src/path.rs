//! Power-path resolution: from a load back to the pin that feeds it.

use std::collections::VecDeque;

use ht_core::{EdgeId, NodeId};
use serde::Serialize;

use crate::error::ResolveError;
use crate::graph::{EdgeKind, HarnessGraph, PinAttrs};

/// The pin a path terminates at, with its rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinRef {
    pub key: String,
    pub max_current_amps: f64,
    pub voltage_ref: f64,
}

impl PinRef {
    fn new(key: &str, attrs: &PinAttrs) -> Self {
        Self {
            key: key.to_string(),
            max_current_amps: attrs.max_current_amps,
            voltage_ref: attrs.voltage_ref,
        }
    }
}

/// One traversed edge of a resolved path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathHop {
    pub from: String,
    pub to: String,
    pub edge: EdgeKind,
}

/// A resolved path, ordered load -> pin.
///
/// `nodes` has one more entry than `hops`; `hops[i]` joins `nodes[i]` and
/// `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSpec {
    pub nodes: Vec<String>,
    pub hops: Vec<PathHop>,
    pub pin: PinRef,
}

impl PathSpec {
    /// The node the search started from.
    pub fn load(&self) -> &str {
        self.nodes.first().map_or("", String::as_str)
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Hops that are physical wire segments.
    pub fn wire_hops(&self) -> impl Iterator<Item = &PathHop> {
        self.hops.iter().filter(|h| !h.edge.is_internal())
    }
}

/// Find the nearest pin feeding `load`.
///
/// Breadth-first over outgoing edges: the first pin dequeued has the fewest
/// hops, and ties go to the neighbor inserted first. A load that is itself a
/// pin resolves to a zero-hop path.
pub fn resolve_power_path(graph: &HarnessGraph, load: &str) -> Result<PathSpec, ResolveError> {
    let start = graph
        .node_id(load)
        .ok_or_else(|| ResolveError::UnknownNode {
            node: load.to_string(),
        })?;

    let mut visited = vec![false; graph.node_count()];
    let mut parent: Vec<Option<EdgeId>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    visited[start.slot()] = true;

    while let Some(current) = queue.pop_front() {
        let node = &graph.nodes[current.slot()];
        if let Some(attrs) = node.kind.as_pin() {
            let path = build_path(graph, start, current, &parent, attrs);
            tracing::debug!(
                load,
                pin = %path.pin.key,
                hops = path.hop_count(),
                "resolved power path"
            );
            return Ok(path);
        }

        for edge in graph.out_edges(current) {
            let next = edge.to.slot();
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(edge.id);
                queue.push_back(edge.to);
            }
        }
    }

    Err(ResolveError::NoPowerPath {
        load: load.to_string(),
    })
}

/// Walk parent links back from the pin, then reverse into load -> pin order.
fn build_path(
    graph: &HarnessGraph,
    start: NodeId,
    pin: NodeId,
    parent: &[Option<EdgeId>],
    attrs: &PinAttrs,
) -> PathSpec {
    let mut hops = Vec::new();
    let mut cursor = pin;
    while cursor != start {
        let Some(edge_id) = parent[cursor.slot()] else {
            break;
        };
        let edge = &graph.edges[edge_id.slot()];
        hops.push(PathHop {
            from: graph.key_of(edge.from).to_string(),
            to: graph.key_of(edge.to).to_string(),
            edge: edge.kind,
        });
        cursor = edge.from;
    }
    hops.reverse();

    let mut nodes = Vec::with_capacity(hops.len() + 1);
    nodes.push(graph.key_of(start).to_string());
    nodes.extend(hops.iter().map(|h| h.to.clone()));

    PathSpec {
        nodes,
        hops,
        pin: PinRef::new(graph.key_of(pin), attrs),
    }
}
