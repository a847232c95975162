//! Core graph data structures.

use std::collections::HashMap;

use ht_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Electrical rating of an ECU pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinAttrs {
    pub max_current_amps: f64,
    pub voltage_ref: f64,
    /// Function label from the datasheet (e.g. `Fog_Light_Front_L`).
    #[serde(default)]
    pub function: String,
    /// Driver type tag (e.g. `HSD`, `GND`).
    #[serde(default)]
    pub pin_type: String,
}

impl PinAttrs {
    pub fn new(max_current_amps: f64, voltage_ref: f64) -> Self {
        Self {
            max_current_amps,
            voltage_ref,
            function: String::new(),
            pin_type: String::new(),
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    pub fn with_type(mut self, pin_type: impl Into<String>) -> Self {
        self.pin_type = pin_type.into();
        self
    }
}

/// Physical attributes of one conductor segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireAttrs {
    pub gauge_awg: i32,
    pub length_m: f64,
    pub resistance_per_m: f64,
}

impl WireAttrs {
    pub fn new(gauge_awg: i32, length_m: f64, resistance_per_m: f64) -> Self {
        Self {
            gauge_awg,
            length_m,
            resistance_per_m,
        }
    }

    /// Segment resistance in ohms.
    pub fn resistance_ohm(&self) -> f64 {
        self.resistance_per_m * self.length_m
    }
}

/// Kind of a node, with the attributes that kind carries.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Electronic control unit. Keeps the source descriptor for traceability.
    Ecu { raw_spec: serde_json::Value },
    /// Rated contact on an ECU.
    Pin(PinAttrs),
    /// Splice, connector or load. Carries no attributes.
    Generic,
}

impl NodeKind {
    pub fn is_pin(&self) -> bool {
        matches!(self, NodeKind::Pin(_))
    }

    pub fn is_ecu(&self) -> bool {
        matches!(self, NodeKind::Ecu { .. })
    }

    pub fn as_pin(&self) -> Option<&PinAttrs> {
        match self {
            NodeKind::Pin(p) => Some(p),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Ecu { .. } => "ECU",
            NodeKind::Pin(_) => "PIN",
            NodeKind::Generic => "GENERIC",
        }
    }
}

/// Kind of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EdgeKind {
    /// ECU owns pin. Not a conductor.
    Internal,
    /// Physical wire segment.
    Wire(WireAttrs),
}

impl EdgeKind {
    pub fn as_wire(&self) -> Option<&WireAttrs> {
        match self {
            EdgeKind::Wire(w) => Some(w),
            EdgeKind::Internal => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, EdgeKind::Internal)
    }
}

/// A node in the harness graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub key: String,
    pub kind: NodeKind,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
}

/// Counts by kind, for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub ecus: usize,
    pub pins: usize,
    pub generic: usize,
    pub wire_edges: usize,
    pub internal_edges: usize,
}

/// The harness graph: nodes keyed by string, directed attributed edges.
///
/// Nodes and edges live in arenas indexed by their IDs. Each node keeps its
/// outgoing edges in insertion order, which is the neighbor order seen by
/// path search.
#[derive(Debug, Clone, Default)]
pub struct HarnessGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,

    /// Outgoing edge IDs per node slot, in insertion order.
    pub(crate) out_edges: Vec<Vec<EdgeId>>,

    key_index: HashMap<String, NodeId>,
    edge_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl HarnessGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or overwrite the kind of the node already under `key`.
    pub fn add_node(&mut self, key: impl Into<String>, kind: NodeKind) -> NodeId {
        let key = key.into();
        if let Some(&id) = self.key_index.get(&key) {
            self.nodes[id.slot()].kind = kind;
            return id;
        }
        self.push_node(key, kind)
    }

    /// Insert a directed edge. Missing endpoints are created as `Generic` nodes.
    ///
    /// A second edge for the same `(from, to)` pair replaces the first one's
    /// kind and keeps its place in neighbor order.
    pub fn add_edge(&mut self, from: &str, to: &str, kind: EdgeKind) -> EdgeId {
        let from_id = self.ensure_node(from);
        let to_id = self.ensure_node(to);

        if let Some(&id) = self.edge_index.get(&(from_id, to_id)) {
            self.edges[id.slot()].kind = kind;
            return id;
        }

        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            from: from_id,
            to: to_id,
            kind,
        });
        self.out_edges[from_id.slot()].push(id);
        self.edge_index.insert((from_id, to_id), id);
        id
    }

    /// Return the node under `key`, creating a bare `Generic` node if absent.
    pub fn ensure_node(&mut self, key: &str) -> NodeId {
        match self.key_index.get(key) {
            Some(&id) => id,
            None => self.push_node(key.to_string(), NodeKind::Generic),
        }
    }

    fn push_node(&mut self, key: String, kind: NodeKind) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.key_index.insert(key.clone(), id);
        self.nodes.push(Node { id, key, kind });
        self.out_edges.push(Vec::new());
        id
    }

    /// Look up a node by key.
    pub fn get_node(&self, key: &str) -> Option<&Node> {
        self.key_index.get(key).map(|id| &self.nodes[id.slot()])
    }

    /// Look up the directed edge `from -> to`.
    pub fn get_edge(&self, from: &str, to: &str) -> Option<&Edge> {
        let from_id = self.key_index.get(from)?;
        let to_id = self.key_index.get(to)?;
        self.edge_index
            .get(&(*from_id, *to_id))
            .map(|id| &self.edges[id.slot()])
    }

    /// Resolve a key to its node ID.
    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Get an edge by ID (returns None if ID out of bounds).
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot())
    }

    /// Key of the node with this ID, or `""` if out of bounds.
    pub fn key_of(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.key.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_index.contains_key(key)
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn out_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.out_edges
            .get(id.slot())
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|eid| &self.edges[eid.slot()])
    }

    /// Neighbors reachable over one outgoing edge, as `(neighbor_key, edge)`.
    ///
    /// Yields nothing for an unknown key.
    pub fn neighbors(&self, key: &str) -> Vec<(&str, &Edge)> {
        match self.node_id(key) {
            Some(id) => self
                .out_edges(id)
                .map(|e| (self.nodes[e.to.slot()].key.as_str(), e))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All pin nodes with their ratings, in insertion order.
    pub fn pins(&self) -> impl Iterator<Item = (&Node, &PinAttrs)> {
        self.nodes
            .iter()
            .filter_map(|n| n.kind.as_pin().map(|p| (n, p)))
    }

    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            ..GraphSummary::default()
        };
        for node in &self.nodes {
            match node.kind {
                NodeKind::Ecu { .. } => summary.ecus += 1,
                NodeKind::Pin(_) => summary.pins += 1,
                NodeKind::Generic => summary.generic += 1,
            }
        }
        for edge in &self.edges {
            match edge.kind {
                EdgeKind::Internal => summary.internal_edges += 1,
                EdgeKind::Wire(_) => summary.wire_edges += 1,
            }
        }
        summary
    }
}
