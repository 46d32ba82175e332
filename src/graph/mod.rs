//! The node/edge graph handed to the execution backend.
//!
//! A [`Graph`] is a mapping of node ids to [`Node`]s plus an ordered list of
//! [`Edge`]s. Its JSON form is the wire contract with the backend:
//!
//! ```json
//! {
//!   "nodes": { "noise": { "id": "noise", "type": "noise", "width": 512, "height": 512 } },
//!   "edges": [
//!     { "source": { "node_id": "seed", "field": "a" },
//!       "destination": { "node_id": "noise", "field": "seed" } }
//!   ]
//! }
//! ```

pub mod edge;
pub mod ids;
pub mod node;

pub use edge::*;
pub use node::*;

use crate::error::GraphError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: AHashMap<String, Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node, rejecting ids that are already taken.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Appends an edge. Endpoints are checked by [`Graph::validate`], not here.
    pub fn connect(&mut self, source: FieldRef, destination: FieldRef) {
        self.edges.push(Edge::new(source, destination));
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes carrying the given `type` tag.
    pub fn nodes_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes.values().filter(move |n| n.type_name() == type_name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges whose destination is `node_id`, in insertion order.
    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges
            .iter()
            .filter(move |e| e.destination.node_id == node_id)
    }

    /// Edges whose source is `node_id`, in insertion order.
    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.source.node_id == node_id)
    }

    /// Checks every edge against the node set and the field catalogs of the
    /// node kinds it touches, and that no input receives more edges than it accepts.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut fan_in: AHashMap<(&str, &str), usize> = AHashMap::new();

        for edge in &self.edges {
            let source = self.endpoint(&edge.source, &edge.destination)?;
            let destination = self.endpoint(&edge.destination, &edge.source)?;

            if !source.kind.has_output(&edge.source.field) {
                return Err(GraphError::UnknownField {
                    node_id: source.id.clone(),
                    node_type: source.type_name().to_string(),
                    field: edge.source.field.clone(),
                    direction: "output",
                });
            }

            let arity = destination
                .kind
                .input_arity(&edge.destination.field)
                .ok_or_else(|| GraphError::UnknownField {
                    node_id: destination.id.clone(),
                    node_type: destination.type_name().to_string(),
                    field: edge.destination.field.clone(),
                    direction: "input",
                })?;

            let count = fan_in
                .entry((
                    edge.destination.node_id.as_str(),
                    edge.destination.field.as_str(),
                ))
                .or_default();
            *count += 1;
            if *count > arity {
                return Err(GraphError::FieldAlreadyConnected {
                    node_id: destination.id.clone(),
                    field: edge.destination.field.clone(),
                    arity,
                    found: *count,
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::Serialization(e.to_string()))
    }

    fn endpoint(&self, at: &FieldRef, other: &FieldRef) -> Result<&Node, GraphError> {
        self.nodes
            .get(&at.node_id)
            .ok_or_else(|| GraphError::NodeNotFound {
                missing_node_id: at.node_id.clone(),
                other_node_id: other.node_id.clone(),
            })
    }
}
