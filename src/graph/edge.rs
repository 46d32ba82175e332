use serde::{Deserialize, Serialize};
use std::fmt;

/// One endpoint of an edge: a named field on a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub node_id: String,
    pub field: String,
}

impl FieldRef {
    pub fn new(node_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node_id, self.field)
    }
}

/// A directed connection from a node's output field to another node's input field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: FieldRef,
    pub destination: FieldRef,
}

impl Edge {
    pub fn new(source: FieldRef, destination: FieldRef) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
