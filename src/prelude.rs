//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! invocation-graph crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use invocation_graph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = GenerationConfig::from_file("path/to/config.json")?;
//! let graph = GraphBuilder::new(&config).with_splicer(Box::new(NoSplice)).build()?;
//! println!("{} nodes, {} edges", graph.node_count(), graph.edges().len());
//! # Ok(())
//! # }
//! ```

// Building
pub use crate::builder::{GraphBuilder, build_graph};
pub use crate::config::{ControlNetConfig, GenerationConfig};
pub use crate::splice::{ConditioningSplicer, ControlNetSplicer, NoSplice};

// Graph types
pub use crate::graph::ids;
pub use crate::graph::{Edge, FieldRef, Graph, Node, NodeKind};

// Seed weights
pub use crate::seed_weights::{SeedWeightPair, parse_seed_weights, seed_weights_to_string};

// Error types
pub use crate::error::{BuildError, ConfigError, GraphError, SeedWeightError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
