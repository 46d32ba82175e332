use thiserror::Error;

/// Errors that can occur while parsing a seed-weight string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedWeightError {
    #[error("Malformed seed-weight pair '{pair}': expected 'seed:weight'")]
    MalformedPair { pair: String },

    #[error("Invalid seed '{seed}' in pair '{pair}': expected an unsigned 32-bit integer")]
    InvalidSeed { pair: String, seed: String },

    #[error("Invalid weight '{weight}' in pair '{pair}': expected a finite number")]
    InvalidWeight { pair: String, weight: String },
}

/// Errors raised while assembling or checking a `Graph`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("A node with id '{0}' already exists in the graph")]
    DuplicateNode(String),

    #[error("Node '{missing_node_id}' not found, which is referenced by an edge touching '{other_node_id}'")]
    NodeNotFound {
        missing_node_id: String,
        other_node_id: String,
    },

    #[error("Node '{node_id}' of type '{node_type}' has no {direction} field named '{field}'")]
    UnknownField {
        node_id: String,
        node_type: String,
        field: String,
        direction: &'static str,
    },

    #[error("Input field '{field}' on node '{node_id}' accepts {arity} connection(s) but has {found}")]
    FieldAlreadyConnected {
        node_id: String,
        field: String,
        arity: usize,
        found: usize,
    },

    #[error("Failed to serialize graph: {0}")]
    Serialization(String),
}

/// Errors that can occur while turning a `GenerationConfig` into a `Graph`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Failed to parse seed weights: {0}")]
    SeedWeights(#[from] SeedWeightError),

    #[error("Graph assembly failed: {0}")]
    Graph(#[from] GraphError),
}

/// Errors that can occur when loading a `GenerationConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse generation config JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}
