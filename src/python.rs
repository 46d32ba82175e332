use crate::builder::build_graph as build;
use crate::config::GenerationConfig;
use crate::seed_weights::{parse_seed_weights, seed_weights_to_string};
use pyo3::prelude::*;

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Builds a text-to-image invocation graph.
///
/// Args:
///     config_json (str): A JSON object with the generation parameters
///         (`positivePrompt`, `model`, `iterations`, `seed`,
///         `shouldRandomizeSeed`, `seedWeights`, ...). Missing fields fall
///         back to their defaults.
///     pretty (bool): Indent the returned JSON.
///
/// Returns:
///     str: The graph as JSON, with a `nodes` mapping and an `edges` list,
///         ready to be submitted to the backend.
///
/// Raises:
///     ValueError: If the config JSON is malformed or the seed-weight
///         string cannot be parsed.
#[pyfunction]
#[pyo3(signature = (config_json, pretty = false))]
fn build_graph(config_json: &str, pretty: bool) -> PyResult<String> {
    let config = GenerationConfig::from_json(config_json).map_err(value_error)?;
    let graph = build(&config).map_err(value_error)?;
    let json = if pretty {
        graph.to_json_pretty()
    } else {
        graph.to_json()
    };
    json.map_err(value_error)
}

/// Normalizes a seed-weight string, e.g. `" 1:0.5 , 2:0.25"` -> `"1:0.5,2:0.25"`.
///
/// Raises:
///     ValueError: If any pair is malformed.
#[pyfunction]
fn normalize_seed_weights(seed_weights: &str) -> PyResult<String> {
    let pairs = parse_seed_weights(seed_weights).map_err(value_error)?;
    Ok(seed_weights_to_string(&pairs))
}

/// Text-to-image invocation graph builder.
///
/// This module provides Python bindings to the invocation-graph Rust library,
/// turning generation parameters into the node/edge graph an image-generation
/// backend executes.
#[pymodule]
fn invocation_graph(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_graph, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_seed_weights, m)?)?;
    Ok(())
}
