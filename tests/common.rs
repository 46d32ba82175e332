//! Common test utilities for building generation configs and inspecting graphs.
use invocation_graph::prelude::*;

/// The reference config: one image, fixed seed 42, no variations.
#[allow(dead_code)]
pub fn create_single_fixed_config() -> GenerationConfig {
    GenerationConfig {
        positive_prompt: "a cat".to_string(),
        negative_prompt: String::new(),
        model: "sd-1.5".to_string(),
        cfg_scale: 7.5,
        scheduler: "ddim".to_string(),
        steps: 20,
        width: 512,
        height: 512,
        iterations: 1,
        seed: 42,
        should_randomize_seed: false,
        should_generate_variations: false,
        ..Default::default()
    }
}

/// Same as the reference config, with the given iteration count and seed policy.
#[allow(dead_code)]
pub fn create_config(iterations: i64, randomize: bool) -> GenerationConfig {
    GenerationConfig {
        iterations,
        should_randomize_seed: randomize,
        ..create_single_fixed_config()
    }
}

/// Reference config with variation blending enabled.
#[allow(dead_code)]
pub fn create_variation_config(seed_weights: &str) -> GenerationConfig {
    GenerationConfig {
        should_generate_variations: true,
        seed_weights: seed_weights.to_string(),
        ..create_single_fixed_config()
    }
}

/// Builds without auxiliary conditioning so only the core topology is present.
#[allow(dead_code)]
pub fn build_core(config: &GenerationConfig) -> Graph {
    GraphBuilder::new(config)
        .with_splicer(Box::new(NoSplice))
        .build()
        .expect("Failed to build graph")
}

#[allow(dead_code)]
pub fn count_type(graph: &Graph, type_name: &str) -> usize {
    graph.nodes_of_type(type_name).count()
}

/// Every source feeding `node_id.field`, in edge order.
#[allow(dead_code)]
pub fn sources_of(graph: &Graph, node_id: &str, field: &str) -> Vec<FieldRef> {
    graph
        .incoming(node_id)
        .filter(|e| e.destination.field == field)
        .map(|e| e.source.clone())
        .collect()
}

#[allow(dead_code)]
pub fn has_edge(graph: &Graph, from: (&str, &str), to: (&str, &str)) -> bool {
    graph.edges().iter().any(|e| {
        e.source == FieldRef::new(from.0, from.1) && e.destination == FieldRef::new(to.0, to.1)
    })
}

/// The reference config as a web front-end would send it.
#[allow(dead_code)]
pub const EXAMPLE_CONFIG_JSON: &str = r#"{
    "positivePrompt": "a cat",
    "negativePrompt": "",
    "model": "sd-1.5",
    "cfgScale": 7.5,
    "scheduler": "ddim",
    "steps": 20,
    "width": 512,
    "height": 512,
    "iterations": 1,
    "seed": 42,
    "shouldRandomizeSeed": false,
    "shouldGenerateVariations": false,
    "seedWeights": "",
    "variationAmount": 0.1
}"#;
