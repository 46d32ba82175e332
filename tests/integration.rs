//! Integration tests for invocation-graph
//!
//! End-to-end tests from config JSON to the graph JSON handed to the backend.
//!
mod common;
use common::*;
use invocation_graph::prelude::*;
use serde_json::{Value, json};
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn build_json(config: &GenerationConfig) -> Value {
        let graph = build_graph(config).expect("Failed to build graph");
        serde_json::from_str(&graph.to_json().expect("Failed to serialize")).unwrap()
    }

    #[test]
    fn test_camel_case_config_matches_reference() {
        let config = GenerationConfig::from_json(EXAMPLE_CONFIG_JSON).expect("Failed to parse");
        assert_eq!(config, create_single_fixed_config());
    }

    #[test]
    fn test_snake_case_config_and_defaults() {
        let config = GenerationConfig::from_json(
            r#"{"positive_prompt": "a dog", "should_randomize_seed": false, "seed": 7}"#,
        )
        .expect("Failed to parse");

        assert_eq!(config.positive_prompt, "a dog");
        assert_eq!(config.seed, 7);
        assert!(!config.should_randomize_seed);
        assert_eq!(config.scheduler, "euler");
        assert_eq!(config.steps, 50);
        assert_eq!((config.width, config.height), (512, 512));
        assert_eq!(config.iterations, 1);
        assert!(config.control_nets.is_empty());
    }

    #[test]
    fn test_invalid_config_json_is_reported() {
        let result = GenerationConfig::from_json(r#"{"seed": "forty-two"}"#);
        assert!(matches!(result, Err(ConfigError::JsonParse(_))));
    }

    #[test]
    fn test_config_from_file() {
        let path = std::env::temp_dir().join("invocation_graph_config_test.json");
        fs::write(&path, EXAMPLE_CONFIG_JSON).expect("Failed to write temp config");

        let config = GenerationConfig::from_file(path.to_str().unwrap()).expect("Failed to load");
        assert_eq!(config.seed, 42);

        let _ = fs::remove_file(&path);

        let missing = GenerationConfig::from_file("does/not/exist.json");
        match missing {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, "does/not/exist.json"),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_graph_json_wire_shape() {
        let value = build_json(&create_single_fixed_config());

        let nodes = value["nodes"].as_object().expect("nodes must be an object");
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes["seed"], json!({ "id": "seed", "type": "int", "a": 42 }));
        assert_eq!(
            nodes["noise"],
            json!({ "id": "noise", "type": "noise", "width": 512, "height": 512 })
        );
        assert_eq!(
            nodes["positive_conditioning"],
            json!({ "id": "positive_conditioning", "type": "compel", "prompt": "a cat", "model": "sd-1.5" })
        );
        assert_eq!(
            nodes["text_to_latents"],
            json!({
                "id": "text_to_latents",
                "type": "t2l",
                "model": "sd-1.5",
                "cfg_scale": 7.5,
                "scheduler": "ddim",
                "steps": 20
            })
        );

        let edges = value["edges"].as_array().expect("edges must be an array");
        assert_eq!(edges.len(), 5);
        assert_eq!(
            edges[0],
            json!({
                "source": { "node_id": "positive_conditioning", "field": "conditioning" },
                "destination": { "node_id": "text_to_latents", "field": "positive_conditioning" }
            })
        );
        assert!(edges.contains(&json!({
            "source": { "node_id": "seed", "field": "a" },
            "destination": { "node_id": "noise", "field": "seed" }
        })));
    }

    #[test]
    fn test_batch_and_variation_nodes_on_the_wire() {
        let mut config = create_variation_config("99:0.5");
        config.iterations = 8;
        config.should_randomize_seed = true;
        let value = build_json(&config);

        let nodes = &value["nodes"];
        assert_eq!(
            nodes["rand_int"],
            json!({ "id": "rand_int", "type": "rand_int", "low": 0, "high": 2147483647 })
        );
        assert_eq!(
            nodes["range_of_size"],
            json!({ "id": "range_of_size", "type": "range_of_size", "size": 8, "step": 1 })
        );
        assert_eq!(nodes["iterate"], json!({ "id": "iterate", "type": "iterate" }));
        assert_eq!(
            nodes["noise_1"],
            json!({ "id": "noise_1", "type": "noise", "width": 512, "height": 512, "seed": 99 })
        );
        assert_eq!(
            nodes["lblend_1"],
            json!({ "id": "lblend_1", "type": "lblend", "alpha": 0.5 })
        );
    }

    #[test]
    fn test_graph_json_reads_back() {
        let mut config = create_variation_config("1:0.5,2:0.25");
        config.iterations = 2;
        config.control_nets = vec![
            ControlNetConfig {
                image: Some("a.png".to_string()),
                ..Default::default()
            },
            ControlNetConfig {
                image: Some("b.png".to_string()),
                ..Default::default()
            },
        ];
        let graph = build_graph(&config).expect("Failed to build");

        let restored: Graph =
            serde_json::from_str(&graph.to_json_pretty().unwrap()).expect("Failed to read back");
        assert_eq!(restored, graph);
        assert!(restored.validate().is_ok());
    }
}
