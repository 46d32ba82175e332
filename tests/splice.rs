//! Tests for auxiliary conditioning (ControlNet) splicing.
mod common;
use common::*;
use invocation_graph::graph::ids::field;
use invocation_graph::prelude::*;

fn control_net(image: Option<&str>, enabled: bool) -> ControlNetConfig {
    ControlNetConfig {
        image: image.map(str::to_string),
        model: "canny".to_string(),
        weight: 0.75,
        begin_step_percent: 0.0,
        end_step_percent: 0.5,
        is_enabled: enabled,
    }
}

#[test]
fn test_single_control_net_feeds_anchor_directly() {
    let mut config = create_single_fixed_config();
    config.control_nets = vec![control_net(Some("edges.png"), true)];

    let graph = build_graph(&config).expect("Failed to build");

    assert_eq!(count_type(&graph, "controlnet"), 1);
    assert_eq!(count_type(&graph, "collect"), 0);
    assert_eq!(
        sources_of(&graph, ids::TEXT_TO_LATENTS, field::CONTROL),
        vec![FieldRef::new("control_net_1", field::CONTROL)]
    );

    match &graph.node("control_net_1").unwrap().kind {
        NodeKind::ControlNet {
            image,
            control_model,
            control_weight,
            end_step_percent,
            ..
        } => {
            assert_eq!(image, "edges.png");
            assert_eq!(control_model, "canny");
            assert_eq!(*control_weight, 0.75);
            assert_eq!(*end_step_percent, 0.5);
        }
        other => panic!("Expected ControlNet, got {:?}", other),
    }
    assert!(graph.validate().is_ok());
}

#[test]
fn test_multiple_control_nets_are_collected() {
    let mut config = create_config(2, true);
    config.control_nets = vec![
        control_net(Some("edges.png"), true),
        control_net(Some("depth.png"), true),
    ];

    let graph = build_graph(&config).expect("Failed to build");

    assert_eq!(count_type(&graph, "controlnet"), 2);
    assert_eq!(count_type(&graph, "collect"), 1);
    assert_eq!(
        sources_of(&graph, ids::TEXT_TO_LATENTS, field::CONTROL),
        vec![FieldRef::new(ids::CONTROL_NET_COLLECT, field::COLLECTION)]
    );
    assert_eq!(
        sources_of(&graph, ids::CONTROL_NET_COLLECT, field::ITEM),
        vec![
            FieldRef::new("control_net_1", field::CONTROL),
            FieldRef::new("control_net_2", field::CONTROL),
        ]
    );
    assert!(graph.validate().is_ok());
}

#[test]
fn test_disabled_and_imageless_control_nets_are_skipped() {
    let mut config = create_single_fixed_config();
    config.control_nets = vec![
        control_net(Some("edges.png"), false),
        control_net(None, true),
    ];

    let graph = build_graph(&config).expect("Failed to build");
    assert_eq!(graph, build_core(&config));
}

#[test]
fn test_no_splice_ignores_control_nets() {
    let mut config = create_single_fixed_config();
    config.control_nets = vec![control_net(Some("edges.png"), true)];

    let graph = build_core(&config);
    assert_eq!(count_type(&graph, "controlnet"), 0);
    assert!(sources_of(&graph, ids::TEXT_TO_LATENTS, field::CONTROL).is_empty());
}

#[test]
fn test_splicing_twice_reports_duplicate_node() {
    let mut config = create_single_fixed_config();
    config.control_nets = vec![control_net(Some("edges.png"), true)];

    let mut graph = build_graph(&config).expect("Failed to build");
    let result = ControlNetSplicer.splice(&mut graph, ids::TEXT_TO_LATENTS, &config);

    assert_eq!(
        result,
        Err(GraphError::DuplicateNode("control_net_1".to_string()))
    );
}
