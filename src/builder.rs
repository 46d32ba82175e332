use crate::config::GenerationConfig;
use crate::error::BuildError;
use crate::graph::ids::{self, field, NodeIdCursor};
use crate::graph::{FieldRef, Graph, Node, NodeKind};
use crate::seed_weights::{parse_seed_weights, SeedWeightPair};
use crate::splice::{ConditioningSplicer, ControlNetSplicer};
use tracing::{debug, trace};

/// Upper bound handed to `rand_int` nodes (the backend's positive `i32` range).
pub const RANDOM_SEED_HIGH: i64 = i32::MAX as i64;

/// Builds a text-to-image graph with the default ControlNet splicer.
pub fn build_graph(config: &GenerationConfig) -> Result<Graph, BuildError> {
    GraphBuilder::new(config).build()
}

/// Assembles the text-to-image invocation graph for one `GenerationConfig`.
pub struct GraphBuilder<'a> {
    config: &'a GenerationConfig,
    splicer: Box<dyn ConditioningSplicer>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            splicer: Box::new(ControlNetSplicer),
        }
    }

    /// Replaces the collaborator that adds auxiliary conditioning after the core graph is built.
    pub fn with_splicer(mut self, splicer: Box<dyn ConditioningSplicer>) -> Self {
        self.splicer = splicer;
        self
    }

    pub fn build(self) -> Result<Graph, BuildError> {
        let config = self.config;
        let mut graph = Graph::new();
        let mut cursor = NodeIdCursor::new();

        add_core_nodes(&mut graph, config)?;
        add_seed_nodes(&mut graph, config)?;

        let mut noise_source = FieldRef::new(ids::NOISE, field::NOISE);
        if config.should_generate_variations {
            let pairs = parse_seed_weights(&config.seed_weights)?;
            noise_source =
                add_variation_blends(&mut graph, config, &mut cursor, noise_source, &pairs)?;
        }
        graph.connect(noise_source, FieldRef::new(ids::TEXT_TO_LATENTS, field::NOISE));

        self.splicer.splice(&mut graph, ids::TEXT_TO_LATENTS, config)?;

        debug!(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            iterations = config.iterations,
            randomize_seed = config.should_randomize_seed,
            splicer = self.splicer.name(),
            "built text-to-image graph"
        );
        Ok(graph)
    }
}

/// Conditioning, denoising and decoding nodes plus the three edges between them.
fn add_core_nodes(graph: &mut Graph, config: &GenerationConfig) -> Result<(), BuildError> {
    graph.add_node(Node::new(
        ids::POSITIVE_CONDITIONING,
        NodeKind::Conditioning {
            prompt: config.positive_prompt.clone(),
            model: config.model.clone(),
        },
    ))?;
    graph.add_node(Node::new(
        ids::NEGATIVE_CONDITIONING,
        NodeKind::Conditioning {
            prompt: config.negative_prompt.clone(),
            model: config.model.clone(),
        },
    ))?;
    graph.add_node(Node::new(
        ids::TEXT_TO_LATENTS,
        NodeKind::TextToLatents {
            model: config.model.clone(),
            cfg_scale: config.cfg_scale,
            scheduler: config.scheduler.clone(),
            steps: config.steps,
        },
    ))?;
    graph.add_node(Node::new(
        ids::LATENTS_TO_IMAGE,
        NodeKind::LatentsToImage {
            model: config.model.clone(),
        },
    ))?;

    graph.connect(
        FieldRef::new(ids::POSITIVE_CONDITIONING, field::CONDITIONING),
        FieldRef::new(ids::TEXT_TO_LATENTS, field::POSITIVE_CONDITIONING),
    );
    graph.connect(
        FieldRef::new(ids::NEGATIVE_CONDITIONING, field::CONDITIONING),
        FieldRef::new(ids::TEXT_TO_LATENTS, field::NEGATIVE_CONDITIONING),
    );
    graph.connect(
        FieldRef::new(ids::TEXT_TO_LATENTS, field::LATENTS),
        FieldRef::new(ids::LATENTS_TO_IMAGE, field::LATENTS),
    );
    Ok(())
}

/// The seed source and the main noise node.
///
/// A single iteration wires the seed straight into the noise node. A batch
/// expands the start seed into a range and lets the backend iterate over it,
/// so per-image seed incrementing happens server-side.
fn add_seed_nodes(graph: &mut Graph, config: &GenerationConfig) -> Result<(), BuildError> {
    let seed_id = if config.should_randomize_seed {
        graph.add_node(Node::new(
            ids::RANDOM_INT,
            NodeKind::RandomInt {
                low: 0,
                high: RANDOM_SEED_HIGH,
            },
        ))?;
        ids::RANDOM_INT
    } else {
        graph.add_node(Node::new(
            ids::SEED,
            NodeKind::FixedInt {
                a: i64::from(config.seed),
            },
        ))?;
        ids::SEED
    };

    graph.add_node(Node::new(
        ids::NOISE,
        NodeKind::Noise {
            width: config.width,
            height: config.height,
            seed: None,
        },
    ))?;

    if !config.is_batch() {
        graph.connect(
            FieldRef::new(seed_id, field::A),
            FieldRef::new(ids::NOISE, field::SEED),
        );
        return Ok(());
    }

    graph.add_node(Node::new(
        ids::RANGE_OF_SIZE,
        NodeKind::RangeOfSize {
            start: None,
            size: config.iterations,
            step: 1,
        },
    ))?;
    graph.add_node(Node::new(ids::ITERATE, NodeKind::Iterate {}))?;

    graph.connect(
        FieldRef::new(seed_id, field::A),
        FieldRef::new(ids::RANGE_OF_SIZE, field::START),
    );
    graph.connect(
        FieldRef::new(ids::RANGE_OF_SIZE, field::COLLECTION),
        FieldRef::new(ids::ITERATE, field::COLLECTION),
    );
    graph.connect(
        FieldRef::new(ids::ITERATE, field::ITEM),
        FieldRef::new(ids::NOISE, field::SEED),
    );
    Ok(())
}

/// Chains one noise + blend pair per seed-weight entry and returns the last blend output.
fn add_variation_blends(
    graph: &mut Graph,
    config: &GenerationConfig,
    cursor: &mut NodeIdCursor,
    mut source: FieldRef,
    pairs: &[SeedWeightPair],
) -> Result<FieldRef, BuildError> {
    for pair in pairs {
        let index = cursor.advance();
        let noise_id = NodeIdCursor::id(ids::NOISE, index);
        let blend_id = NodeIdCursor::id(ids::BLEND, index);

        graph.add_node(Node::new(
            noise_id.clone(),
            NodeKind::Noise {
                width: config.width,
                height: config.height,
                seed: Some(pair.seed),
            },
        ))?;
        graph.add_node(Node::new(
            blend_id.clone(),
            NodeKind::BlendLatents { alpha: pair.weight },
        ))?;

        trace!(
            blend = %blend_id,
            from = %source,
            seed = pair.seed,
            weight = pair.weight,
            "variation stage"
        );
        graph.connect(source, FieldRef::new(blend_id.clone(), field::LATENTS_A));
        graph.connect(
            FieldRef::new(noise_id, field::NOISE),
            FieldRef::new(blend_id.clone(), field::LATENTS_B),
        );
        source = FieldRef::new(blend_id, field::LATENTS);
    }
    Ok(source)
}
