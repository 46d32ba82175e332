use crate::config::{ControlNetConfig, GenerationConfig};
use crate::error::GraphError;
use crate::graph::ids::{self, field, NodeIdCursor};
use crate::graph::{FieldRef, Graph, Node, NodeKind};
use tracing::trace;

/// Defines the contract for adding auxiliary conditioning nodes to a built graph.
///
/// `anchor` is the id of the denoising node the extra conditioning must feed.
pub trait ConditioningSplicer: Send + Sync {
    fn name(&self) -> &str;
    fn splice(
        &self,
        graph: &mut Graph,
        anchor: &str,
        config: &GenerationConfig,
    ) -> Result<(), GraphError>;
}

/// Leaves the graph untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSplice;

impl ConditioningSplicer for NoSplice {
    fn name(&self) -> &str {
        "none"
    }

    fn splice(&self, _: &mut Graph, _: &str, _: &GenerationConfig) -> Result<(), GraphError> {
        Ok(())
    }
}

/// Adds one `controlnet` node per enabled guidance network in the config.
///
/// A single network feeds the anchor's `control` input directly; several are
/// gathered through a `collect` node first.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlNetSplicer;

impl ConditioningSplicer for ControlNetSplicer {
    fn name(&self) -> &str {
        "controlnet"
    }

    fn splice(
        &self,
        graph: &mut Graph,
        anchor: &str,
        config: &GenerationConfig,
    ) -> Result<(), GraphError> {
        let enabled: Vec<(&ControlNetConfig, &str)> = config
            .control_nets
            .iter()
            .filter(|c| c.is_enabled)
            .filter_map(|c| c.image.as_deref().map(|image| (c, image)))
            .collect();

        if enabled.is_empty() {
            return Ok(());
        }

        let collect_id = if enabled.len() > 1 {
            graph.add_node(Node::new(ids::CONTROL_NET_COLLECT, NodeKind::Collect {}))?;
            graph.connect(
                FieldRef::new(ids::CONTROL_NET_COLLECT, field::COLLECTION),
                FieldRef::new(anchor, field::CONTROL),
            );
            Some(ids::CONTROL_NET_COLLECT)
        } else {
            None
        };

        let mut cursor = NodeIdCursor::new();
        for (control_net, image) in enabled {
            let id = NodeIdCursor::id(ids::CONTROL_NET, cursor.advance());
            graph.add_node(Node::new(
                id.clone(),
                NodeKind::ControlNet {
                    image: image.to_string(),
                    control_model: control_net.model.clone(),
                    control_weight: control_net.weight,
                    begin_step_percent: control_net.begin_step_percent,
                    end_step_percent: control_net.end_step_percent,
                },
            ))?;

            let destination = match collect_id {
                Some(collect) => FieldRef::new(collect, field::ITEM),
                None => FieldRef::new(anchor, field::CONTROL),
            };
            trace!(node = %id, destination = %destination, "spliced control net");
            graph.connect(FieldRef::new(id, field::CONTROL), destination);
        }
        Ok(())
    }
}
