//! Well-known node ids and field names used by the text-to-image graph.

pub const POSITIVE_CONDITIONING: &str = "positive_conditioning";
pub const NEGATIVE_CONDITIONING: &str = "negative_conditioning";
pub const TEXT_TO_LATENTS: &str = "text_to_latents";
pub const LATENTS_TO_IMAGE: &str = "latents_to_image";
pub const NOISE: &str = "noise";
pub const SEED: &str = "seed";
pub const RANDOM_INT: &str = "rand_int";
pub const RANGE_OF_SIZE: &str = "range_of_size";
pub const ITERATE: &str = "iterate";
pub const BLEND: &str = "lblend";
pub const CONTROL_NET: &str = "control_net";
pub const CONTROL_NET_COLLECT: &str = "control_net_collect";

/// Field names on node inputs and outputs.
pub mod field {
    pub const A: &str = "a";
    pub const CONDITIONING: &str = "conditioning";
    pub const POSITIVE_CONDITIONING: &str = "positive_conditioning";
    pub const NEGATIVE_CONDITIONING: &str = "negative_conditioning";
    pub const NOISE: &str = "noise";
    pub const SEED: &str = "seed";
    pub const LATENTS: &str = "latents";
    pub const LATENTS_A: &str = "latents_a";
    pub const LATENTS_B: &str = "latents_b";
    pub const IMAGE: &str = "image";
    pub const START: &str = "start";
    pub const COLLECTION: &str = "collection";
    pub const ITEM: &str = "item";
    pub const CONTROL: &str = "control";
}

/// Hands out suffixes for auxiliary node ids within a single build.
///
/// Each build owns its own cursor, so two builds never share a counter.
#[derive(Debug, Default)]
pub struct NodeIdCursor {
    last: usize,
}

impl NodeIdCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the cursor and returns the new index (starting at 1).
    pub fn advance(&mut self) -> usize {
        self.last += 1;
        self.last
    }

    /// Formats `<prefix>_<index>`.
    pub fn id(prefix: &str, index: usize) -> String {
        format!("{}_{}", prefix, index)
    }
}
