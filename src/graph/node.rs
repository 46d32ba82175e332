use super::ids::field;
use serde::{Deserialize, Serialize};

/// Arity marker for inputs that accept any number of incoming edges.
pub const UNBOUNDED: usize = usize::MAX;

/// A single invocation node: a unique id plus its type-specific payload.
///
/// Serialized flat, e.g. `{"id": "noise", "type": "noise", "width": 512, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

/// The node kinds understood by the execution backend, keyed by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// Encodes a prompt into conditioning.
    #[serde(rename = "compel")]
    Conditioning { prompt: String, model: String },

    /// Runs the denoising loop.
    #[serde(rename = "t2l")]
    TextToLatents {
        model: String,
        cfg_scale: f32,
        scheduler: String,
        steps: u32,
    },

    /// Decodes latents into an image.
    #[serde(rename = "l2i")]
    LatentsToImage { model: String },

    /// Generates initial noise. A literal `seed` is only set for variation noise;
    /// otherwise the seed arrives over an edge.
    #[serde(rename = "noise")]
    Noise {
        width: u32,
        height: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
    },

    #[serde(rename = "rand_int")]
    RandomInt { low: i64, high: i64 },

    #[serde(rename = "int")]
    FixedInt { a: i64 },

    #[serde(rename = "range_of_size")]
    RangeOfSize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<i64>,
        size: i64,
        step: i64,
    },

    #[serde(rename = "iterate")]
    Iterate {},

    /// Mixes `latents_a` and `latents_b`; `alpha` is the share of `latents_b`.
    #[serde(rename = "lblend")]
    BlendLatents { alpha: f32 },

    #[serde(rename = "controlnet")]
    ControlNet {
        image: String,
        control_model: String,
        control_weight: f32,
        begin_step_percent: f32,
        end_step_percent: f32,
    },

    #[serde(rename = "collect")]
    Collect {},
}

impl NodeKind {
    /// The `type` tag written to the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Conditioning { .. } => "compel",
            NodeKind::TextToLatents { .. } => "t2l",
            NodeKind::LatentsToImage { .. } => "l2i",
            NodeKind::Noise { .. } => "noise",
            NodeKind::RandomInt { .. } => "rand_int",
            NodeKind::FixedInt { .. } => "int",
            NodeKind::RangeOfSize { .. } => "range_of_size",
            NodeKind::Iterate {} => "iterate",
            NodeKind::BlendLatents { .. } => "lblend",
            NodeKind::ControlNet { .. } => "controlnet",
            NodeKind::Collect {} => "collect",
        }
    }

    /// Names of the fields that may be the destination of an edge.
    pub fn inputs(&self) -> &'static [&'static str] {
        match self {
            NodeKind::TextToLatents { .. } => &[
                field::POSITIVE_CONDITIONING,
                field::NEGATIVE_CONDITIONING,
                field::NOISE,
                field::CONTROL,
            ],
            NodeKind::LatentsToImage { .. } => &[field::LATENTS],
            NodeKind::Noise { .. } => &[field::SEED],
            NodeKind::RangeOfSize { .. } => &[field::START],
            NodeKind::Iterate {} => &[field::COLLECTION],
            NodeKind::BlendLatents { .. } => &[field::LATENTS_A, field::LATENTS_B],
            NodeKind::Collect {} => &[field::ITEM],
            NodeKind::Conditioning { .. }
            | NodeKind::RandomInt { .. }
            | NodeKind::FixedInt { .. }
            | NodeKind::ControlNet { .. } => &[],
        }
    }

    /// Names of the fields that may be the source of an edge.
    pub fn outputs(&self) -> &'static [&'static str] {
        match self {
            NodeKind::Conditioning { .. } => &[field::CONDITIONING],
            NodeKind::TextToLatents { .. } | NodeKind::BlendLatents { .. } => &[field::LATENTS],
            NodeKind::LatentsToImage { .. } => &[field::IMAGE],
            NodeKind::Noise { .. } => &[field::NOISE],
            NodeKind::RandomInt { .. } | NodeKind::FixedInt { .. } => &[field::A],
            NodeKind::RangeOfSize { .. } | NodeKind::Collect {} => &[field::COLLECTION],
            NodeKind::Iterate {} => &[field::ITEM],
            NodeKind::ControlNet { .. } => &[field::CONTROL],
        }
    }

    /// How many edges an input field accepts, or `None` if it is not an input.
    pub fn input_arity(&self, name: &str) -> Option<usize> {
        if !self.inputs().iter().any(|f| *f == name) {
            return None;
        }
        match self {
            NodeKind::Collect {} => Some(UNBOUNDED),
            _ => Some(1),
        }
    }

    pub fn has_output(&self, name: &str) -> bool {
        self.outputs().iter().any(|f| *f == name)
    }
}

