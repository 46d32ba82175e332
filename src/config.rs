use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// User-facing generation parameters, as handed over by the UI/state layer.
///
/// Field names accept both the camelCase spelling used by web front-ends
/// (`cfgScale`, `shouldRandomizeSeed`, ...) and plain snake_case. Any field
/// missing from the input falls back to [`GenerationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    #[serde(alias = "positivePrompt")]
    pub positive_prompt: String,
    #[serde(alias = "negativePrompt")]
    pub negative_prompt: String,
    pub model: String,
    #[serde(alias = "cfgScale")]
    pub cfg_scale: f32,
    pub scheduler: String,
    pub steps: u32,
    pub width: u32,
    pub height: u32,
    pub iterations: i64,
    pub seed: u32,
    #[serde(alias = "shouldRandomizeSeed")]
    pub should_randomize_seed: bool,
    #[serde(alias = "shouldGenerateVariations")]
    pub should_generate_variations: bool,
    /// Seed-weight pairs in `seed:weight,seed:weight` form.
    #[serde(alias = "seedWeights")]
    pub seed_weights: String,
    /// Carried for the UI; the graph builder only consumes `seed_weights`.
    #[serde(alias = "variationAmount")]
    pub variation_amount: f32,
    #[serde(alias = "controlNets")]
    pub control_nets: Vec<ControlNetConfig>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            positive_prompt: String::new(),
            negative_prompt: String::new(),
            model: String::new(),
            cfg_scale: 7.5,
            scheduler: "euler".to_string(),
            steps: 50,
            width: 512,
            height: 512,
            iterations: 1,
            seed: 0,
            should_randomize_seed: true,
            should_generate_variations: false,
            seed_weights: String::new(),
            variation_amount: 0.1,
            control_nets: Vec::new(),
        }
    }
}

impl GenerationConfig {
    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// True when the graph should iterate over a range of seeds rather than use one.
    pub fn is_batch(&self) -> bool {
        self.iterations > 1
    }
}

/// One guidance-network entry consumed by the ControlNet splicer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlNetConfig {
    /// Name of the pre-processed control image, if one has been uploaded.
    #[serde(alias = "controlImage")]
    pub image: Option<String>,
    pub model: String,
    pub weight: f32,
    #[serde(alias = "beginStepPct")]
    pub begin_step_percent: f32,
    #[serde(alias = "endStepPct")]
    pub end_step_percent: f32,
    #[serde(alias = "isEnabled")]
    pub is_enabled: bool,
}

impl Default for ControlNetConfig {
    fn default() -> Self {
        Self {
            image: None,
            model: String::new(),
            weight: 1.0,
            begin_step_percent: 0.0,
            end_step_percent: 1.0,
            is_enabled: true,
        }
    }
}
