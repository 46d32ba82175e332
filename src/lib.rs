//! # invocation-graph - Text-to-Image Graph Builder
//!
//! **invocation-graph** turns user-facing generation parameters (prompts, seed,
//! iteration count, variation weights, model choice) into the node/edge graph
//! an image-generation backend executes. Graph assembly is pure and
//! synchronous: one `GenerationConfig` in, one freshly built `Graph` out.
//!
//! ## Core Workflow
//!
//! 1.  **Load a config**: deserialize a `GenerationConfig` from JSON (camelCase or snake_case).
//! 2.  **Build**: call `build_graph`, or use `GraphBuilder` to swap the auxiliary-conditioning splicer.
//! 3.  **Submit**: serialize the `Graph` with `to_json` and hand it to the backend.
//!
//! The graph always holds positive/negative conditioning, a text-to-latents node
//! and a latents-to-image node. The seed source depends on the iteration count
//! and the randomize flag; a batch is expressed as a `range_of_size` feeding an
//! `iterate` node so the backend increments seeds itself. Variation seeds are
//! blended into the noise one `lblend` stage at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use invocation_graph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = GenerationConfig::from_json(
//!         r#"{
//!             "positivePrompt": "a cat",
//!             "model": "sd-1.5",
//!             "iterations": 1,
//!             "seed": 42,
//!             "shouldRandomizeSeed": false
//!         }"#,
//!     )?;
//!
//!     let graph = build_graph(&config)?;
//!     graph.validate()?;
//!
//!     println!("{}", graph.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod seed_weights;
pub mod splice;

#[cfg(feature = "python-bindings")]
mod python;
