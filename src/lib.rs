pub mod config;
pub mod core;
pub mod framework;
pub mod generation;
pub mod llm;
pub mod pipeline;
pub mod syntax;
pub mod validate;

pub use crate::core::{ForgeError, Result};
pub use framework::Framework;
pub use pipeline::{GeneratedArtifact, GenerationRequest, Pipeline};
