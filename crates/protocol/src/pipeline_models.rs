//! Pipeline configuration models for the bundled `pipeline.config.json`.
//!
//! This module defines the structure of the JSON document that describes a
//! multi-stage text-generation pipeline: the ordered stages with their prompts
//! and model identifiers, generation settings, and the model-serving endpoint.
//!
//! Field names follow the camelCase convention of the JSON document. Every
//! field falls back to its empty value when missing, so a partial document
//! still loads and reads as "absent" rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One step of the pipeline.
///
/// # Example
///
/// ```json
/// {
///   "id": "outline",
///   "name": "Outline",
///   "description": "Draft a chapter outline",
///   "model": "gpt-4o-mini",
///   "prompt": "Write an outline for: {{input}}"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct StageConfig {
    /// Identifier of the stage, expected (but not required) to be unique.
    pub id: String,

    /// Human-readable stage name.
    pub name: String,

    /// What this stage does.
    pub description: String,

    /// Model identifier used to run this stage (e.g. "gpt-4o-mini").
    pub model: String,

    /// Prompt template sent to the model.
    pub prompt: String,
}

/// Generation parameters applied uniformly across all stages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct PipelineSettings {
    /// Sampling temperature.
    pub temperature: f64,
}

/// Connection details for the external model-serving endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ApiConfig {
    /// Base URL of the endpoint (`baseUrl` in JSON).
    pub base_url: String,

    /// API key sent to the endpoint (`apiKey` in JSON).
    pub api_key: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &api_key)
            .finish()
    }
}

/// The whole pipeline document.
///
/// # Example
///
/// ```json
/// {
///   "name": "novel-writer",
///   "description": "Three-pass drafting pipeline",
///   "version": "1.0.0",
///   "stages": [
///     { "id": "outline", "name": "Outline", "description": "", "model": "gpt-4o-mini", "prompt": "..." }
///   ],
///   "settings": { "temperature": 0.7 },
///   "api": { "baseUrl": "https://api.example.com/v1", "apiKey": "sk-..." }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct PipelineConfig {
    /// Name of the pipeline.
    pub name: String,

    /// Human-readable description of the pipeline.
    pub description: String,

    /// Version string of the document.
    pub version: String,

    /// Stages in execution order. Order is preserved from the document.
    pub stages: Vec<StageConfig>,

    /// Generation settings shared by every stage.
    pub settings: PipelineSettings,

    /// Endpoint the stages are sent to.
    pub api: ApiConfig,
}
