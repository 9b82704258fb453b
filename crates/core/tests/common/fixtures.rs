//! Test fixtures for building pipeline documents and accessors.

use anyhow::Context;
use serde_json::json;
use sk_core::PipelineConfigAccessor;
use sk_protocol::pipeline_models::{ApiConfig, PipelineConfig, PipelineSettings, StageConfig};

/// Create a test StageConfig.
pub fn create_test_stage(id: &str, model: &str, prompt: &str) -> StageConfig {
    StageConfig {
        id: id.to_string(),
        name: format!("Test stage {}", id),
        description: format!("Runs {} with {}", id, model),
        model: model.to_string(),
        prompt: prompt.to_string(),
    }
}

/// Create a test PipelineConfig around the given stages.
pub fn create_test_config(stages: Vec<StageConfig>) -> PipelineConfig {
    PipelineConfig {
        name: "test-pipeline".to_string(),
        description: "Pipeline used in tests".to_string(),
        version: "0.0.1".to_string(),
        stages,
        settings: PipelineSettings { temperature: 0.3 },
        api: ApiConfig {
            base_url: "http://localhost:11434/v1".to_string(),
            api_key: "test-key".to_string(),
        },
    }
}

/// Build an accessor from the two-stage JSON document:
/// `[{id:"s1",model:"gpt-x",prompt:"A"}, {id:"s2",model:"gpt-y",prompt:"B"}]`.
pub fn two_stage_accessor() -> anyhow::Result<PipelineConfigAccessor> {
    let document = json!({
        "name": "two-stage",
        "description": "Two stages",
        "version": "1.0.0",
        "stages": [
            { "id": "s1", "name": "First", "description": "", "model": "gpt-x", "prompt": "A" },
            { "id": "s2", "name": "Second", "description": "", "model": "gpt-y", "prompt": "B" }
        ],
        "settings": { "temperature": 0.9 },
        "api": { "baseUrl": "https://models.example.com", "apiKey": "abc" }
    });

    PipelineConfigAccessor::from_json("two-stage.json", &document.to_string())
        .context("two-stage fixture should parse")
}
