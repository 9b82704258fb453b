//! Read-only lookups over a loaded pipeline document.
//!
//! [`PipelineConfigAccessor`] owns one immutable [`PipelineConfig`] and
//! answers every query from memory. Nothing here fails: a stage that does not
//! exist is `None`, and a field of a missing stage is the empty string.
//!
//! Stage indices are 1-based to stay compatible with callers that number
//! stages starting from one.

use crate::config::error::ConfigResult;
use crate::config::loader::parse_config;
use sk_protocol::pipeline_models::{ApiConfig, PipelineConfig, PipelineSettings, StageConfig};

/// Typed, read-only view of a pipeline document.
///
/// # Example
///
/// ```
/// use sk_core::config::accessor::PipelineConfigAccessor;
///
/// let accessor = PipelineConfigAccessor::from_json(
///     "inline",
///     r#"{ "stages": [
///         { "id": "s1", "model": "gpt-x", "prompt": "A" },
///         { "id": "s2", "model": "gpt-y", "prompt": "B" }
///     ] }"#,
/// )
/// .unwrap();
///
/// assert_eq!(accessor.get_stage_count(), 2);
/// assert_eq!(accessor.get_model_for_stage(2), "gpt-y");
/// assert_eq!(accessor.get_prompt_by_index(1), "A");
/// assert!(accessor.get_stage_by_id("s3").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigAccessor {
    config: PipelineConfig,
}

impl PipelineConfigAccessor {
    /// Wrap an already parsed document.
    pub fn from_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Parse `json` and wrap the result.
    ///
    /// # Errors
    ///
    /// Propagates the parse error from [`parse_config`].
    pub fn from_json(source_name: &str, json: &str) -> ConfigResult<Self> {
        parse_config(source_name, json).map(Self::from_config)
    }

    /// The full document.
    pub fn get_config(&self) -> &PipelineConfig {
        &self.config
    }

    /// All stages, in pipeline order.
    pub fn get_stages(&self) -> &[StageConfig] {
        &self.config.stages
    }

    /// The stage at 1-based position `index`.
    ///
    /// Returns `None` when `index` is zero, negative, or past the last stage.
    pub fn get_stage_by_index(&self, index: i64) -> Option<&StageConfig> {
        if index < 1 {
            return None;
        }
        let position = usize::try_from(index - 1).ok()?;
        self.config.stages.get(position)
    }

    /// The first stage whose id equals `id`.
    ///
    /// Ids are not checked for uniqueness, so duplicates resolve to the
    /// earliest stage in the document.
    pub fn get_stage_by_id(&self, id: &str) -> Option<&StageConfig> {
        self.config.stages.iter().find(|stage| stage.id == id)
    }

    /// Prompt of the stage at 1-based `index`, or `""` if there is none.
    pub fn get_prompt_by_index(&self, index: i64) -> &str {
        self.get_stage_by_index(index)
            .map_or("", |stage| stage.prompt.as_str())
    }

    /// Number of stages.
    pub fn get_stage_count(&self) -> usize {
        self.config.stages.len()
    }

    pub fn get_settings(&self) -> &PipelineSettings {
        &self.config.settings
    }

    /// Model identifier of the stage at 1-based `index`, or `""` if there is none.
    pub fn get_model_for_stage(&self, index: i64) -> &str {
        self.get_stage_by_index(index)
            .map_or("", |stage| stage.model.as_str())
    }

    pub fn get_api_config(&self) -> &ApiConfig {
        &self.config.api
    }
}

impl From<PipelineConfig> for PipelineConfigAccessor {
    fn from(config: PipelineConfig) -> Self {
        Self::from_config(config)
    }
}
