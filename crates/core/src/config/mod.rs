//! Pipeline configuration: the embedded document and its accessors.
//!
//! The bundled `pipeline.config.json` is parsed once, on first use, into a
//! process-wide [`PipelineConfigAccessor`] that is never mutated afterwards.
//! The free functions in this module read from that shared instance and can
//! be called from any thread without locking.
//!
//! If the embedded document cannot be loaded, the failure is logged and the
//! shared instance holds an empty document, so every lookup reports absence.
//! Use [`loader::load_embedded_config`] directly to observe the error.

pub mod accessor;
pub mod assets;
pub mod error;
pub mod loader;

use accessor::PipelineConfigAccessor;
use sk_protocol::pipeline_models::{ApiConfig, PipelineConfig, PipelineSettings, StageConfig};
use std::sync::LazyLock;

static PIPELINE_CONFIG: LazyLock<PipelineConfigAccessor> =
    LazyLock::new(|| match loader::load_embedded_config() {
        Ok(config) => PipelineConfigAccessor::from_config(config),
        Err(e) => {
            tracing::error!(error = %e, "failed to load embedded pipeline config");
            PipelineConfigAccessor::default()
        }
    });

/// Load the embedded document now instead of on first lookup.
///
/// Call this at startup to surface load failures in the log early.
pub fn init() {
    LazyLock::force(&PIPELINE_CONFIG);
}

/// The shared accessor over the embedded document.
pub fn accessor() -> &'static PipelineConfigAccessor {
    &PIPELINE_CONFIG
}

/// The full embedded document.
pub fn get_config() -> &'static PipelineConfig {
    accessor().get_config()
}

/// All stages, in pipeline order.
pub fn get_stages() -> &'static [StageConfig] {
    accessor().get_stages()
}

/// The stage at 1-based position `index`, or `None` if out of range.
pub fn get_stage_by_index(index: i64) -> Option<&'static StageConfig> {
    accessor().get_stage_by_index(index)
}

/// The first stage whose id equals `id`.
pub fn get_stage_by_id(id: &str) -> Option<&'static StageConfig> {
    accessor().get_stage_by_id(id)
}

/// Prompt of the stage at 1-based `index`, or `""`.
pub fn get_prompt_by_index(index: i64) -> &'static str {
    accessor().get_prompt_by_index(index)
}

pub fn get_stage_count() -> usize {
    accessor().get_stage_count()
}

pub fn get_settings() -> &'static PipelineSettings {
    accessor().get_settings()
}

/// Model identifier of the stage at 1-based `index`, or `""`.
pub fn get_model_for_stage(index: i64) -> &'static str {
    accessor().get_model_for_stage(index)
}

pub fn get_api_config() -> &'static ApiConfig {
    accessor().get_api_config()
}
