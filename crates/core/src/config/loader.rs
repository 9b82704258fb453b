//! Loader for the pipeline document.
//!
//! Parsing is shallow: the JSON is mapped onto
//! [`PipelineConfig`] and missing fields take their empty defaults. No
//! structural checks (unique ids, non-empty prompts, ...) are made.

use crate::config::assets::{get_asset, PIPELINE_CONFIG_FILE};
use crate::config::error::{ConfigError, ConfigResult};
use sk_protocol::pipeline_models::PipelineConfig;

/// Parses one pipeline document.
///
/// `source_name` only labels the document in error messages.
///
/// # Errors
///
/// Returns [`ConfigError::JsonParse`] if `json` is not valid JSON or a
/// present field has the wrong type.
///
/// # Example
///
/// ```
/// use sk_core::config::loader::parse_config;
///
/// let config = parse_config("inline", r#"{ "stages": [{ "id": "s1" }] }"#).unwrap();
/// assert_eq!(config.stages[0].id, "s1");
/// ```
pub fn parse_config(source_name: &str, json: &str) -> ConfigResult<PipelineConfig> {
    serde_json::from_str(json).map_err(|source| ConfigError::JsonParse {
        source_name: source_name.to_string(),
        source,
    })
}

/// Loads the pipeline document bundled into the binary.
///
/// # Errors
///
/// Returns [`ConfigError::AssetNotFound`] if the document was not embedded,
/// or [`ConfigError::JsonParse`] if it cannot be parsed.
pub fn load_embedded_config() -> ConfigResult<PipelineConfig> {
    let content = get_asset(PIPELINE_CONFIG_FILE)
        .ok_or_else(|| ConfigError::AssetNotFound(PIPELINE_CONFIG_FILE.to_string()))?;

    let config = parse_config(PIPELINE_CONFIG_FILE, &content)?;

    tracing::debug!(
        name = %config.name,
        version = %config.version,
        stages = config.stages.len(),
        "loaded embedded pipeline config"
    );

    Ok(config)
}
