//! Embedded configuration assets.
//!
//! This module uses `rust-embed` to compile the workspace `assets/` directory
//! into the binary, so the pipeline document ships with the code and is never
//! read from disk at runtime.

use rust_embed::RustEmbed;

/// File name of the pipeline document inside `assets/`.
pub const PIPELINE_CONFIG_FILE: &str = "pipeline.config.json";

/// Embedded files from the workspace `assets/` directory.
///
/// The path is relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../assets` = workspace `assets/`
///
/// `debug-embed` is enabled so debug builds embed the files too and behave
/// exactly like release builds.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../assets"]
pub struct ConfigAssets;

/// Get an embedded file's content by path.
///
/// # Returns
/// The file content as a String, or None if the file isn't embedded.
///
/// # Example
/// ```
/// use sk_core::config::assets::{get_asset, PIPELINE_CONFIG_FILE};
///
/// let doc = get_asset(PIPELINE_CONFIG_FILE).expect("pipeline document should be embedded");
/// assert!(doc.contains("\"stages\""));
/// ```
pub fn get_asset(path: &str) -> Option<String> {
    ConfigAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_document_is_embedded() {
        let doc = get_asset(PIPELINE_CONFIG_FILE);
        assert!(doc.is_some(), "pipeline.config.json should be embedded");
        let content = doc.unwrap();
        assert!(content.contains("\"stages\""));
        assert!(content.contains("\"settings\""));
        assert!(content.contains("\"api\""));
    }

    #[test]
    fn test_get_nonexistent_asset() {
        let result = get_asset("nonexistent.json");
        assert!(result.is_none(), "Nonexistent files should return None");
    }
}
