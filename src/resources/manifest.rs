//! Scene manifest: the list of models to stage and the images they follow.
//!
//! The manifest is a small JSON file naming one model per trackable
//! reference image:
//!
//! ```json
//! {
//!   "models": [
//!     { "name": "cat", "asset": "assets/models/cat.glb" },
//!     { "name": "dog", "asset": "assets/models/dog.glb" }
//!   ]
//! }
//! ```
//!
//! `name` must match the reference-image name the detector reports. `asset`
//! is opaque to the engine; a renderer integration resolves it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One model entry in the scene manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelAsset {
    pub name: String,
    pub asset: String,
}

/// Parsed scene manifest. An empty model list is valid and stages nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub models: Vec<ModelAsset>,
}

impl SceneManifest {
    /// Load and parse a manifest from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read scene manifest {}: {e}", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("failed to parse scene manifest: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = SceneManifest::from_json(
            r#"{ "models": [
                { "name": "cat", "asset": "assets/models/cat.glb" },
                { "name": "dog", "asset": "assets/models/dog.glb" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(manifest.models.len(), 2);
        assert_eq!(manifest.models[0].name, "cat");
        assert_eq!(manifest.models[1].asset, "assets/models/dog.glb");
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let manifest = SceneManifest::from_json("{}").unwrap();
        assert!(manifest.models.is_empty());
    }

    #[test]
    fn test_parse_error_is_err_not_panic() {
        assert!(SceneManifest::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_is_err() {
        assert!(SceneManifest::load_from_file("/nonexistent/manifest.json").is_err());
    }
}
