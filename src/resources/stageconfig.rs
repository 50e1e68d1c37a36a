//! Engine configuration resource.
//!
//! Settings loaded from an INI configuration file, with safe defaults so the
//! engine starts without one. The demo binary reads the feed section; library
//! hosts usually only care about the manifest path.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scene]
//! manifest = ./assets/scene.json
//!
//! [feed]
//! fps = 30
//! frames = 120
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MANIFEST_PATH: &str = "./assets/scene.json";
const DEFAULT_FEED_FPS: u32 = 30;
const DEFAULT_FEED_FRAMES: u32 = 120;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Engine configuration resource.
///
/// Stores the scene manifest location and the demo feed parameters. Values
/// not present in the configuration file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    /// Path to the JSON scene manifest.
    pub manifest_path: PathBuf,
    /// Batches per second delivered by the simulated detection feed.
    pub feed_fps: u32,
    /// Number of frames the demo binary runs before exiting.
    pub feed_frames: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            feed_fps: DEFAULT_FEED_FPS,
            feed_frames: DEFAULT_FEED_FRAMES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [scene] section
        if let Some(manifest) = config.get("scene", "manifest") {
            self.manifest_path = PathBuf::from(manifest);
        }

        // [feed] section
        if let Some(fps) = config.getuint("feed", "fps").ok().flatten() {
            self.feed_fps = fps as u32;
        }
        if let Some(frames) = config.getuint("feed", "frames").ok().flatten() {
            self.feed_frames = frames as u32;
        }

        info!(
            "Loaded config: manifest={}, feed {} fps for {} frames",
            self.manifest_path.display(),
            self.feed_fps,
            self.feed_frames
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StageConfig::new();
        assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
        assert_eq!(config.feed_fps, DEFAULT_FEED_FPS);
        assert_eq!(config.feed_frames, DEFAULT_FEED_FRAMES);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = StageConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.feed_fps, DEFAULT_FEED_FPS);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = std::env::temp_dir().join("arstage_stageconfig_test.ini");
        std::fs::write(
            &path,
            "[scene]\nmanifest = ./scenes/zoo.json\n\n[feed]\nfps = 60\n",
        )
        .unwrap();

        let mut config = StageConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.manifest_path, PathBuf::from("./scenes/zoo.json"));
        assert_eq!(config.feed_fps, 60);
        // key absent from the file keeps its default
        assert_eq!(config.feed_frames, DEFAULT_FEED_FRAMES);

        std::fs::remove_file(&path).ok();
    }
}
