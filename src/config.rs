//! Game configuration: window, world and tuning values.
//!
//! Read once at startup from `assets/config.ron`. Every field has a default,
//! so the file may list only the values it wants to change.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "assets/config.ron";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub world_width: i32,
    pub world_height: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    pub slot_count: usize,
    /// On-screen edge length of one hotbar slot.
    pub slot_size: f32,
    /// Pixels per second along one axis.
    pub player_speed: f32,
    pub player_spawn: (f32, f32),
    pub seconds_per_frame: f32,
    /// Updates per crop stage.
    pub growth_speed: u32,
    /// Chance for an interior grass tile to carry a flower.
    pub flower_density: f64,
    pub map_seed: u64,
    pub starting_items: Vec<(String, u32)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            world_width: 1600,
            world_height: 1600,
            tile_width: 64,
            tile_height: 64,
            slot_count: 8,
            slot_size: 96.0,
            player_speed: 150.0,
            player_spawn: (100.0, 100.0),
            seconds_per_frame: 0.15,
            growth_speed: 120,
            flower_density: 0.04,
            map_seed: 7,
            starting_items: vec![
                ("carrot_seed".to_string(), 5),
                ("tomato_seed".to_string(), 5),
            ],
        }
    }
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self, String> {
        ron::from_str(text).map_err(|e| format!("Failed to parse config RON: {}", e))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_ron(&text).map(Some)
    }

    /// Load from `path`, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        match Self::load(path) {
            Ok(Some(config)) => (config, ConfigSource::File(path.display().to_string())),
            Ok(None) => (Self::default(), ConfigSource::Defaults),
            Err(e) => (Self::default(), ConfigSource::Invalid(e)),
        }
    }
}

/// Where the active `GameConfig` came from. Kept as a resource so the
/// outcome is logged once logging is up.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Defaults,
    Invalid(String),
}

pub fn log_config_source(source: Res<ConfigSource>) {
    match source.as_ref() {
        ConfigSource::File(path) => info!("[Config] Loaded {}", path),
        ConfigSource::Defaults => info!("[Config] No config file, using defaults"),
        ConfigSource::Invalid(e) => warn!("[Config] {}, using defaults", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = GameConfig::from_ron("(growth_speed: 30, slot_count: 4)").unwrap();
        assert_eq!(config.growth_speed, 30);
        assert_eq!(config.slot_count, 4);
        assert_eq!(config.world_width, 1600);
        assert_eq!(config.starting_items.len(), 2);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let err = GameConfig::from_ron("(growth_speed: \"fast\")").unwrap_err();
        assert!(err.starts_with("Failed to parse config RON"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("does/not/exist/config.ron");
        assert_eq!(GameConfig::load(path), Ok(None));
        let (config, source) = GameConfig::load_or_default(path);
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }
}
