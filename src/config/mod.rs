use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_GRID_DIVISIONS, DEFAULT_GRID_EXTENT, MAX_ZOOM, MIN_ZOOM};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Editor configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Draw the ground grid
    #[serde(default = "default_true")]
    pub grid_visible: bool,

    /// Snap new vertices to the nearest grid intersection
    #[serde(default)]
    pub snap_to_grid: bool,

    /// Side length of the square ground surface, in world units
    #[serde(default = "default_grid_extent")]
    pub grid_extent: f32,

    /// Grid cells along each side
    #[serde(default = "default_grid_divisions")]
    pub grid_divisions: u32,

    /// Orthographic scale the camera starts with
    #[serde(default = "default_zoom")]
    pub initial_zoom: f32,
}

fn default_true() -> bool {
    true
}

fn default_grid_extent() -> f32 {
    DEFAULT_GRID_EXTENT
}

fn default_grid_divisions() -> u32 {
    DEFAULT_GRID_DIVISIONS
}

fn default_zoom() -> f32 {
    1.0
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            grid_visible: true,
            snap_to_grid: false,
            grid_extent: DEFAULT_GRID_EXTENT,
            grid_divisions: DEFAULT_GRID_DIVISIONS,
            initial_zoom: 1.0,
        }
    }
}

impl AppConfigData {
    /// Replace values the editor can't work with by their defaults
    pub fn sanitized(mut self) -> Self {
        if !(self.grid_extent.is_finite() && self.grid_extent > 0.0) {
            warn!("Invalid grid_extent {} in config, using default", self.grid_extent);
            self.grid_extent = DEFAULT_GRID_EXTENT;
        }
        if self.grid_divisions == 0 {
            warn!("grid_divisions must be at least 1, using default");
            self.grid_divisions = DEFAULT_GRID_DIVISIONS;
        }
        if !(self.initial_zoom.is_finite() && self.initial_zoom > 0.0) {
            warn!("Invalid initial_zoom {} in config, using default", self.initial_zoom);
            self.initial_zoom = 1.0;
        }
        self.initial_zoom = self.initial_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Parse config file contents, falling back to defaults with a reason on failure
fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str::<AppConfigData>(json) {
        Ok(data) => (data.sanitized(), None),
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Load configuration from disk.
///
/// Returns the data plus an error message if it was reset to defaults.
fn load_config(config_path: &Path) -> (AppConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (AppConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.1.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    if let Err(e) = crate::paths::ensure_directories() {
        warn!("Failed to create config directories: {}", e);
    }

    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}
