//! Panel configuration and persistence
//!
//! Stores panel preferences in `~/.config/immersive/config.yaml`. Every
//! field is also runtime-mutable through the controller's setters; this is
//! only the initial/persisted surface.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Minimum dock fraction after clamping; a zero-height dock is degenerate
const MIN_DOCK_FRACTION: f32 = 0.01;

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Initial state: true starts with the dock hidden
    #[serde(default)]
    pub immersed: bool,

    /// Whether input events reveal the dock
    #[serde(default = "default_true")]
    pub auto_show: bool,

    /// Whether the dock hides itself after `timeout` seconds
    #[serde(default = "default_true")]
    pub auto_hide: bool,

    /// Seconds of inactivity before the dock hides. 0 disables auto-hide.
    #[serde(default = "default_timeout", rename = "timeout")]
    pub timeout_secs: f32,

    /// Seconds the show/hide animation takes
    #[serde(default = "default_animation_duration", rename = "animation_duration")]
    pub animation_duration_secs: f32,

    /// Dock size as a fraction of the container height, in (0, 1]
    #[serde(default = "default_max_dock_fraction", rename = "max_dock_size")]
    pub max_dock_fraction: f32,

    /// Whether dock opacity follows progress or stays opaque
    #[serde(default = "default_true")]
    pub fade: bool,

    /// Easing curve for show/hide animations
    #[serde(default)]
    pub transition: Easing,
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> f32 {
    5.0
}

fn default_animation_duration() -> f32 {
    0.75
}

fn default_max_dock_fraction() -> f32 {
    0.2
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            immersed: false,
            auto_show: true,
            auto_hide: true,
            timeout_secs: default_timeout(),
            animation_duration_secs: default_animation_duration(),
            max_dock_fraction: default_max_dock_fraction(),
            fade: true,
            transition: Easing::default(),
        }
    }
}

impl PanelConfig {
    /// Clamp out-of-range values into their valid domains
    ///
    /// Negative or non-finite timeout becomes 0 (auto-hide disabled);
    /// negative or non-finite duration becomes 0 (instant snap); the dock
    /// fraction is forced into (0, 1], falling back to the default when it
    /// is unusable. Clamping keeps a hand-edited config file working
    /// instead of rejecting it wholesale.
    pub fn sanitized(mut self) -> Self {
        if !self.timeout_secs.is_finite() || self.timeout_secs < 0.0 {
            tracing::warn!(timeout = self.timeout_secs, "invalid timeout, clamping to 0");
            self.timeout_secs = 0.0;
        }
        if !self.animation_duration_secs.is_finite() || self.animation_duration_secs < 0.0 {
            tracing::warn!(
                duration = self.animation_duration_secs,
                "invalid animation duration, clamping to 0"
            );
            self.animation_duration_secs = 0.0;
        }
        if !self.max_dock_fraction.is_finite() || self.max_dock_fraction <= 0.0 {
            tracing::warn!(
                fraction = self.max_dock_fraction,
                "invalid dock fraction, using default"
            );
            self.max_dock_fraction = default_max_dock_fraction();
        } else if self.max_dock_fraction > 1.0 {
            self.max_dock_fraction = 1.0;
        } else if self.max_dock_fraction < MIN_DOCK_FRACTION {
            self.max_dock_fraction = MIN_DOCK_FRACTION;
        }
        self
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<PanelConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
