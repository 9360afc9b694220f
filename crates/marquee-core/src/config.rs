use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::color::Rgba;

/// Built-in pause between scroll cycles, in milliseconds
pub const BUILTIN_PAUSE_DURATION_MS: i64 = 10_000;

/// Process-wide pause duration picked up by views whose config leaves it unset.
///
/// Set once at startup (before views are constructed); later writes only affect
/// views constructed afterwards.
static DEFAULT_PAUSE_DURATION_MS: AtomicI64 = AtomicI64::new(BUILTIN_PAUSE_DURATION_MS);

/// Override the process-wide default pause duration (milliseconds, `<= 0` disables pausing)
pub fn set_default_pause_duration(ms: i64) {
    DEFAULT_PAUSE_DURATION_MS.store(ms, Ordering::Relaxed);
}

/// Current process-wide default pause duration in milliseconds
pub fn default_pause_duration() -> i64 {
    DEFAULT_PAUSE_DURATION_MS.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file (the terminal is owned by the UI, so logs only go to a file)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

/// Widget properties as they appear in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Text to display
    #[serde(default)]
    pub text: Option<String>,
    /// Text color
    #[serde(default = "default_text_color")]
    pub text_color: Rgba,
    /// Font size, in host units
    #[serde(default = "default_text_size")]
    pub text_size: f32,
    /// Pixels (cells, in a terminal) moved per frame
    #[serde(default = "default_speed")]
    pub speed: i32,
    /// Pause between scroll cycles in ms; unset uses the process-wide default, `<= 0` disables
    #[serde(default)]
    pub pause_duration_ms: Option<i64>,
    /// Animate text that does not fit
    #[serde(default = "default_true")]
    pub marquee_enabled: bool,
    /// Draw fading overlays at the viewport edges
    #[serde(default)]
    pub show_edge_effect: bool,
    /// Edge overlay width as a percentage of the viewport width
    #[serde(default = "default_edge_effect_width")]
    pub edge_effect_width: u32,
    /// Edge overlay color, usually the background behind the widget
    #[serde(default = "default_edge_effect_color")]
    pub edge_effect_color: Rgba,
    /// Delay between animation frames
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: None,
            text_color: default_text_color(),
            text_size: default_text_size(),
            speed: default_speed(),
            pause_duration_ms: None,
            marquee_enabled: default_true(),
            show_edge_effect: false,
            edge_effect_width: default_edge_effect_width(),
            edge_effect_color: default_edge_effect_color(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl MarqueeConfig {
    /// Pause duration with the process-wide default applied
    pub fn resolved_pause_duration(&self) -> i64 {
        self.pause_duration_ms.unwrap_or_else(default_pause_duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Background behind the marquees; edge overlays fade into it
    #[serde(default)]
    pub background: Option<Rgba>,
    /// Additional texts shown below the main marquee
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            background: None,
            lines: Vec::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_text_color() -> Rgba {
    Rgba::BLACK
}

fn default_text_size() -> f32 {
    20.0
}

fn default_speed() -> i32 {
    10
}

fn default_edge_effect_width() -> u32 {
    20
}

fn default_edge_effect_color() -> Rgba {
    Rgba::WHITE
}

fn default_frame_interval() -> u64 {
    20
}

fn default_tick_rate() -> u64 {
    10
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, returning defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml_string()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Log file path (with tilde expansion), if logging is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        self.general.log_file.as_deref().map(expand_tilde)
    }
}
