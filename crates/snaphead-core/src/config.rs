use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::header::HeaderHeight;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub snap: SnapConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Height of the header bar itself, in rows
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
    /// Inset reserved above the bar (status bar / notch area)
    #[serde(default)]
    pub safe_area_top: f64,
    /// Header title text
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            bar_height: default_bar_height(),
            safe_area_top: 0.0,
            title: default_title(),
        }
    }
}

impl HeaderConfig {
    /// Total collapsible height: the bar plus the top inset above it.
    pub fn height(&self) -> crate::Result<HeaderHeight> {
        HeaderHeight::new(self.bar_height + self.safe_area_top)
    }
}

/// Easing curve for the snap animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    Cubic,
    #[default]
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Quiet period after a drag ends before the snap is evaluated
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Duration of the open/close animation
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Fraction of the header that must be hidden before snapping closed
    #[serde(default = "default_collapse_threshold")]
    pub collapse_threshold: f64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            animation_duration_ms: default_animation_duration_ms(),
            collapse_threshold: default_collapse_threshold(),
            easing: EasingType::default(),
        }
    }
}

impl SnapConfig {
    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Input silence after which a synthetic drag is released
    #[serde(default = "default_release_ms")]
    pub release_ms: u64,
    /// Per-tick velocity multiplier while coasting
    #[serde(default = "default_momentum_decay")]
    pub momentum_decay: f64,
    /// Release velocity (rows per tick) below which no momentum is started
    #[serde(default = "default_momentum_min_velocity")]
    pub momentum_min_velocity: f64,
    /// Rows scrolled per wheel notch or key press
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            release_ms: default_release_ms(),
            momentum_decay: default_momentum_decay(),
            momentum_min_velocity: default_momentum_min_velocity(),
            wheel_step: default_wheel_step(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snaphead")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bar_height() -> f64 {
    3.0
}

fn default_title() -> String {
    "Title".to_string()
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_animation_duration_ms() -> u64 {
    350
}

fn default_collapse_threshold() -> f64 {
    0.5
}

fn default_tick_rate() -> u64 {
    16 // ~60fps
}

fn default_release_ms() -> u64 {
    80
}

fn default_momentum_decay() -> f64 {
    0.85
}

fn default_momentum_min_velocity() -> f64 {
    0.5
}

fn default_wheel_step() -> f64 {
    1.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
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
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        self.header.height()?;
        if self.header.safe_area_top < 0.0 {
            return Err(crate::Error::Config(format!(
                "header.safe_area_top must not be negative, got {}",
                self.header.safe_area_top
            )));
        }
        if !(0.0..=1.0).contains(&self.snap.collapse_threshold) {
            return Err(crate::Error::Config(format!(
                "snap.collapse_threshold must be within [0, 1], got {}",
                self.snap.collapse_threshold
            )));
        }
        if !(0.0..1.0).contains(&self.ui.momentum_decay) {
            return Err(crate::Error::Config(format!(
                "ui.momentum_decay must be within [0, 1), got {}",
                self.ui.momentum_decay
            )));
        }
        if !(self.ui.wheel_step.is_finite() && self.ui.wheel_step > 0.0) {
            return Err(crate::Error::Config(format!(
                "ui.wheel_step must be a positive number, got {}",
                self.ui.wheel_step
            )));
        }
        if !(self.ui.momentum_min_velocity.is_finite() && self.ui.momentum_min_velocity >= 0.0) {
            return Err(crate::Error::Config(format!(
                "ui.momentum_min_velocity must be a non-negative number, got {}",
                self.ui.momentum_min_velocity
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snaphead/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snaphead")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("snaphead.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.snap.debounce_ms, 250);
        assert_eq!(config.snap.animation_duration_ms, 350);
        assert!((config.snap.collapse_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.snap.easing, EasingType::EaseInOut);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [header]
            bar_height = 4.0
            safe_area_top = 1.0

            [snap]
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert!((config.header.height().unwrap().get() - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.header.title, "Title");
        assert_eq!(config.snap.easing, EasingType::Cubic);
        assert_eq!(config.snap.debounce_ms, 250);
        assert_eq!(config.ui.tick_rate_ms, 16);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.header.bar_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidHeaderHeight(_))
        ));

        let mut config = AppConfig::default();
        config.snap.collapse_threshold = 1.5;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_scroll_input() {
        for step in [f64::NAN, f64::INFINITY, 0.0, -1.0] {
            let mut config = AppConfig::default();
            config.ui.wheel_step = step;
            assert!(
                matches!(config.validate(), Err(crate::Error::Config(_))),
                "wheel_step {step} accepted"
            );
        }
        for velocity in [f64::NAN, f64::INFINITY, -0.1] {
            let mut config = AppConfig::default();
            config.ui.momentum_min_velocity = velocity;
            assert!(
                matches!(config.validate(), Err(crate::Error::Config(_))),
                "momentum_min_velocity {velocity} accepted"
            );
        }

        let err = AppConfig::from_toml("[ui]\nwheel_step = nan\n");
        assert!(matches!(err, Err(crate::Error::Config(_))));

        let mut config = AppConfig::default();
        config.ui.momentum_min_velocity = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_durations() {
        let snap = SnapConfig::default();
        assert_eq!(snap.debounce(), Duration::from_millis(250));
        assert_eq!(snap.animation_duration(), Duration::from_millis(350));
    }

    #[test]
    fn test_toml_round_trip_keeps_easing_name() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("easing = \"ease_in_out\""));
    }
}
