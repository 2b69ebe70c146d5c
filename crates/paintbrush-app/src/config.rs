//! Application configuration.

use std::path::Path;

use paintbrush_core::{InputController, Rgba8, ToolSettings};
use serde::Deserialize;

use crate::error::AppError;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "PAINTBRUSH_CONFIG";

/// Application configuration.
///
/// Every field is optional in the JSON file; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Canvas background, also painted by the eraser.
    pub background_color: String,
    pub default_tool: String,
    pub default_color: String,
    pub default_filled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PaintBrush".to_string(),
            width: 1024,
            height: 720,
            background_color: "#ffffff".to_string(),
            default_tool: "rectangle".to_string(),
            default_color: "#ff0000".to_string(),
            default_filled: false,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    /// when it is unset or unusable.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::error!("{err}; using default config");
                Self::default()
            }
        }
    }

    pub fn background(&self) -> Rgba8 {
        parse_or_warn("background_color", &self.background_color, Rgba8::WHITE)
    }

    pub fn color(&self) -> Rgba8 {
        parse_or_warn("default_color", &self.default_color, Rgba8::RED)
    }

    /// Controller primed with the configured tool, color and fill flag.
    ///
    /// An unknown tool name leaves the controller with no tool, so drawing
    /// starts once a tool is picked from the panel.
    pub fn build_controller(&self) -> InputController {
        let settings = ToolSettings {
            tool: None,
            color: self.color(),
            filled: self.default_filled,
        };
        let mut controller = InputController::new(settings, self.background());
        let _ = controller.select_tool_named(&self.default_tool);
        controller
    }
}

fn parse_or_warn(field: &str, value: &str, fallback: Rgba8) -> Rgba8 {
    value.parse().unwrap_or_else(|err| {
        log::warn!("Ignoring {field}: {err}");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintbrush_core::ToolKind;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "PaintBrush");
        assert_eq!(config.background(), Rgba8::WHITE);
        assert_eq!(config.color(), Rgba8::RED);

        let controller = config.build_controller();
        assert_eq!(controller.settings().tool, Some(ToolKind::Rectangle));
        assert!(!controller.settings().filled);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "width": 640, "default_tool": "oval" }"#);
        let Ok(config) = config else {
            panic!("config should parse");
        };
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 720);
        assert_eq!(config.build_controller().settings().tool, Some(ToolKind::Oval));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig {
            background_color: "white".to_string(),
            default_color: "#12".to_string(),
            default_tool: "spray".to_string(),
            default_filled: true,
            ..AppConfig::default()
        };
        assert_eq!(config.background(), Rgba8::WHITE);
        let controller = config.build_controller();
        assert_eq!(controller.settings().color, Rgba8::RED);
        assert_eq!(controller.settings().tool, None);
        assert!(controller.settings().filled);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{ width: "),
            Err(AppError::ConfigParse(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "width": "wide" }"#),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            AppConfig::load(&path),
            Err(AppError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paintbrush.json");
        std::fs::write(&path, r##"{ "title": "Sketch", "background_color": "#000000" }"##).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.title, "Sketch");
        assert_eq!(config.background(), Rgba8::BLACK);
    }
}
