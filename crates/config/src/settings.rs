// Editor settings
// Loaded from ~/.config/richcell/settings.json

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::actions::{validate_entries, ActionEntry};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Editor elements
    #[serde(rename = "editor.holderClass")]
    pub holder_class: String,

    #[serde(rename = "editor.surfaceClass")]
    pub surface_class: String,

    #[serde(rename = "editor.toolbarClass")]
    pub toolbar_class: String,

    #[serde(rename = "editor.activeClass")]
    pub active_class: String,

    // Toolbar sync
    #[serde(rename = "sync.triggers")]
    pub sync_triggers: Vec<String>,

    // Toolbar contents, None = built-in bold/italic/underline/strike-through
    #[serde(rename = "toolbar.actions", skip_serializing_if = "Option::is_none")]
    pub toolbar_actions: Option<Vec<ActionEntry>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Editor
            holder_class: "richcellEditorHolder".to_string(),
            surface_class: "htRichTextHolder".to_string(),
            toolbar_class: "htActionBar".to_string(),
            active_class: "active".to_string(),
            // Sync: release events are where the caret has settled
            sync_triggers: vec!["keyup".to_string(), "mouseup".to_string()],
            // Toolbar
            toolbar_actions: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("richcell");
        config_dir.join("settings.json")
    }

    /// Load settings from the user's config directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load from `path`. A missing file is created with the commented
    /// defaults; an unreadable or invalid one is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            settings.create_default_file(path);
            return settings;
        }

        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}: {}; using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file.
    /// Lines starting with `//` are treated as comments.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        let settings: Settings =
            serde_json::from_str(&cleaned).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, class) in [
            ("editor.holderClass", &self.holder_class),
            ("editor.surfaceClass", &self.surface_class),
            ("editor.toolbarClass", &self.toolbar_class),
            ("editor.activeClass", &self.active_class),
        ] {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single class name, got '{class}'"
                )));
            }
        }
        if let Some(actions) = &self.toolbar_actions {
            validate_entries(actions)?;
        }
        Ok(())
    }

    /// Write pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        fs::write(path, json)?;
        Ok(())
    }

    /// Create default settings file with comments
    fn create_default_file(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Error creating config directory: {}", e);
                return;
            }
        }

        let default_config = r#"{
    // Element classes
    "editor.holderClass": "richcellEditorHolder",
    "editor.surfaceClass": "htRichTextHolder",
    "editor.toolbarClass": "htActionBar",
    "editor.activeClass": "active",

    // Surface events that resync toolbar buttons
    // Options: "keyup", "mouseup", "keydown", "mousedown", "input", "focus"
    "sync.triggers": ["keyup", "mouseup"]

    // Custom toolbar (omit for bold/italic/underline/strike-through):
    // "toolbar.actions": [
    //     { "name": "bold", "icon": "<strong>B</strong>", "title": "Bold", "command": "bold", "state": "bold" }
    // ]
}
"#;

        match fs::write(path, default_config) {
            Ok(()) => log::debug!("Wrote default settings to {}", path.display()),
            Err(e) => log::warn!("Error writing default settings.json: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sync_triggers, vec!["keyup", "mouseup"]);
        assert!(settings.toolbar_actions.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "editor.activeClass": "is-on" }"#).unwrap();
        assert_eq!(settings.active_class, "is-on");
        assert_eq!(settings.surface_class, "htRichTextHolder");
        assert_eq!(settings.sync_triggers.len(), 2);
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let src = r#"{
    // pick something louder
    "editor.activeClass": "pressed",
    "sync.triggers": ["keyup", "mouseup", "input"]
}"#;
        let settings = Settings::from_json(src).unwrap();
        assert_eq!(settings.active_class, "pressed");
        assert_eq!(settings.sync_triggers, vec!["keyup", "mouseup", "input"]);
    }

    #[test]
    fn test_whitespace_class_rejected() {
        let err = Settings::from_json(r#"{ "editor.toolbarClass": "a b" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("editor.toolbarClass")));
    }

    #[test]
    fn test_custom_actions_validated() {
        let src = r#"{
    "toolbar.actions": [
        { "name": "bold", "icon": "B", "title": "Bold", "command": "bold", "state": "bold" },
        { "name": "bold", "icon": "B", "title": "Bold", "command": "bold" }
    ]
}"#;
        let err = Settings::from_json(src).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.active_class = "on".to_string();
        settings.toolbar_actions = Some(vec![ActionEntry {
            name: "italic".to_string(),
            icon: "<em>I</em>".to_string(),
            title: "Italic".to_string(),
            command: "italic".to_string(),
            state: Some("italic".to_string()),
        }]);
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_config_path_under_app_dir() {
        assert!(Settings::config_path().ends_with("richcell/settings.json"));
    }

    #[test]
    fn test_load_or_default_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("richcell").join("settings.json");

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_load_or_default_ignores_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "editor.activeClass": "on", "#).unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        fs::write(&path, r#"{ "editor.activeClass": "two words" }"#).unwrap();
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        fs::write(&path, r#"{ "editor.activeClass": "on" }"#).unwrap();
        assert_eq!(Settings::load_or_default(&path).active_class, "on");
    }

    #[test]
    fn test_default_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        Settings::default().create_default_file(&path);
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
    }
}
