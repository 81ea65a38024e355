// Toolbar action tables
// Loaded from settings.json ("toolbar.actions") or a standalone TOML file

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One toolbar entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub name: String,
    /// Button markup (e.g. `<strong>B</strong>`)
    pub icon: String,
    /// Tooltip text
    pub title: String,
    /// Engine command run when the button is clicked
    pub command: String,
    /// Engine command queried for the button's active state.
    /// Omit for actions without a toggle state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Ordered list of toolbar entries. File order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTable {
    #[serde(rename = "action", default)]
    pub actions: Vec<ActionEntry>,
}

impl ActionTable {
    /// Parse a TOML table of `[[action]]` entries and validate it.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let table: ActionTable =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Names must be non-empty and unique; every entry needs a command.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_entries(&self.actions)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

pub(crate) fn validate_entries(entries: &[ActionEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!("action #{} has an empty name", i + 1)));
        }
        if entry.command.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "action '{}' has an empty command",
                entry.name
            )));
        }
        if matches!(entry.state.as_deref(), Some(s) if s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "action '{}' has an empty state query",
                entry.name
            )));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate action '{}'", entry.name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[[action]]
name = "bold"
icon = "<strong>B</strong>"
title = "Bold"
command = "bold"
state = "bold"

[[action]]
name = "clear"
icon = "&#x2715;"
title = "Clear formatting"
command = "removeFormat"
"#;

    #[test]
    fn test_from_toml_preserves_order() {
        let table = ActionTable::from_toml(TABLE).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.actions[0].name, "bold");
        assert_eq!(table.actions[0].state.as_deref(), Some("bold"));
        assert_eq!(table.actions[1].name, "clear");
        assert_eq!(table.actions[1].state, None);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let doubled = format!(
            "{TABLE}\n[[action]]\nname = \"bold\"\nicon = \"B\"\ntitle = \"Bold again\"\ncommand = \"bold\"\n"
        );
        let err = ActionTable::from_toml(&doubled).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref m) if m.contains("duplicate action 'bold'")));
    }

    #[test]
    fn test_empty_command_rejected() {
        let src = r#"
[[action]]
name = "noop"
icon = "?"
title = "Nothing"
command = " "
"#;
        let err = ActionTable::from_toml(src).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = ActionTable::from_toml("[[action]\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_file_is_empty_table() {
        let table = ActionTable::from_toml("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let table = ActionTable::from_toml(TABLE).unwrap();
        let text = table.to_toml().unwrap();
        assert_eq!(ActionTable::from_toml(&text).unwrap(), table);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.toml");
        std::fs::write(&path, TABLE).unwrap();
        let table = ActionTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);

        let missing = ActionTable::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
