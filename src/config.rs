use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SHEET_NAME: &str = "Annex II & Annex III";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    // Worksheet holding the unit table
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    // Header labels, matched exactly against the first row
    #[serde(default)]
    pub columns: ColumnLabels,

    // Extra names for generated units, emitted after all records
    #[serde(default = "default_aliases")]
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnLabels {
    #[serde(default = "default_name_label")]
    pub name: String,
    #[serde(default = "default_code_label")]
    pub code: String,
    #[serde(default = "default_suffix_label")]
    pub suffix: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            name: default_name_label(),
            code: default_code_label(),
            suffix: default_suffix_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Alias {
    pub alias: String,
    pub target: String,
}

impl Alias {
    pub fn new(alias: &str, target: &str) -> Self {
        Self {
            alias: alias.to_string(),
            target: target.to_string(),
        }
    }
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_name_label() -> String {
    "Name".to_string()
}

fn default_code_label() -> String {
    "Common\nCode".to_string()
}

fn default_suffix_label() -> String {
    "Symbol".to_string()
}

fn default_aliases() -> Vec<Alias> {
    vec![
        Alias::new("MINUTE", "MINUTE_UNIT_OF_TIME"),
        Alias::new("SECOND", "SECOND_UNIT_OF_TIME"),
    ]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            columns: ColumnLabels::default(),
            aliases: default_aliases(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_sheet() {
        let config = GeneratorConfig::default();
        assert_eq!(config.sheet_name, "Annex II & Annex III");
        assert_eq!(config.columns.name, "Name");
        assert_eq!(config.columns.code, "Common\nCode");
        assert_eq!(config.columns.suffix, "Symbol");
        assert_eq!(config.aliases.len(), 2);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GeneratorConfig = toml::from_str(
            r#"
sheet_name = "Annex I"

[columns]
suffix = "Sym"
"#,
        )
        .unwrap();

        assert_eq!(config.sheet_name, "Annex I");
        assert_eq!(config.columns.name, "Name");
        assert_eq!(config.columns.code, "Common\nCode");
        assert_eq!(config.columns.suffix, "Sym");
        assert_eq!(config.aliases, default_aliases());
    }

    #[test]
    fn test_explicit_empty_aliases() {
        let config: GeneratorConfig = toml::from_str("aliases = []").unwrap();
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_load_from_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.toml");
        std::fs::write(&path, "sheet_name = 3").unwrap();

        let err = GeneratorConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref p, _) if p == &path));

        let missing = GeneratorConfig::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_, _)));
    }
}
