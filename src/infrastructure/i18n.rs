//! Translation catalog loaded from a host language file
//!
//! Language files are nested JSON objects; keys are addressed by their dotted path,
//! e.g. `{"ATTRIBUTE": {"STRENGTH": "Strength"}}` answers `ATTRIBUTE.STRENGTH`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::application::ports::outbound::TranslationPort;

#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read language file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid language file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(raw)?;
        let mut entries = HashMap::new();
        flatten(&mut entries, String::new(), &root);
        tracing::info!(entries = entries.len(), "Loaded translation catalog");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(entries, path, child);
            }
        }
        Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        // Numbers and flags are not display strings
        _ => {}
    }
}

impl TranslationPort for CatalogTranslator {
    fn i18n(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_and_flat_keys_resolve() {
        let catalog = CatalogTranslator::from_json(
            r#"{
                "ATTRIBUTE": { "STRENGTH": "Strength" },
                "tokenActionHud.utility": "Utility",
                "COMBAT": { "InitiativeRoll": "Roll Initiative", "Round": 3 }
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.i18n("ATTRIBUTE.STRENGTH"), "Strength");
        assert_eq!(catalog.i18n("tokenActionHud.utility"), "Utility");
        assert_eq!(catalog.i18n("COMBAT.InitiativeRoll"), "Roll Initiative");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = CatalogTranslator::default();
        assert_eq!(catalog.i18n("SKILL.MIGHT"), "SKILL.MIGHT");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(CatalogTranslator::from_json("{ not json").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = CatalogTranslator::from_file("/nonexistent/lang/en.json").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read language file"));
    }
}
