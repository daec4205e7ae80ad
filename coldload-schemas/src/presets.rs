//! Embedded preset documents
//!
//! Every `presets/*.json` file is compiled into the binary and parsed once,
//! on first use, into the global [`PRESETS`] registry. A preset is named
//! after its file stem (`freezer-default.json` is `freezer-default`).
//!
//! Preset file layout:
//!
//! ```json
//! {
//!   "description": "Produce store at 2 °C",
//!   "document": { "kind": "cold-room", "product": { "name": "Apples" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::{CalculationRequest, SchemaError};

static PRESET_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/presets");

/// A named, ready-to-run calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub request: CalculationRequest,
}

#[derive(Deserialize)]
struct PresetFile {
    #[serde(default)]
    description: String,
    document: CalculationRequest,
}

impl Preset {
    /// Parse a preset file body
    pub fn parse(name: &str, json: &str) -> Result<Self, SchemaError> {
        let file: PresetFile = serde_json::from_str(json)?;
        file.document.validate()?;
        Ok(Self {
            name: name.to_string(),
            description: file.description,
            request: file.document,
        })
    }
}

/// Presets indexed by name
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Preset>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the presets compiled into the binary
    ///
    /// A preset that fails to parse is skipped with a warning.
    pub fn embedded() -> Self {
        let mut registry = Self::new();
        for file in PRESET_DIR.files() {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(text) = file.contents_utf8() else {
                log::warn!("Preset {} is not UTF-8, skipping", name);
                continue;
            };
            match Preset::parse(name, text) {
                Ok(preset) => registry.register(preset),
                Err(e) => log::warn!("Skipping preset {}: {}", name, e),
            }
        }
        registry
    }

    /// Load every `*.json` preset in a directory
    pub fn from_dir(dir: &Path) -> Result<Self, SchemaError> {
        let io_err = |source| SchemaError::Io {
            path: dir.display().to_string(),
            source,
        };
        let mut registry = Self::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(&path).map_err(|source| SchemaError::Io {
                path: path.display().to_string(),
                source,
            })?;
            registry.register(Preset::parse(name, &text)?);
        }
        Ok(registry)
    }

    /// Add or replace a preset
    pub fn register(&mut self, preset: Preset) {
        self.presets.insert(preset.name.clone(), preset);
    }

    pub fn get(&self, name: &str) -> Result<&Preset, SchemaError> {
        self.presets
            .get(name.trim())
            .ok_or_else(|| SchemaError::UnknownPreset(name.to_string()))
    }

    /// Preset names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.values()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

lazy_static::lazy_static! {
    /// Presets compiled into the binary
    pub static ref PRESETS: PresetRegistry = PresetRegistry::embedded();
}

#[cfg(test)]
mod tests {
    use super::*;
    use coldload_core::rooms::calculate;
    use coldload_core::RoomKind;

    #[test]
    fn every_kind_has_a_default_preset() {
        for kind in RoomKind::ALL {
            let name = format!("{}-default", kind.id());
            let preset = PRESETS.get(&name).unwrap();
            assert_eq!(preset.request, CalculationRequest::defaults(kind));
        }
    }

    #[test]
    fn all_embedded_presets_calculate() {
        assert!(PRESETS.len() >= 6);
        for preset in PRESETS.iter() {
            assert!(!preset.description.is_empty(), "{}", preset.name);
            let report = calculate(&preset.request.into_input()).unwrap();
            assert!(report.summary().final_kw > 0.0, "{}", preset.name);
        }
    }

    #[test]
    fn names_are_sorted() {
        let names: Vec<_> = PRESETS.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(PRESETS.get("igloo"), Err(SchemaError::UnknownPreset(_))));
    }

    #[test]
    fn missing_document_is_an_error() {
        assert!(Preset::parse("broken", r#"{"description": "x"}"#).is_err());
    }
}
