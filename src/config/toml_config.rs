use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A model definition file:
///
/// ```toml
/// connections = [["lungs", "nasopharynx"]]
/// pressures = [1.0, 2.0]
///
/// [model]
/// name = "airways"
///
/// [[segments]]
/// name = "lungs"
/// initial_volume = 5000.0
/// compressible = true
/// ```
///
/// Top-level keys come before the first table header, per TOML rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub model: Option<ModelMeta>,
    #[serde(default)]
    pub segments: Vec<SegmentConfig>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
    pub pressures: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub name: String,
    pub initial_volume: f64,
    pub compressible: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for segment in &self.segments {
            validation::validate_non_empty_string("segments.name", &segment.name)?;
            validation::validate_positive_volume("segments.initial_volume", segment.initial_volume)?;
        }
        for (from, to) in &self.connections {
            validation::validate_non_empty_string("connections", from)?;
            validation::validate_non_empty_string("connections", to)?;
        }
        if let Some(pressures) = &self.pressures {
            for pressure in pressures {
                validation::validate_positive_pressure("pressures", *pressure)?;
            }
        }
        Ok(())
    }
}
