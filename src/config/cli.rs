use crate::config::DEFAULT_PRESSURES;
use crate::core::dive;
use crate::core::report::OutputFormat;
use crate::utils::error::{BaroError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "baro-model")]
#[command(about = "Boyle's-law gas redistribution across connected anatomical air spaces")]
pub struct CliConfig {
    /// TOML model definition; omit to use the built-in airway model
    #[arg(long)]
    pub model: Option<String>,

    /// Target absolute pressures in atm, e.g. --pressures 1,2,3,20
    #[arg(long, value_delimiter = ',')]
    pub pressures: Vec<f64>,

    /// Seawater depths in m, converted to pressure (10 m per atm);
    /// takes precedence over --pressures
    #[arg(long, value_delimiter = ',')]
    pub depths: Vec<f64>,

    /// Baseline volume override for one segment, e.g. --volume lungs=4500
    #[arg(long = "volume", value_name = "NAME=ML")]
    pub volumes: Vec<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn volume_overrides(&self) -> Result<Vec<(String, f64)>> {
        self.volumes
            .iter()
            .map(|pair| validation::parse_key_value_pair("volume", pair))
            .collect()
    }

    /// Resolves the pressure sweep: `--depths` wins over `--pressures`,
    /// which wins over pressures listed in the model file, which wins over
    /// the built-in `[1, 2, 3, 20]`.
    pub fn sweep_pressures(&self, file_pressures: Option<&[f64]>) -> Vec<f64> {
        if !self.depths.is_empty() {
            return self.depths.iter().map(|d| dive::pressure_at_depth(*d)).collect();
        }
        if !self.pressures.is_empty() {
            return self.pressures.clone();
        }
        match file_pressures {
            Some(pressures) if !pressures.is_empty() => pressures.to_vec(),
            _ => DEFAULT_PRESSURES.to_vec(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.model {
            validation::validate_path("model", path)?;
        }
        for pressure in &self.pressures {
            validation::validate_positive_pressure("pressures", *pressure)?;
        }
        for depth in &self.depths {
            if !depth.is_finite() {
                return Err(BaroError::InvalidConfigValueError {
                    field: "depths".to_string(),
                    value: depth.to_string(),
                    reason: "Depth must be a finite number of meters".to_string(),
                });
            }
        }
        for pair in &self.volumes {
            validation::parse_key_value_pair("volume", pair)?;
        }
        Ok(())
    }
}
