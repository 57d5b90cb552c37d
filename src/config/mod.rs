pub mod cli;
pub mod toml_config;

use crate::core::solver::Model;
use crate::domain::model::Segment;
use crate::utils::error::{BaroError, Result};
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Sweep used when neither the CLI nor a model file names one.
pub const DEFAULT_PRESSURES: [f64; 4] = [1.0, 2.0, 3.0, 20.0];

/// The built-in airway model: lungs and nasopharynx compressible, the
/// bone-bounded sinuses and middle ear fixed.
pub fn default_segments() -> Vec<Segment> {
    vec![
        Segment::new("lungs", 5000.0, true),
        Segment::new("nasopharynx", 250.0, true),
        Segment::new("sinuses", 90.0, false),
        Segment::new("middle_ear", 1.0, false),
    ]
}

pub fn default_connections() -> Vec<(String, String)> {
    vec![
        ("lungs".to_string(), "nasopharynx".to_string()),
        ("nasopharynx".to_string(), "sinuses".to_string()),
        ("nasopharynx".to_string(), "middle_ear".to_string()),
    ]
}

/// Assembles the model and pressure sweep from CLI options: model file or
/// built-in defaults, then `--volume` overrides, then connections.
pub fn build_model(config: &CliConfig) -> Result<(Model, Vec<f64>)> {
    let (mut segments, connections, file_pressures) = match &config.model {
        Some(path) => {
            tracing::debug!("Loading model definition from {}", path);
            let file = TomlConfig::from_file(path)?;
            let segments = file
                .segments
                .iter()
                .map(|s| Segment::new(s.name.clone(), s.initial_volume, s.compressible))
                .collect();
            (segments, file.connections.clone(), file.pressures.clone())
        }
        None => (default_segments(), default_connections(), None),
    };

    for (name, volume) in config.volume_overrides()? {
        let segment = segments
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| BaroError::UnknownSegment { name: name.clone() })?;
        segment.set_initial_volume(volume);
    }

    let mut model = Model::new(segments)?;
    for (a, b) in &connections {
        model.connect(a, b)?;
    }

    let sweep = config.sweep_pressures(file_pressures.as_deref());
    Ok((model, sweep))
}
