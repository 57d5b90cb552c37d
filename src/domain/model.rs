use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

/// A named air-filled anatomical space with a baseline gas volume.
///
/// Segments are built once at startup and never change afterwards; the
/// adjacency set records which spaces share an air path but does not
/// influence the volume computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    name: String,
    initial_volume: f64,
    compressible: bool,
    connections: BTreeSet<String>,
}

impl Segment {
    pub fn new(name: impl Into<String>, initial_volume: f64, compressible: bool) -> Self {
        Self {
            name: name.into(),
            initial_volume,
            compressible,
            connections: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_volume(&self) -> f64 {
        self.initial_volume
    }

    pub fn compressible(&self) -> bool {
        self.compressible
    }

    pub fn connections(&self) -> &BTreeSet<String> {
        &self.connections
    }

    pub(crate) fn add_connection(&mut self, other: &str) {
        self.connections.insert(other.to_string());
    }

    pub(crate) fn set_initial_volume(&mut self, volume: f64) {
        self.initial_volume = volume;
    }
}

/// Snapshot of per-segment volumes at one absolute pressure (1.0 = sea level).
///
/// Produced by [`Model::volumes_at_pressure`](crate::core::solver::Model) and
/// read-only afterwards. The map covers exactly the segments of the
/// originating model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkpoint {
    pub volumes: BTreeMap<String, f64>,
    pub pressure: f64,
}

impl Checkpoint {
    pub fn new(volumes: BTreeMap<String, f64>, pressure: f64) -> Self {
        Self { volumes, pressure }
    }

    pub fn total_volume(&self) -> f64 {
        self.volumes.values().sum()
    }

    /// Renders the human-readable block: pressure and total on the first
    /// line, one `name: volume` line per segment in lexicographic order,
    /// then a blank separator line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "At {} (total {:.2})", self.pressure, self.total_volume());
        for (name, volume) in &self.volumes {
            let _ = writeln!(out, "{}: {:.2}", name, volume);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_connections_start_empty() {
        let lungs = Segment::new("lungs", 5000.0, true);
        assert!(lungs.connections().is_empty());
        assert_eq!(lungs.name(), "lungs");
        assert!(lungs.compressible());
    }

    #[test]
    fn test_render_sorts_names_and_rounds() {
        let mut volumes = BTreeMap::new();
        volumes.insert("sinuses".to_string(), 90.0);
        volumes.insert("lungs".to_string(), 2456.666_666_7);
        let checkpoint = Checkpoint::new(volumes, 2.0);

        assert_eq!(
            checkpoint.render(),
            "At 2 (total 2546.67)\nlungs: 2456.67\nsinuses: 90.00\n\n"
        );
    }

    #[test]
    fn test_render_whole_pressure_has_no_decimal_point() {
        let checkpoint = Checkpoint::new(BTreeMap::new(), 1.0);
        assert!(checkpoint.render().starts_with("At 1 (total 0.00)"));
    }

    #[test]
    fn test_render_fractional_pressure() {
        let checkpoint = Checkpoint::new(BTreeMap::new(), 2.5);
        assert!(checkpoint.render().starts_with("At 2.5 (total 0.00)"));
    }
}
