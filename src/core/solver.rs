use crate::domain::model::{Checkpoint, Segment};
use crate::utils::error::{BaroError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Residual volume below this threshold is treated as zero when deciding
/// whether an all-incompressible model is being asked to absorb a change.
const RESIDUAL_EPSILON: f64 = 1e-9;

/// An ordered collection of segments plus the Boyle's-law redistribution
/// computation.
///
/// The computation treats all compressible segments as one pool: the whole
/// system's gas volume scales with pressure, incompressible segments keep
/// their baseline volume, and whatever is left is split among compressible
/// segments in proportion to their baseline volumes. Adjacency never enters
/// into it.
#[derive(Debug, Clone)]
pub struct Model {
    segments: Vec<Segment>,
}

impl Model {
    /// Builds a model, rejecting duplicate names and non-positive volumes
    /// up front rather than letting them surface later as NaN volumes.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for segment in &segments {
            if !segment.initial_volume().is_finite() || segment.initial_volume() <= 0.0 {
                return Err(BaroError::InvalidVolume {
                    name: segment.name().to_string(),
                    value: segment.initial_volume(),
                });
            }
            if !seen.insert(segment.name().to_string()) {
                return Err(BaroError::DuplicateSegment {
                    name: segment.name().to_string(),
                });
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name() == name)
    }

    /// Records a symmetric adjacency edge between two segments. Duplicate
    /// edges and self-loops are idempotent. The edge is descriptive only.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<()> {
        if self.segment(a).is_none() {
            return Err(BaroError::UnknownSegment { name: a.to_string() });
        }
        if self.segment(b).is_none() {
            return Err(BaroError::UnknownSegment { name: b.to_string() });
        }
        for segment in &mut self.segments {
            if segment.name() == a {
                segment.add_connection(b);
            }
            if segment.name() == b {
                segment.add_connection(a);
            }
        }
        Ok(())
    }

    /// All segments at their baseline volume, at sea-level pressure.
    pub fn initial_checkpoint(&self) -> Checkpoint {
        let volumes = self
            .segments
            .iter()
            .map(|s| (s.name().to_string(), s.initial_volume()))
            .collect();
        Checkpoint::new(volumes, 1.0)
    }

    /// Computes the per-segment volumes at `pressure`, starting from
    /// `checkpoint` (or the initial checkpoint when omitted).
    ///
    /// The starting checkpoint contributes only its total volume and
    /// pressure; partitioning and the proportional split always read the
    /// segments' baseline volumes. Chaining checkpoints therefore does not
    /// compound: evaluating at P from any intermediate checkpoint gives the
    /// same result as evaluating at P from the initial one.
    pub fn volumes_at_pressure(
        &self,
        pressure: f64,
        checkpoint: Option<&Checkpoint>,
    ) -> Result<Checkpoint> {
        if !(pressure > 0.0) {
            return Err(BaroError::InvalidPressure { value: pressure });
        }

        let initial;
        let start = match checkpoint {
            Some(cp) => {
                self.check_coverage(cp)?;
                if !(cp.pressure > 0.0) {
                    return Err(BaroError::InvalidPressure { value: cp.pressure });
                }
                cp
            }
            None => {
                initial = self.initial_checkpoint();
                &initial
            }
        };

        let total_volume = start.total_volume();
        let compression_rate = pressure / start.pressure;
        let new_volume = total_volume / compression_rate;

        let mut volumes = BTreeMap::new();
        let mut volume_left = new_volume;
        for segment in self.segments.iter().filter(|s| !s.compressible()) {
            volumes.insert(segment.name().to_string(), segment.initial_volume());
            volume_left -= segment.initial_volume();
        }

        let total_compressible: f64 = self
            .segments
            .iter()
            .filter(|s| s.compressible())
            .map(|s| s.initial_volume())
            .sum();

        if total_compressible > 0.0 {
            for segment in self.segments.iter().filter(|s| s.compressible()) {
                volumes.insert(
                    segment.name().to_string(),
                    volume_left * segment.initial_volume() / total_compressible,
                );
            }
        } else if volume_left.abs() > RESIDUAL_EPSILON {
            return Err(BaroError::DegenerateModel { volume_left });
        }

        Ok(Checkpoint::new(volumes, pressure))
    }

    /// A checkpoint is usable as a starting point only if its keys are
    /// exactly the model's segment names.
    fn check_coverage(&self, checkpoint: &Checkpoint) -> Result<()> {
        for segment in &self.segments {
            if !checkpoint.volumes.contains_key(segment.name()) {
                return Err(BaroError::IncompleteCheckpoint {
                    segment: segment.name().to_string(),
                });
            }
        }
        for name in checkpoint.volumes.keys() {
            if self.segment(name).is_none() {
                return Err(BaroError::UnknownSegment { name: name.clone() });
            }
        }
        Ok(())
    }
}
