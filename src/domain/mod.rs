pub mod model;

pub use model::{Checkpoint, Segment};
