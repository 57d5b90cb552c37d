pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{build_model, CliConfig, TomlConfig};
pub use crate::core::{report::OutputFormat, solver::Model};
pub use crate::domain::model::{Checkpoint, Segment};
pub use crate::utils::error::{BaroError, Result};
