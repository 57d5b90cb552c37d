use crate::domain::model::Checkpoint;
use crate::utils::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Writes one checkpoint in the selected format. Text is the block layout
/// (pressure and total, then sorted per-segment lines, then a blank line);
/// JSON is one object per line.
pub fn write_checkpoint<W: Write>(
    out: &mut W,
    checkpoint: &Checkpoint,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(checkpoint.render().as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, checkpoint)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
