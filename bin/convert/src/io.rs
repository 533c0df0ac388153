//! JSON file I/O for the drivers. The core encoding layer never touches
//! the filesystem; every read and write lives here.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read input file {}", path.display()))?;
    serde_json::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse input file {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value).wrap_err("failed to serialize output")?;
    std::fs::write(path, raw)
        .wrap_err_with(|| format!("failed to write output file {}", path.display()))?;
    info!(path = %path.display(), "wrote circuit input");
    Ok(())
}
