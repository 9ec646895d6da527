// crates/splice_section/src/writer.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole target page into memory.
pub fn read_target<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read target file {}", path.display()))
}

/// Overwrites the target page in place. No backup is taken and the write is
/// not atomic.
pub fn write_target<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, contents)
        .with_context(|| format!("Failed to write target file {}", path.display()))?;
    log::info!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
