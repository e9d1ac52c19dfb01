use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, IoStep, Result};
use crate::system::snapshot::SystemSnapshot;

/// Default file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "system-info.json";

/// Writes the snapshot as two-space indented JSON, replacing any existing file.
pub fn save(snapshot: &SystemSnapshot, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::io(IoStep::Create, path, e))?;

    let json = serde_json::to_vec_pretty(snapshot)?;
    file.write_all(&json)
        .and_then(|()| file.flush())
        .map_err(|e| Error::io(IoStep::Write, path, e))?;

    tracing::info!(path = %path.display(), "saved snapshot");
    Ok(())
}

pub fn load(path: &Path) -> Result<SystemSnapshot> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(IoStep::Read, path, e))?;
    Ok(serde_json::from_str(&contents)?)
}
