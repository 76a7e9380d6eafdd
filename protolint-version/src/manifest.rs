use crate::error::{Result, VersionError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Set the `version` field of a JSON package manifest, keeping every other key in place
pub fn stamp_manifest(path: &Path, version: &str) -> Result<()> {
    let rendered = render_stamped(path, version)?;
    fs::write(path, rendered)?;
    Ok(())
}

/// Manifest contents with `version` replaced, without touching the file
pub fn render_stamped(path: &Path, version: &str) -> Result<String> {
    let manifest_error = |message: String| VersionError::Manifest {
        path: path.display().to_string(),
        message,
    };

    let content = fs::read_to_string(path)?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| manifest_error(e.to_string()))?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| manifest_error("top-level value is not an object".to_string()))?;
    fields.insert("version".to_string(), Value::String(version.to_string()));

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|e| manifest_error(e.to_string()))?;
    rendered.push('\n');
    Ok(rendered)
}
