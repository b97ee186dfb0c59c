use anyhow::{Result, anyhow};
use serde_json::Value;

use crate::model::ManifestEntry;

/// Parse a manifest JSON string into the list of templates to compile.
///
/// The manifest is expected to contain a top-level `templates` array whose
/// entries each carry
///   • "class" – name of the generated type
///   • "path"  – template file, relative to the manifest
///
/// A missing array or a malformed entry is reported as an error.
pub fn load_from_json(json: &str) -> Result<Vec<ManifestEntry>> {
    // Grab the entire file as a dynamic value first.
    let root: Value = serde_json::from_str(json)?;

    let templates = root
        .get("templates")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow!("manifest has no `templates` array"))?;

    println!("Found {} template entries", templates.len());

    let mut entries = Vec::<ManifestEntry>::with_capacity(templates.len());

    for (i, value) in templates.iter().enumerate() {
        let entry: ManifestEntry = serde_json::from_value(value.clone())
            .map_err(|e| anyhow!("template entry {} is malformed: {}", i, e))?;

        if entry.class.is_empty() {
            return Err(anyhow!("template entry {} has an empty `class`", i));
        }

        entries.push(entry);
    }

    Ok(entries)
}
