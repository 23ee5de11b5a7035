//! Pitch data document parsing

use anyhow::Context;
use serde_json::Value;

use crate::pitch::types::{PitchCatalogMap, PitchParameters};

/// Parse a pitch data document: a JSON object of pitch type -> parameters.
///
/// The whole document is accepted or rejected. A single malformed record fails
/// the parse so no partial catalog ever reaches the simulation.
pub fn parse_pitch_catalog(body: &str) -> anyhow::Result<PitchCatalogMap> {
    let body = body.trim_start_matches('\u{feff}');
    let value: Value = serde_json::from_str(body).context("pitch data is not valid json")?;
    let Value::Object(entries) = value else {
        anyhow::bail!("expected json object keyed by pitch type");
    };
    if entries.is_empty() {
        anyhow::bail!("pitch data contains no pitch types");
    }

    let mut catalog = PitchCatalogMap::new();
    for (pitch_type, record) in entries {
        let key = pitch_type.trim();
        if key.is_empty() {
            anyhow::bail!("pitch data contains an empty pitch type key");
        }
        let params: PitchParameters = serde_json::from_value(record)
            .with_context(|| format!("invalid parameters for pitch type {}", key))?;
        if catalog.insert(key.to_string(), params).is_some() {
            anyhow::bail!("pitch type {} appears more than once", key);
        }
    }
    Ok(catalog)
}
