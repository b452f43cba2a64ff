//! JSON rendering of the prepared district table.
//!
//! Produces `{ "<district>": { "tagline": ..., ... } }`, the shape intended
//! for merging into `data.json`. Nothing here touches the filesystem; the
//! merge itself is left to whoever consumes this value.

use serde_json::{Map, Value};

use crate::districts::districts;
use crate::error::Result;

/// The whole table as a JSON object keyed by district name.
pub fn prepared_value() -> Result<Value> {
    let mut out = Map::new();
    for record in districts() {
        out.insert(record.name.to_string(), serde_json::to_value(record)?);
    }
    tracing::debug!("Rendered {} district records", out.len());
    Ok(Value::Object(out))
}

/// Pretty-printed JSON text of [`prepared_value`].
pub fn prepared_json_pretty() -> Result<String> {
    let value = prepared_value()?;
    Ok(serde_json::to_string_pretty(&value)?)
}
