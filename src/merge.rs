//! Key propagation merge.
//!
//! Fills gaps in a target locale document from a reference document's
//! key group. The merge is one-way and additive: keys missing from the
//! target are copied from the reference, keys already present are never
//! overwritten, even if their value is stale.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

/// Look up a nested object group by a path of intermediate keys.
///
/// Returns `None` if any level is missing or holds a non-object value.
pub fn lookup_group<'a>(
    document: &'a Map<String, Value>,
    path: &[&str],
) -> Option<&'a Map<String, Value>> {
    let mut current = document;
    for key in path {
        current = current.get(*key)?.as_object()?;
    }
    Some(current)
}

/// Copy keys missing from `document`'s group at `path` out of `reference`.
///
/// Intermediate levels along `path` are created as empty objects when
/// absent. An intermediate key that already holds a non-object value is
/// an error; it is never replaced.
///
/// Returns the names of the keys that were added, in reference order.
/// An empty result means the document is already complete and does not
/// need to be written back.
pub fn propagate_keys(
    reference: &Map<String, Value>,
    document: &mut Map<String, Value>,
    path: &[&str],
) -> Result<Vec<String>> {
    let group = group_at_path_mut(document, path)?;

    let mut added = Vec::new();
    for (key, value) in reference {
        if !group.contains_key(key) {
            group.insert(key.clone(), value.clone());
            added.push(key.clone());
        }
    }

    Ok(added)
}

/// Walk down to the group at `path`, creating empty objects along the
/// way.
fn group_at_path_mut<'a>(
    map: &'a mut Map<String, Value>,
    path: &[&str],
) -> Result<&'a mut Map<String, Value>> {
    let Some((first, rest)) = path.split_first() else {
        return Ok(map);
    };

    let level = map
        .entry(first.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    match level {
        Value::Object(inner) => group_at_path_mut(inner, rest),
        other => bail!(
            "Expected '{}' to be an object, found {}",
            first,
            value_kind(other)
        ),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
