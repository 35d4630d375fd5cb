//! Structural consolidation of drifted `byVolume` groups.
//!
//! Some locale files carry a stray duplicate of the `byVolume` group,
//! holding only the `concreteByVolume` label, at a different structural
//! position than the canonical `concrete.byVolume` group. This module
//! removes the stray, reuses its translated label, moves a root-level
//! group under `concrete` when the canonical position is empty, and
//! injects the dimension-label keys at the start of the group.
//!
//! All of this happens on the parsed tree. Because the document map
//! preserves insertion order, the injected keys land at the start of the
//! group and every other key keeps its position, without byte-level
//! splicing of the file.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

pub const GROUP_KEY: &str = "byVolume";
pub const PARENT_KEY: &str = "concrete";
pub const TRANSLATION_KEY: &str = "concreteByVolume";
pub const DEFAULT_TRANSLATION: &str = "Concrete by Volume";

/// A key whose presence marks a group as already consolidated.
const GUARD_KEY: &str = "length_L";

/// Dimension labels injected at the start of the canonical group,
/// in this order.
pub const DIMENSION_LABELS: &[(&str, &str)] = &[
    ("unit", "Unit"),
    ("length_L", "Length - L"),
    ("width_W", "Width - W"),
    ("depth_D", "Depth - D"),
    ("thickness_T", "Thickness - T"),
    ("height_H", "Height - H"),
    ("rise_R", "Rise - R"),
    ("tread_T", "Tread - T"),
    ("baseDepth_D1", "Base Depth - D1"),
    ("midDepth_D2", "Mid Depth - D2"),
    ("topDepth_D3", "Top Depth - D3"),
    ("length_L1", "Length - L1"),
    ("length_L2", "Length - L2"),
    ("length_L3", "Length - L3"),
    ("totalSteps_N", "Total Steps - N"),
    ("depth_D3", "Depth - D3"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsolidateOutcome {
    /// The group was consolidated; `added` keys were injected and
    /// `moved` is true when a root-level group was relocated under
    /// `concrete`.
    Updated { added: usize, moved: bool },
    /// The guard key was already present; nothing to do.
    AlreadyConsolidated,
}

/// Consolidate a document in place.
///
/// On error the document may have been partially mutated; callers must
/// not write it back. The error message distinguishes schema-shape
/// mismatches (a non-object where an object is required, or the group
/// present at two positions) from a missing group.
pub fn consolidate_document(root: &mut Map<String, Value>) -> Result<ConsolidateOutcome> {
    let captured = take_stray_translation(root);
    let moved = adopt_root_group(root)?;

    let group = canonical_group_mut(root)?;
    if group.contains_key(GUARD_KEY) {
        return Ok(ConsolidateOutcome::AlreadyConsolidated);
    }

    let added = inject_labels(group, captured);
    Ok(ConsolidateOutcome::Updated { added, moved })
}

/// Remove a stray `byVolume` duplicate and capture its translation.
///
/// A stray is a `byVolume` object holding exactly the one key
/// `concreteByVolume`. The source data is inconsistent about where the
/// group lives, so both the document root and `concrete` are checked.
fn take_stray_translation(root: &mut Map<String, Value>) -> Option<String> {
    if let Some(value) = stray_value(root.get(GROUP_KEY)) {
        root.shift_remove(GROUP_KEY);
        return Some(value);
    }
    if let Some(Value::Object(parent)) = root.get_mut(PARENT_KEY) {
        if let Some(value) = stray_value(parent.get(GROUP_KEY)) {
            parent.shift_remove(GROUP_KEY);
            return Some(value);
        }
    }
    None
}

fn stray_value(candidate: Option<&Value>) -> Option<String> {
    let group = candidate?.as_object()?;
    if group.len() == 1 {
        group.get(TRANSLATION_KEY)?.as_str().map(str::to_string)
    } else {
        None
    }
}

/// Move a root-level `byVolume` group under `concrete`.
///
/// Returns true if a group was moved. Finding the group at both
/// positions, or a non-object in the way, is a schema-shape error.
fn adopt_root_group(root: &mut Map<String, Value>) -> Result<bool> {
    if !root.contains_key(GROUP_KEY) {
        return Ok(false);
    }

    match root.get(PARENT_KEY) {
        Some(Value::Object(parent)) if parent.contains_key(GROUP_KEY) => bail!(
            "Schema mismatch: '{}' found both at the root and under '{}'",
            GROUP_KEY,
            PARENT_KEY
        ),
        Some(Value::Object(_)) | None => {}
        Some(_) => bail!("Schema mismatch: '{}' is not an object", PARENT_KEY),
    }

    let Some(group) = root.shift_remove(GROUP_KEY) else {
        return Ok(false);
    };
    if !group.is_object() {
        bail!("Schema mismatch: root '{}' is not an object", GROUP_KEY);
    }

    let parent = root
        .entry(PARENT_KEY.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(map) = parent {
        map.insert(GROUP_KEY.to_string(), group);
    }

    Ok(true)
}

fn canonical_group_mut(root: &mut Map<String, Value>) -> Result<&mut Map<String, Value>> {
    let parent = match root.get_mut(PARENT_KEY) {
        Some(Value::Object(map)) => map,
        Some(_) => bail!("Schema mismatch: '{}' is not an object", PARENT_KEY),
        None => bail!("No '{}' block found", GROUP_KEY),
    };
    match parent.get_mut(GROUP_KEY) {
        Some(Value::Object(map)) => Ok(map),
        Some(_) => bail!(
            "Schema mismatch: '{}.{}' is not an object",
            PARENT_KEY,
            GROUP_KEY
        ),
        None => bail!("No '{}' block found", GROUP_KEY),
    }
}

/// Prepend the translation label and dimension labels to a group.
///
/// Keys the group already has are left alone, at their original
/// position. Returns the number of keys injected.
fn inject_labels(group: &mut Map<String, Value>, captured: Option<String>) -> usize {
    let existing = std::mem::take(group);
    let mut added = 0;

    if !existing.contains_key(TRANSLATION_KEY) {
        let label = captured.unwrap_or_else(|| DEFAULT_TRANSLATION.to_string());
        group.insert(TRANSLATION_KEY.to_string(), Value::String(label));
        added += 1;
    }

    for (key, label) in DIMENSION_LABELS {
        if !existing.contains_key(*key) {
            group.insert((*key).to_string(), Value::String((*label).to_string()));
            added += 1;
        }
    }

    group.extend(existing);
    added
}
