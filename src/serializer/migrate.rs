//! Schema migrations over raw JSON.
//!
//! Each step lifts a document exactly one version. `migrate` chains the steps
//! from the detected version up to the current one.

#[cfg(test)]
#[path = "migrate_test.rs"]
mod migrate_test;

use serde_json::{Map, Value, json};

use super::SerializerError;
use crate::consts;

/// Schema version of `doc`.
///
/// An explicit `version` wins. Without one, a `diagrams` array marks
/// version 2 and anything else is read as version 1.
///
/// # Errors
///
/// Returns [`SerializerError::Malformed`] when the root is not an object or
/// the version is not a non-negative integer.
pub fn detect_version(doc: &Value) -> Result<u64, SerializerError> {
    let root = as_object(doc, "document root")?;
    if let Some(version) = root.get("version") {
        return version.as_u64().ok_or_else(|| SerializerError::Malformed(format!("invalid version: {version}")));
    }
    Ok(if root.contains_key("diagrams") { 2 } else { 1 })
}

/// Lift `doc` to the current schema, one version step at a time.
///
/// # Errors
///
/// Returns [`SerializerError::UnsupportedVersion`] for versions outside
/// `1..=CURRENT_SCHEMA_VERSION` and whatever the individual steps reject.
pub fn migrate(doc: &Value) -> Result<Value, SerializerError> {
    let mut version = detect_version(doc)?;
    if version == 0 || version > consts::CURRENT_SCHEMA_VERSION {
        return Err(SerializerError::UnsupportedVersion(version));
    }
    let mut current = doc.clone();
    while version < consts::CURRENT_SCHEMA_VERSION {
        current = match version {
            1 => v1_to_v2(&current)?,
            2 => v2_to_v3(&current)?,
            other => return Err(SerializerError::UnsupportedVersion(other)),
        };
        tracing::debug!(from = version, to = version + 1, "document schema migrated");
        version += 1;
    }
    Ok(current)
}

/// Wrap the single implicit diagram of a version 1 document.
///
/// # Errors
///
/// Returns [`SerializerError::MissingField`] without `items` or `rootIds`.
pub fn v1_to_v2(doc: &Value) -> Result<Value, SerializerError> {
    let root = as_object(doc, "document root")?;
    let items = root.get("items").ok_or(SerializerError::MissingField("items"))?;
    let root_ids = root.get("rootIds").ok_or(SerializerError::MissingField("rootIds"))?;

    let mut migrated = Map::new();
    migrated.insert("version".into(), json!(2));
    if let Some(size) = root.get("size") {
        migrated.insert("size".into(), size.clone());
    }
    migrated.insert(
        "diagrams".into(),
        json!([{ "id": consts::IMPLICIT_DIAGRAM_ID, "items": items, "rootIds": root_ids }]),
    );
    Ok(Value::Object(migrated))
}

/// Turn item maps into arrays, `rootIds` into `order` and flatten transforms.
///
/// # Errors
///
/// Returns [`SerializerError::MissingField`] for diagrams without `id`,
/// `items` or `rootIds` and for incomplete transforms.
pub fn v2_to_v3(doc: &Value) -> Result<Value, SerializerError> {
    let root = as_object(doc, "document root")?;
    let diagrams = root.get("diagrams").and_then(Value::as_array).ok_or(SerializerError::MissingField("diagrams"))?;
    let diagrams = diagrams.iter().map(diagram_v2_to_v3).collect::<Result<Vec<_>, _>>()?;

    let mut migrated = root.clone();
    migrated.insert("version".into(), json!(3));
    migrated.insert("diagrams".into(), Value::Array(diagrams));
    migrated
        .entry("size")
        .or_insert_with(|| json!({ "x": consts::DEFAULT_CANVAS_WIDTH, "y": consts::DEFAULT_CANVAS_HEIGHT }));
    Ok(Value::Object(migrated))
}

fn diagram_v2_to_v3(diagram: &Value) -> Result<Value, SerializerError> {
    let diagram = as_object(diagram, "diagram")?;
    let id = diagram.get("id").ok_or(SerializerError::MissingField("id"))?;
    let items = diagram.get("items").ok_or(SerializerError::MissingField("items"))?;
    let items = as_object(items, "items")?;
    let order = diagram.get("rootIds").ok_or(SerializerError::MissingField("rootIds"))?;

    let items = items.iter().map(|(key, item)| item_v2_to_v3(key, item)).collect::<Result<Vec<_>, _>>()?;

    let mut migrated = Map::new();
    migrated.insert("id".into(), id.clone());
    if let Some(title) = diagram.get("title") {
        migrated.insert("title".into(), title.clone());
    }
    migrated.insert("items".into(), Value::Array(items));
    migrated.insert("order".into(), order.clone());
    Ok(Value::Object(migrated))
}

fn item_v2_to_v3(key: &str, item: &Value) -> Result<Value, SerializerError> {
    let mut item = as_object(item, "item")?.clone();
    item.entry("id").or_insert_with(|| Value::from(key));
    if let Some(transform) = item.remove("transform") {
        item.insert("transform".into(), flatten_transform(&transform)?);
    }
    Ok(Value::Object(item))
}

/// `{position: {x, y}, size: {x, y}, rotation}` to `{x, y, w, h, r}`.
fn flatten_transform(transform: &Value) -> Result<Value, SerializerError> {
    let component = |path: &'static str, outer: &str, inner: &str| {
        transform
            .get(outer)
            .and_then(|value| value.get(inner))
            .and_then(Value::as_f64)
            .ok_or(SerializerError::MissingField(path))
    };
    let x = component("transform.position.x", "position", "x")?;
    let y = component("transform.position.y", "position", "y")?;
    let w = component("transform.size.x", "size", "x")?;
    let h = component("transform.size.y", "size", "y")?;
    let r = transform.get("rotation").and_then(Value::as_f64).unwrap_or(0.0);
    Ok(json!({ "x": x, "y": y, "w": w, "h": h, "r": r }))
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, SerializerError> {
    value.as_object().ok_or_else(|| SerializerError::Malformed(format!("{what} must be an object")))
}
