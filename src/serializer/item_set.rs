//! Clipboard payloads: item sets as JSON and id remapping for paste.

#[cfg(test)]
#[path = "item_set_test.rs"]
mod item_set_test;

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::SerializerError;
use super::dto::{ItemDto, ItemSetDto};
use crate::model::{DiagramItem, DiagramItemSet, new_id};

/// Clipboard JSON for an item set: `{"items": [...]}` in closure order.
///
/// # Errors
///
/// Returns [`SerializerError::Json`] if an appearance value cannot be encoded.
pub fn serialize_set(set: &DiagramItemSet) -> Result<Value, SerializerError> {
    let dto = ItemSetDto { items: set.all_items().iter().map(ItemDto::from).collect() };
    Ok(serde_json::to_value(dto)?)
}

/// Read a clipboard payload back into an item set.
///
/// # Errors
///
/// Returns [`SerializerError::Json`] for payloads that do not decode and
/// [`SerializerError::Malformed`] when a group references an item outside the set.
pub fn deserialize_set(json: &Value) -> Result<DiagramItemSet, SerializerError> {
    let dto = ItemSetDto::deserialize(json)?;
    let set = DiagramItemSet::from_items(dto.items.into_iter().map(DiagramItem::from));
    if !set.is_valid() {
        return Err(SerializerError::Malformed("item set references items outside the set".into()));
    }
    Ok(set)
}

/// Give every item in a clipboard payload a fresh id.
///
/// Group `childIds` are rewritten with the same mapping, so the structure and
/// child order survive. Unknown fields pass through untouched.
///
/// # Errors
///
/// Returns [`SerializerError::MissingField`] when `items` is absent or an item has no string `id`.
pub fn generate_new_ids(json: &Value) -> Result<Value, SerializerError> {
    let items = json.get("items").and_then(Value::as_array).ok_or(SerializerError::MissingField("items"))?;

    let mut mapping: HashMap<String, String> = HashMap::with_capacity(items.len());
    for item in items {
        let id = item.get("id").and_then(Value::as_str).ok_or(SerializerError::MissingField("id"))?;
        mapping.entry(id.to_owned()).or_insert_with(new_id);
    }

    let remapped: Vec<Value> = items.iter().map(|item| remap_item(item, &mapping)).collect();
    let mut out = json.clone();
    if let Some(root) = out.as_object_mut() {
        root.insert("items".into(), Value::Array(remapped));
    }
    Ok(out)
}

fn remap_item(item: &Value, mapping: &HashMap<String, String>) -> Value {
    let mut item = item.clone();
    let Some(fields) = item.as_object_mut() else {
        return item;
    };
    if let Some(Value::String(id)) = fields.get_mut("id") {
        remap_id(id, mapping);
    }
    if let Some(Value::Array(children)) = fields.get_mut("childIds") {
        for child in children {
            if let Value::String(id) = child {
                remap_id(id, mapping);
            }
        }
    }
    item
}

fn remap_id(id: &mut String, mapping: &HashMap<String, String>) {
    if let Some(fresh) = mapping.get(id.as_str()) {
        id.clone_from(fresh);
    }
}
