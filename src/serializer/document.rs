//! Whole-document save and load.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::HashSet;

use serde_json::Value;

use super::SerializerError;
use super::dto::{DiagramDto, DocumentDto, ItemDto};
use super::migrate::migrate;
use crate::collections::{ImmutableList, ImmutableMap, ImmutableSet};
use crate::consts;
use crate::geometry::Vec2;
use crate::model::{Diagram, DiagramContainer, DiagramId, DiagramItem, DiagramProps, EditorProps, EditorState};

/// Current-schema JSON for the whole document. Selections are not persisted.
///
/// # Errors
///
/// Returns [`SerializerError::Json`] if an appearance value cannot be encoded.
pub fn serialize_document(state: &EditorState) -> Result<Value, SerializerError> {
    let dto = DocumentDto {
        version: consts::CURRENT_SCHEMA_VERSION,
        size: state.size(),
        diagrams: state.diagrams().map(diagram_to_dto).collect(),
        selected_diagram_id: state.selected_diagram_id().map(str::to_owned),
    };
    Ok(serde_json::to_value(dto)?)
}

/// Load a document of any supported schema version.
///
/// # Errors
///
/// Fails on unsupported versions, missing fields, duplicate ids and root
/// orders that reference unknown items. Group children that do not resolve
/// are kept; such groups are invalid and have zero bounds.
pub fn load_document(json: &Value) -> Result<EditorState, SerializerError> {
    load(json).inspect_err(|err| tracing::warn!(error = %err, "document load failed"))
}

fn load(json: &Value) -> Result<EditorState, SerializerError> {
    let dto: DocumentDto = serde_json::from_value(migrate(json)?)?;

    let mut diagram_ids: Vec<DiagramId> = Vec::with_capacity(dto.diagrams.len());
    let mut diagrams: Vec<(DiagramId, Diagram)> = Vec::with_capacity(dto.diagrams.len());
    for diagram in dto.diagrams {
        if diagram_ids.contains(&diagram.id) {
            return Err(SerializerError::Malformed(format!("duplicate diagram id: {}", diagram.id)));
        }
        let diagram = diagram_from_dto(diagram, dto.size)?;
        diagram_ids.push(diagram.id().to_owned());
        diagrams.push((diagram.id().to_owned(), diagram));
    }

    let selected_diagram_id = dto
        .selected_diagram_id
        .filter(|id| diagram_ids.contains(id))
        .or_else(|| diagram_ids.first().cloned());

    Ok(EditorState::from_props(EditorProps {
        diagrams: ImmutableMap::of(diagrams),
        diagram_ids: ImmutableList::from_vec(diagram_ids),
        selected_diagram_id,
        size: dto.size,
    }))
}

fn diagram_to_dto(diagram: &Diagram) -> DiagramDto {
    DiagramDto {
        id: diagram.id().to_owned(),
        title: diagram.title().map(str::to_owned),
        items: diagram.items().values().map(ItemDto::from).collect(),
        order: diagram.root_ids().iter().cloned().collect(),
    }
}

fn diagram_from_dto(dto: DiagramDto, size: Vec2) -> Result<Diagram, SerializerError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(dto.items.len());
    let mut items: Vec<(String, DiagramItem)> = Vec::with_capacity(dto.items.len());
    for item in dto.items {
        let id = item.id().to_owned();
        if !seen.insert(id.clone()) {
            return Err(SerializerError::Malformed(format!("duplicate item id {id} in diagram {}", dto.id)));
        }
        items.push((id, DiagramItem::from(item)));
    }
    if let Some(missing) = dto.order.iter().find(|id| !seen.contains(*id)) {
        return Err(SerializerError::Malformed(format!(
            "order of diagram {} references unknown item {missing}",
            dto.id
        )));
    }

    Ok(Diagram::from_props(DiagramProps {
        id: dto.id,
        title: dto.title,
        items: ImmutableMap::of(items),
        root_ids: DiagramContainer::of(dto.order),
        selected_ids: ImmutableSet::empty(),
        size,
    }))
}
