//! JSON-LD serializer for schema.org entities.
//!
//! Walks an entity's declared attributes, translates their names to
//! schema.org keys, and recursively serializes nested entities and sequences
//! of entities. Output objects keep insertion order: `@context` (root only),
//! then `@type`, then attributes in declaration order.

use serde_json::{Map, Value};

use crate::model::{AttributeValue, SchemaEntity};
use crate::naming::{attribute_key, unqualified_type_name};

/// Key of the vocabulary declaration carried by root documents.
pub const CONTEXT_KEY: &str = "@context";

/// Key holding the unqualified entity type name.
pub const TYPE_KEY: &str = "@type";

/// The schema.org vocabulary IRI.
pub const SCHEMA_ORG_CONTEXT: &str = "http://schema.org";

/// Errors raised while rendering a serialized structure as text.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The structure could not be encoded as JSON.
    #[error("failed to encode JSON-LD: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serializes an entity to a JSON object.
///
/// With `as_root` the object starts with `"@context": "http://schema.org"`;
/// nested entities are always serialized without it. Blank attributes are
/// dropped after all attributes are collected.
///
/// This function is infallible. Attribute values are not checked; run
/// [`crate::validation::Validate`] beforehand if the input is untrusted.
#[must_use]
pub fn serialize_struct(entity: &dyn SchemaEntity, as_root: bool) -> Map<String, Value> {
    let body = entity_to_struct(entity);
    if !as_root {
        return body;
    }

    tracing::debug!(entity_type = %type_of(&body), keys = body.len(), "serialized root entity");
    let mut root = Map::new();
    root.insert(CONTEXT_KEY.to_owned(), Value::from(SCHEMA_ORG_CONTEXT));
    for (key, value) in body {
        if key != CONTEXT_KEY {
            root.insert(key, value);
        }
    }
    root
}

/// Renders a serialized structure as JSON text.
///
/// `pretty` only changes whitespace; keys, order and values are identical.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if `serde_json` cannot encode the value.
pub fn render(structure: &Map<String, Value>, pretty: bool) -> Result<String, RenderError> {
    let text = if pretty {
        serde_json::to_string_pretty(structure)?
    } else {
        serde_json::to_string(structure)?
    };
    Ok(text)
}

/// Serializes and renders an entity in one step.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if `serde_json` cannot encode the value.
pub fn to_json(entity: &dyn SchemaEntity, pretty: bool, as_root: bool) -> Result<String, RenderError> {
    render(&serialize_struct(entity, as_root), pretty)
}

/// Returns true if a serialized value counts as blank and must be omitted.
///
/// Blank values are `null`, strings with no non-whitespace characters, empty
/// arrays and empty objects. `false` and `0` are values, not blanks.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn entity_to_struct(entity: &dyn SchemaEntity) -> Map<String, Value> {
    let type_name = unqualified_type_name(entity.type_name());
    let mut merged = Map::new();
    merged.insert(TYPE_KEY.to_owned(), Value::from(type_name));
    for (key, value) in attrs_and_values(entity) {
        if key != TYPE_KEY {
            merged.insert(key, value);
        }
    }

    let before = merged.len();
    let filtered: Map<String, Value> = merged
        .into_iter()
        .filter(|(k, v)| k == TYPE_KEY || !is_blank(v))
        .collect();
    tracing::trace!(entity_type = type_name, dropped = before - filtered.len(), "serialized entity");
    filtered
}

fn attrs_and_values(entity: &dyn SchemaEntity) -> Vec<(String, Value)> {
    entity
        .attributes()
        .into_iter()
        .map(|attr| (attribute_key(attr.name), transform_value(attr.value)))
        .collect()
}

fn transform_value(value: AttributeValue<'_>) -> Value {
    match value {
        AttributeValue::Absent => Value::Null,
        AttributeValue::Text(s) => Value::from(s),
        AttributeValue::Number(n) => Value::Number(n),
        AttributeValue::Boolean(b) => Value::Bool(b),
        AttributeValue::Entity(child) => Value::Object(entity_to_struct(child)),
        AttributeValue::Sequence(items) => {
            Value::Array(items.into_iter().map(transform_value).collect())
        }
        AttributeValue::Json(v) => v.clone(),
    }
}

fn type_of(structure: &Map<String, Value>) -> &str {
    structure.get(TYPE_KEY).and_then(Value::as_str).unwrap_or_default()
}
