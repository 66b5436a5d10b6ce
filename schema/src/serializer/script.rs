//! HTML embedding of JSON-LD documents.
//!
//! Wraps a root document in `<script type="application/ld+json">` so it can be
//! dropped straight into a page's `<head>`.

use std::fmt;

use crate::config::Formatting;
use crate::model::SchemaEntity;
use crate::serializer::jsonld::{to_json, RenderError};

/// Opening tag of an embedded JSON-LD block, including its trailing newline.
pub const SCRIPT_OPEN: &str = "<script type=\"application/ld+json\">\n";

/// Closing tag of an embedded JSON-LD block, including its leading newline.
pub const SCRIPT_CLOSE: &str = "\n</script>";

/// Renders `entity` as a root document inside a JSON-LD script tag.
///
/// # Errors
///
/// Returns [`RenderError::Encode`] if `serde_json` cannot encode the value.
pub fn to_script_tag(entity: &dyn SchemaEntity, pretty: bool) -> Result<String, RenderError> {
    let json = to_json(entity, pretty, true)?;
    let mut tag = String::with_capacity(SCRIPT_OPEN.len() + json.len() + SCRIPT_CLOSE.len());
    tag.push_str(SCRIPT_OPEN);
    tag.push_str(&json);
    tag.push_str(SCRIPT_CLOSE);
    Ok(tag)
}

/// `Display` adapter that writes an entity's script tag.
///
/// ```
/// use schema_dot_org::config::Formatting;
/// use schema_dot_org::serializer::script::ScriptTag;
/// use schema_dot_org::types::Person;
///
/// let person = Person { name: Some("Ada Lovelace".into()), ..Person::default() };
/// let html = ScriptTag::new(&person, Formatting::compact()).to_string();
/// assert!(html.contains(r#""@type":"Person""#));
/// ```
pub struct ScriptTag<'a> {
    entity: &'a dyn SchemaEntity,
    formatting: Formatting,
}

impl<'a> ScriptTag<'a> {
    /// Wraps an entity with explicit formatting.
    #[must_use]
    pub fn new(entity: &'a dyn SchemaEntity, formatting: Formatting) -> Self {
        Self { entity, formatting }
    }
}

impl fmt::Display for ScriptTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = to_script_tag(self.entity, self.formatting.pretty).map_err(|e| {
            tracing::warn!(error = %e, "could not render JSON-LD script tag");
            fmt::Error
        })?;
        f.write_str(&tag)
    }
}
