//! Serializers for schema.org entities.
//!
//! - **JSON-LD** ([`jsonld`]): entity → JSON object → compact or pretty text
//! - **Script tag** ([`script`]): root document wrapped for HTML embedding

pub mod jsonld;
pub mod script;

pub use jsonld::{render, serialize_struct, to_json, RenderError};
pub use script::{to_script_tag, ScriptTag};
