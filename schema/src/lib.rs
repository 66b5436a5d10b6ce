//! schema.org structured data as typed Rust values.
//!
//! The `schema-dot-org` crate turns a graph of schema.org entities into a
//! JSON-LD document ready to embed in a web page. Entities declare their
//! attributes explicitly through [`SchemaEntity`]; the serializer walks them,
//! camelCases attribute names, recurses into nested entities, and drops blank
//! values.
//!
//! # Entry Point
//!
//! ```
//! use schema_dot_org::types::{Person, Place, PostalAddress, Event};
//! use schema_dot_org::serializer::{serialize_struct, to_script_tag};
//! use schema_dot_org::validation::Validate;
//!
//! let event = Event {
//!     name: Some("RustConf".into()),
//!     start_date: Some("2025-09-02".into()),
//!     location: Some(Place {
//!         name: Some("Seattle Convention Center".into()),
//!         address: Some(PostalAddress {
//!             street_address: Some("705 Pike St".into()),
//!             address_locality: Some("Seattle".into()),
//!             address_region: Some("WA".into()),
//!             postal_code: Some("98101".into()),
//!             ..PostalAddress::default()
//!         }),
//!         ..Place::default()
//!     }),
//!     ..Event::default()
//! };
//! event.validate().expect("valid event");
//!
//! let json = serialize_struct(&event, true);
//! assert_eq!(json["@context"], "http://schema.org");
//! assert_eq!(json["location"]["address"]["postalCode"], "98101");
//!
//! let html = to_script_tag(&event, false).expect("encodable");
//! assert!(html.starts_with("<script type=\"application/ld+json\">\n{\"@context\""));
//! ```
//!
//! # Formatting
//!
//! Rendering takes an explicit `pretty` flag. [`config::Formatting::from_env`]
//! derives it from `SCHEMA_DOT_ORG_MINIFIED_JSON` / `SCHEMA_DOT_ORG_ENV` for
//! callers that want the usual "compact in production" behavior.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod model;
pub mod naming;
pub mod serializer;
pub mod types;
pub mod validation;

pub use config::Formatting;
pub use model::{Attribute, AttributeValue, SchemaEntity, ToAttributeValue};
pub use serializer::{render, serialize_struct, to_json, to_script_tag, RenderError, ScriptTag};
pub use types::EntityDocument;
pub use validation::{Validate, ValidationError, ValidationReport};
