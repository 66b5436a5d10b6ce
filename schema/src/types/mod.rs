//! schema.org vocabulary types.
//!
//! Each type is declared with `schema_entity!`, which generates the struct
//! together with its [`SchemaEntity`] impl, so serialized attributes always
//! follow field declaration order. Validation rules live next to each type.

use crate::model::SchemaEntity;
use crate::validation::{Validate, ValidationError};

/// Declares a schema.org entity struct.
///
/// Generates the struct (all fields public, `Default`, and serde
/// `Deserialize` with snake_case field names when the `serde` feature is on),
/// a [`SchemaEntity`] impl listing every field in order, and a
/// [`ToAttributeValue`](crate::model::ToAttributeValue) impl so the type can
/// be nested inside other entities.
macro_rules! schema_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Deserialize),
            serde(default, deny_unknown_fields)
        )]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::model::SchemaEntity for $name {
            fn attributes(&self) -> Vec<$crate::model::Attribute<'_>> {
                vec![
                    $(
                        $crate::model::Attribute::new(
                            stringify!($field),
                            $crate::model::ToAttributeValue::to_attribute_value(&self.$field),
                        ),
                    )*
                ]
            }
        }

        impl $crate::model::ToAttributeValue for $name {
            fn to_attribute_value(&self) -> $crate::model::AttributeValue<'_> {
                $crate::model::AttributeValue::Entity(self)
            }
        }
    };
}

pub mod breadcrumb;
pub mod event;
pub mod offer;
pub mod organization;
pub mod person;
pub mod place;
pub mod website;

pub use breadcrumb::{BreadcrumbList, ListItem};
pub use event::Event;
pub use offer::{AggregateOffer, Offer, Product};
pub use organization::{ContactPoint, Organization};
pub use person::Person;
pub use place::{Place, PostalAddress};
pub use website::{SearchAction, WebSite};

/// Any vocabulary type, tagged by its schema.org type name.
///
/// Deserializes from `{"type": "Event", ...}` where the remaining keys are the
/// type's snake_case field names.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(tag = "type"))]
pub enum EntityDocument {
    /// An [`AggregateOffer`].
    AggregateOffer(AggregateOffer),
    /// A [`BreadcrumbList`].
    BreadcrumbList(BreadcrumbList),
    /// A [`ContactPoint`].
    ContactPoint(ContactPoint),
    /// An [`Event`].
    Event(Event),
    /// A [`ListItem`].
    ListItem(ListItem),
    /// An [`Offer`].
    Offer(Offer),
    /// An [`Organization`].
    Organization(Organization),
    /// A [`Person`].
    Person(Person),
    /// A [`Place`].
    Place(Place),
    /// A [`PostalAddress`].
    PostalAddress(PostalAddress),
    /// A [`Product`].
    Product(Product),
    /// A [`SearchAction`].
    SearchAction(SearchAction),
    /// A [`WebSite`].
    WebSite(WebSite),
}

macro_rules! each_document {
    ($doc:expr, $inner:ident => $body:expr) => {
        match $doc {
            EntityDocument::AggregateOffer($inner) => $body,
            EntityDocument::BreadcrumbList($inner) => $body,
            EntityDocument::ContactPoint($inner) => $body,
            EntityDocument::Event($inner) => $body,
            EntityDocument::ListItem($inner) => $body,
            EntityDocument::Offer($inner) => $body,
            EntityDocument::Organization($inner) => $body,
            EntityDocument::Person($inner) => $body,
            EntityDocument::Place($inner) => $body,
            EntityDocument::PostalAddress($inner) => $body,
            EntityDocument::Product($inner) => $body,
            EntityDocument::SearchAction($inner) => $body,
            EntityDocument::WebSite($inner) => $body,
        }
    };
}

impl EntityDocument {
    /// Borrows the wrapped entity.
    #[must_use]
    pub fn entity(&self) -> &dyn SchemaEntity {
        each_document!(self, inner => inner as &dyn SchemaEntity)
    }

    /// Validates the wrapped entity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] listing every issue found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        each_document!(self, inner => inner.validate())
    }
}
