//! Core entity model types.
//!
//! A schema.org type is any Rust type implementing [`SchemaEntity`]: it names
//! itself and lists its attributes in declaration order. Attribute values are
//! borrowed from the entity as [`AttributeValue`]s, so serialization never
//! copies or mutates the caller's graph.

use serde_json::{Number, Value};

/// A typed value object representing one schema.org type instance.
///
/// Implementors expose a type identifier and an ordered attribute list. The
/// identifier may be namespace-qualified (`my_app::seo::Event`); only the last
/// path segment is used as the JSON-LD `@type`.
pub trait SchemaEntity {
    /// Returns the (possibly qualified) type identifier.
    ///
    /// The default is the Rust type path, e.g. `schema_dot_org::types::Event`.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns every declared attribute, in declaration order.
    fn attributes(&self) -> Vec<Attribute<'_>>;
}

/// One declared attribute of an entity.
#[derive(Debug, Clone)]
pub struct Attribute<'a> {
    /// Attribute identifier in snake_case. A leading `@` marks a reserved
    /// attribute and is stripped before key translation.
    pub name: &'a str,
    /// The attribute's current value.
    pub value: AttributeValue<'a>,
}

impl<'a> Attribute<'a> {
    /// Creates an attribute from an identifier and a value.
    #[must_use]
    pub fn new(name: &'a str, value: AttributeValue<'a>) -> Self {
        Self { name, value }
    }
}

/// The value kinds an attribute can hold.
#[derive(Clone)]
pub enum AttributeValue<'a> {
    /// No value; always omitted from output.
    Absent,
    /// A string literal.
    Text(&'a str),
    /// A JSON number.
    Number(Number),
    /// A boolean literal.
    Boolean(bool),
    /// A nested entity, serialized recursively.
    Entity(&'a dyn SchemaEntity),
    /// An ordered sequence. Entity elements are serialized recursively, all
    /// other elements pass through unchanged.
    Sequence(Vec<AttributeValue<'a>>),
    /// A pre-built JSON value, passed through untouched.
    Json(&'a Value),
}

impl AttributeValue<'_> {
    /// Returns true if this value would be dropped from serialized output.
    ///
    /// Blank means absent, a string with no non-whitespace characters, an
    /// empty sequence, or a blank pass-through JSON value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            AttributeValue::Absent => true,
            AttributeValue::Text(s) => s.trim().is_empty(),
            AttributeValue::Sequence(items) => items.is_empty(),
            AttributeValue::Json(v) => crate::serializer::jsonld::is_blank(v),
            AttributeValue::Number(_) | AttributeValue::Boolean(_) | AttributeValue::Entity(_) => {
                false
            }
        }
    }
}

impl std::fmt::Debug for AttributeValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Absent => f.write_str("Absent"),
            AttributeValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            AttributeValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            AttributeValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            AttributeValue::Entity(e) => f.debug_tuple("Entity").field(&e.type_name()).finish(),
            AttributeValue::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            AttributeValue::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

/// Conversion from a field type to the attribute value it contributes.
///
/// Implemented for the primitive field types used by the vocabulary, for
/// `Option`/`Vec`/`Box` wrappers, and for every entity type.
pub trait ToAttributeValue {
    /// Borrows `self` as an attribute value.
    fn to_attribute_value(&self) -> AttributeValue<'_>;
}

impl ToAttributeValue for String {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Text(self)
    }
}

impl ToAttributeValue for str {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Text(self)
    }
}

impl ToAttributeValue for bool {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Boolean(*self)
    }
}

impl ToAttributeValue for Number {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Number(self.clone())
    }
}

impl ToAttributeValue for Value {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Json(self)
    }
}

macro_rules! impl_integer_attribute {
    ($($ty:ty),*) => {
        $(
            impl ToAttributeValue for $ty {
                fn to_attribute_value(&self) -> AttributeValue<'_> {
                    AttributeValue::Number(Number::from(*self))
                }
            }
        )*
    };
}

impl_integer_attribute!(u8, u16, u32, u64, i8, i16, i32, i64);

impl ToAttributeValue for f64 {
    // NaN and infinities have no JSON representation.
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        Number::from_f64(*self).map_or(AttributeValue::Absent, AttributeValue::Number)
    }
}

impl<T: ToAttributeValue> ToAttributeValue for Option<T> {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        self.as_ref()
            .map_or(AttributeValue::Absent, |value| value.to_attribute_value())
    }
}

impl<T: ToAttributeValue> ToAttributeValue for Vec<T> {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        AttributeValue::Sequence(self.iter().map(|item| item.to_attribute_value()).collect())
    }
}

impl<T: ToAttributeValue + ?Sized> ToAttributeValue for Box<T> {
    fn to_attribute_value(&self) -> AttributeValue<'_> {
        (**self).to_attribute_value()
    }
}
