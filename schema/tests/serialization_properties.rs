//! Property-based tests for the JSON-LD serializer.
//!
//! Entities here are built by hand through the `SchemaEntity` trait so the
//! generators control every attribute name and value kind.

use proptest::prelude::*;
use schema_dot_org::naming::{attribute_key, snake_to_lower_camel};
use schema_dot_org::serializer::{render, serialize_struct};
use schema_dot_org::{Attribute, AttributeValue, SchemaEntity};
use serde_json::{json, Map, Value};

/// An entity whose type name and attributes come from a generator.
#[derive(Debug)]
struct Dynamic {
    type_name: String,
    attributes: Vec<(String, Field)>,
}

#[derive(Debug, Clone)]
enum Field {
    Absent,
    Text(String),
    Int(i64),
    Flag(bool),
    Strings(Vec<String>),
}

impl SchemaEntity for Dynamic {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attributes(&self) -> Vec<Attribute<'_>> {
        self.attributes
            .iter()
            .map(|(name, field)| {
                let value = match field {
                    Field::Absent => AttributeValue::Absent,
                    Field::Text(s) => AttributeValue::Text(s),
                    Field::Int(n) => AttributeValue::Number((*n).into()),
                    Field::Flag(b) => AttributeValue::Boolean(*b),
                    Field::Strings(items) => AttributeValue::Sequence(
                        items.iter().map(|s| AttributeValue::Text(s)).collect(),
                    ),
                };
                Attribute::new(name, value)
            })
            .collect()
    }
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Absent),
        "[ a-z]{0,6}".prop_map(Field::Text),
        any::<i64>().prop_map(Field::Int),
        any::<bool>().prop_map(Field::Flag),
        prop::collection::vec("[a-z]{1,4}", 0..3).prop_map(Field::Strings),
    ]
}

fn dynamic() -> impl Strategy<Value = Dynamic> {
    (
        "([A-Z][a-z]{0,5}::){0,3}[A-Z][a-z]{1,8}",
        prop::collection::btree_map("[a-z]{1,5}(_[a-z]{1,5}){0,2}", field(), 0..6),
    )
        .prop_map(|(type_name, attrs)| Dynamic {
            type_name,
            attributes: attrs.into_iter().collect(),
        })
}

fn is_blank_field(field: &Field) -> bool {
    match field {
        Field::Absent => true,
        Field::Text(s) => s.trim().is_empty(),
        Field::Strings(items) => items.is_empty(),
        Field::Int(_) | Field::Flag(_) => false,
    }
}

proptest! {
    /// Blank attributes never produce a key; present ones always do.
    #[test]
    fn prop_blank_values_are_omitted(entity in dynamic()) {
        let json = serialize_struct(&entity, false);
        for (name, field) in &entity.attributes {
            let key = attribute_key(name);
            prop_assert_eq!(json.contains_key(&key), !is_blank_field(field), "key {}", key);
        }
        for value in json.values() {
            prop_assert!(!value.is_null());
            prop_assert_ne!(value, &json!(""));
            prop_assert_ne!(value, &json!([]));
        }
    }

    /// Root documents always open with `@context`, then `@type`.
    #[test]
    fn prop_root_key_order(entity in dynamic()) {
        let json = serialize_struct(&entity, true);
        let keys: Vec<&str> = json.keys().take(2).map(String::as_str).collect();
        prop_assert_eq!(keys, vec!["@context", "@type"]);
        prop_assert_eq!(&json["@context"], &json!("http://schema.org"));
    }

    /// `@type` is the last path segment of the type identifier.
    #[test]
    fn prop_type_is_unqualified(entity in dynamic()) {
        let json = serialize_struct(&entity, false);
        let expected = entity.type_name.rsplit("::").next().unwrap_or_default();
        prop_assert_eq!(&json["@type"], &json!(expected));
    }

    /// Serialized keys appear in attribute declaration order.
    #[test]
    fn prop_keys_follow_declaration_order(entity in dynamic()) {
        let json = serialize_struct(&entity, false);
        let expected: Vec<String> = std::iter::once("@type".to_owned())
            .chain(
                entity
                    .attributes
                    .iter()
                    .filter(|(_, f)| !is_blank_field(f))
                    .map(|(name, _)| attribute_key(name)),
            )
            .collect();
        let actual: Vec<String> = json.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Pretty and compact rendering differ only in whitespace.
    #[test]
    fn prop_pretty_and_compact_agree(entity in dynamic()) {
        let structure = serialize_struct(&entity, true);
        let pretty = render(&structure, true).expect("pretty render");
        let compact = render(&structure, false).expect("compact render");
        let a: Map<String, Value> = serde_json::from_str(&pretty).expect("pretty parses");
        let b: Map<String, Value> = serde_json::from_str(&compact).expect("compact parses");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        prop_assert!(!compact.contains('\n'));
    }

    /// A camelCase word with no underscores is its own translation.
    #[test]
    fn prop_single_words_translate_to_themselves(word in "[a-z][a-zA-Z0-9]{0,12}") {
        prop_assert_eq!(snake_to_lower_camel(&word), word.clone());
        prop_assert_eq!(attribute_key(&word), word);
    }

    /// Translated keys never contain underscores.
    #[test]
    fn prop_translated_keys_have_no_underscores(name in "@?[a-z]{1,6}(_[a-z]{1,6}){0,3}") {
        prop_assert!(!attribute_key(&name).contains('_'));
    }
}
