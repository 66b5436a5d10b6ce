//! End-to-end serialization of nested entity graphs.

use schema_dot_org::serializer::{serialize_struct, to_script_tag};
use schema_dot_org::types::{Event, Offer, Organization, Person, Place, PostalAddress};
use schema_dot_org::{Attribute, AttributeValue, EntityDocument, SchemaEntity, Validate};
use serde_json::{json, Value};

struct Qualified;

impl SchemaEntity for Qualified {
    fn type_name(&self) -> &str {
        "Namespace::Event"
    }

    fn attributes(&self) -> Vec<Attribute<'_>> {
        vec![Attribute::new("@query_input", AttributeValue::Text("required name=q"))]
    }
}

/// Sequence elements that are not entities pass through as-is.
struct Mixed<'a> {
    child: &'a Person,
}

impl SchemaEntity for Mixed<'_> {
    fn type_name(&self) -> &str {
        "Mixed"
    }

    fn attributes(&self) -> Vec<Attribute<'_>> {
        vec![Attribute::new(
            "item_list",
            AttributeValue::Sequence(vec![
                AttributeValue::Entity(self.child),
                AttributeValue::Text("plain"),
                AttributeValue::Absent,
                AttributeValue::Number(7.into()),
            ]),
        )]
    }
}

fn venue() -> Place {
    Place {
        name: Some("Town Hall".into()),
        address: Some(PostalAddress {
            street_address: Some("1 Main St".into()),
            address_locality: Some("Springfield".into()),
            address_region: Some("IL".into()),
            postal_code: Some("62701".into()),
            address_country: Some("US".into()),
        }),
        url: None,
    }
}

fn person(name: &str) -> Person {
    Person { name: Some(name.into()), ..Person::default() }
}

#[test]
fn qualified_type_and_sigil_attribute() {
    assert_eq!(
        Value::Object(serialize_struct(&Qualified, false)),
        json!({ "@type": "Event", "query-input": "required name=q" })
    );
}

#[test]
fn nested_entity_equals_its_own_serialization() {
    let event = Event { location: Some(venue()), ..Event::default() };
    let json = serialize_struct(&event, true);
    assert_eq!(json["location"], Value::Object(serialize_struct(&venue(), false)));
    assert!(json["location"].get("@context").is_none());
}

#[test]
fn sequence_of_entities_preserves_order() {
    let (b, c) = (person("B"), person("C"));
    let event = Event { performer: vec![b.clone(), c.clone()], ..Event::default() };
    let json = serialize_struct(&event, false);
    assert_eq!(
        json["performer"],
        json!([
            Value::Object(serialize_struct(&b, false)),
            Value::Object(serialize_struct(&c, false))
        ])
    );
}

#[test]
fn sequence_elements_pass_through_unless_entities() {
    let child = person("Ada");
    let json = serialize_struct(&Mixed { child: &child }, false);
    assert_eq!(
        json["itemList"],
        json!([{ "@type": "Person", "name": "Ada" }, "plain", null, 7])
    );
}

#[test]
fn blank_filtering_is_shallow() {
    // Blank strings inside a sequence stay; only whole attributes are dropped.
    let p = Person {
        name: Some("A".into()),
        same_as: vec![String::new()],
        ..Person::default()
    };
    assert_eq!(serialize_struct(&p, false)["sameAs"], json!([""]));
}

#[test]
fn full_event_script_tag() {
    let event = Event {
        name: Some("Spring Recital".into()),
        start_date: Some("2026-04-18T19:00".into()),
        location: Some(venue()),
        performer: vec![person("Clara Schumann")],
        organizer: Some(Organization {
            name: Some("Springfield Music Society".into()),
            url: Some("https://music.example".into()),
            ..Organization::default()
        }),
        offers: vec![Offer {
            price: Some(15.into()),
            price_currency: Some("USD".into()),
            availability: Some("https://schema.org/InStock".into()),
            ..Offer::default()
        }],
        ..Event::default()
    };
    event.validate().expect("valid event");

    let tag = to_script_tag(&event, true).expect("render");
    let body = tag
        .strip_prefix("<script type=\"application/ld+json\">\n")
        .and_then(|rest| rest.strip_suffix("\n</script>"))
        .expect("wrapped in script tag");
    let parsed: Value = serde_json::from_str(body).expect("valid JSON");
    assert_eq!(
        parsed,
        json!({
            "@context": "http://schema.org",
            "@type": "Event",
            "name": "Spring Recital",
            "startDate": "2026-04-18T19:00",
            "location": {
                "@type": "Place",
                "name": "Town Hall",
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": "1 Main St",
                    "addressLocality": "Springfield",
                    "addressRegion": "IL",
                    "postalCode": "62701",
                    "addressCountry": "US"
                }
            },
            "performer": [{ "@type": "Person", "name": "Clara Schumann" }],
            "organizer": {
                "@type": "Organization",
                "name": "Springfield Music Society",
                "url": "https://music.example"
            },
            "offers": [{
                "@type": "Offer",
                "price": 15,
                "priceCurrency": "USD",
                "availability": "https://schema.org/InStock"
            }]
        })
    );
}

#[test]
fn document_from_json_renders_like_typed_value() {
    let doc: EntityDocument = serde_json::from_value(json!({
        "type": "Event",
        "name": "Spring Recital",
        "start_date": "2026-04-18",
        "location": {
            "name": "Town Hall",
            "address": {
                "street_address": "1 Main St",
                "address_locality": "Springfield",
                "address_region": "IL",
                "postal_code": "62701",
                "address_country": "US"
            }
        }
    }))
    .expect("document parses");
    doc.validate().expect("valid document");

    let typed = Event {
        name: Some("Spring Recital".into()),
        start_date: Some("2026-04-18".into()),
        location: Some(venue()),
        ..Event::default()
    };
    assert_eq!(serialize_struct(doc.entity(), true), serialize_struct(&typed, true));
}
