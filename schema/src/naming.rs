//! Attribute and type name translation.
//!
//! schema.org spells property names in lowerCamelCase, while entity fields are
//! declared in snake_case. [`attribute_key`] bridges the two, with a small
//! table of irregular names that the vocabulary spells differently.

/// Sigil marking a reserved attribute identifier.
pub const RESERVED_SIGIL: char = '@';

/// Attribute identifiers whose schema.org key does not follow lowerCamelCase.
const IRREGULAR_KEYS: &[(&str, &str)] = &[("query_input", "query-input")];

/// Translates an attribute identifier to its JSON-LD key.
///
/// A single leading [`RESERVED_SIGIL`] is stripped, irregular names are looked
/// up in a fixed table, and everything else goes through
/// [`snake_to_lower_camel`].
///
/// ```
/// use schema_dot_org::naming::attribute_key;
///
/// assert_eq!(attribute_key("start_date"), "startDate");
/// assert_eq!(attribute_key("@query_input"), "query-input");
/// assert_eq!(attribute_key("sameAs"), "sameAs");
/// ```
#[must_use]
pub fn attribute_key(identifier: &str) -> String {
    let bare = identifier.strip_prefix(RESERVED_SIGIL).unwrap_or(identifier);
    for (name, key) in IRREGULAR_KEYS {
        if bare == *name {
            return (*key).to_owned();
        }
    }
    snake_to_lower_camel(bare)
}

/// Joins underscore-separated words into lowerCamelCase.
///
/// The first word is kept as-is; every following word has its first character
/// upper-cased and the rest lower-cased.
#[must_use]
pub fn snake_to_lower_camel(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for (i, word) in snake.split('_').enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            capitalize_into(word, &mut out);
        }
    }
    out
}

fn capitalize_into(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

/// Returns a type identifier without its module path.
///
/// Generic arguments and trailing separators are dropped first, then
/// everything after the last `:` is kept. `schema_dot_org::types::Event` and
/// `Namespace::Event` both become `Event`; `app::Wrapper<app::Person>` becomes
/// `Wrapper`.
#[must_use]
pub fn unqualified_type_name(type_name: &str) -> &str {
    let path = type_name.split('<').next().unwrap_or(type_name).trim_end_matches(':');
    path.rsplit(':').next().unwrap_or(path)
}
