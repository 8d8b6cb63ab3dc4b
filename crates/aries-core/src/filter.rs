//! Catalog search filters and their query-string encoding.
//!
//! The catalog accepts a `filter` query parameter holding a JSON array of
//! filter objects. Each object is serialized with sorted keys and then
//! percent-encoded, so the same terms always produce byte-identical output.
//! The surrounding `[` `]` stay literal.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Catalog field holding the internal numeric asset ID.
pub const ID_FIELD: &str = "id";

/// Catalog field holding the asset filename.
pub const FILENAME_FIELD: &str = "filename";

/// A single structured constraint sent to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
    terms: BTreeMap<String, String>,
}

impl SearchFilter {
    /// Numeric equality of the internal ID field against `id`.
    pub fn id_equals(id: &str) -> Self {
        Self::from_terms([
            ("type", "numeric"),
            ("comparison", "eq"),
            ("field", ID_FIELD),
            ("fieldName", "SSID"),
            ("value", id),
        ])
    }

    /// Prefix match of the filename field against `stem`.
    pub fn filename_prefix(stem: &str) -> Self {
        let pattern = format!("{stem}*");
        Self::from_terms([
            ("type", "string"),
            ("field", FILENAME_FIELD),
            ("fieldName", "Filename"),
            ("value", pattern.as_str()),
        ])
    }

    fn from_terms<'a>(terms: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            terms: terms
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Returns the raw field/value terms.
    pub fn terms(&self) -> &BTreeMap<String, String> {
        &self.terms
    }

    /// Returns the catalog field this filter constrains.
    pub fn field(&self) -> Option<&str> {
        self.terms.get("field").map(String::as_str)
    }

    /// The compact JSON form, unencoded. Used for logging.
    pub fn to_json(&self) -> String {
        to_json(&self.terms)
    }

    /// The percent-encoded JSON form.
    pub fn encoded(&self) -> String {
        encode(&self.terms)
    }
}

/// Serializes terms into a compact JSON object with sorted keys.
fn to_json(terms: &BTreeMap<String, String>) -> String {
    let object: Map<String, Value> = terms
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(object).to_string()
}

/// Encodes a term mapping as a percent-encoded JSON object.
pub fn encode(terms: &BTreeMap<String, String>) -> String {
    urlencoding::encode(&to_json(terms)).into_owned()
}

/// Builds the full `filter` parameter value: encoded objects, comma-joined,
/// wrapped once in literal brackets.
pub fn filter_param(filters: &[SearchFilter]) -> String {
    let encoded: Vec<String> = filters.iter().map(SearchFilter::encoded).collect();
    format!("[{}]", encoded.join(","))
}
