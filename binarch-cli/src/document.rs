//! JSON-shaped documents stored in a binarch archive
//!
//! A [`Document`] is a recursive sum type: every node is one of seven
//! alternatives and lists/objects hold further documents. It goes through the
//! codec's variant path, so each node costs one `u64` discriminant plus its
//! payload.

use binarch_core::{impl_variant, Variant};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Labels of the alternatives, in discriminant order
pub const KIND_NAMES: [&str; 7] = ["null", "bool", "int", "float", "text", "list", "object"];

/// One node of a document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// JSON `null`
    Null(()),
    /// JSON `true` / `false`
    Bool(bool),
    /// A number that fits `i64`
    Int(i64),
    /// Any other number
    Float(f64),
    /// A string
    Text(String),
    /// An array
    List(Vec<Document>),
    /// An object, keys in sorted order
    Object(BTreeMap<String, Document>),
}

impl Default for Document {
    fn default() -> Self {
        Document::Null(())
    }
}

impl_variant!(Document {
    Null,
    Bool,
    Int,
    Float,
    Text,
    List,
    Object,
});

impl Document {
    /// Label of the active alternative
    pub fn kind(&self) -> &'static str {
        KIND_NAMES[self.index()]
    }

    /// Visit this node and every node below it, depth first
    pub fn walk<F: FnMut(&Document)>(&self, visit: &mut F) {
        visit(self);
        match self {
            Document::List(items) => items.iter().for_each(|item| item.walk(visit)),
            Document::Object(fields) => fields.values().for_each(|field| field.walk(visit)),
            _ => {}
        }
    }

    /// Convert back to a JSON value
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Document::Null(()) => Value::Null,
            Document::Bool(b) => Value::Bool(*b),
            Document::Int(i) => Value::Number((*i).into()),
            Document::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Document::Text(s) => Value::String(s.clone()),
            Document::List(items) => Value::Array(items.iter().map(Document::to_json).collect()),
            Document::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Document::Null(()),
            Value::Bool(b) => Document::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Document::Int(i),
                None => n.as_f64().map_or(Document::Null(()), Document::Float),
            },
            Value::String(s) => Document::Text(s.clone()),
            Value::Array(items) => Document::List(items.iter().map(Document::from).collect()),
            Value::Object(fields) => Document::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Document::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Count nodes per alternative across a set of documents
pub fn count_kinds(docs: &[Document]) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> = KIND_NAMES.iter().map(|k| (*k, 0)).collect();
    for doc in docs {
        doc.walk(&mut |node: &Document| *counts.entry(node.kind()).or_default() += 1);
    }
    counts
}
