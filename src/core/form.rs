//! Raw form submissions
//!
//! Handlers never see a typed payload directly: they read raw values out of a
//! [`FormInput`] and hand them to the validation schema. A browser form posts
//! URL-encoded pairs (every value is a string); API clients may post JSON, in
//! which case values keep their JSON type.

use indexmap::IndexMap;
use serde_json::Value;

/// Key/value access to a submitted form
pub trait FormInput: Send + Sync {
    /// Raw value of a field, `None` when the field was not submitted
    fn get(&self, field: &str) -> Option<&Value>;
}

/// An owned, ordered form submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    fields: IndexMap<String, Value>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from URL-encoded pairs; later duplicates win
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self { fields }
    }

    /// Build from a JSON body
    ///
    /// Returns `None` unless the body is a JSON object.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Object(map) => Some(Self {
                fields: map.into_iter().collect(),
            }),
            _ => None,
        }
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FormInput for FormData {
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl<T: FormInput + ?Sized> FormInput for &T {
    fn get(&self, field: &str) -> Option<&Value> {
        (**self).get(field)
    }
}
