//! Attribute extraction from JSON objects.

use serde_json::{Map, Value};

use crate::entry::{Constant, Entry, SafeEntry};
use crate::error::{EntryError, Result};

/// A JSON object.
pub type Object = Map<String, Value>;

/// The object held by an attribute of a JSON object.
///
/// Fails if the attribute is absent, `null` or not an object.
///
/// # Examples
///
/// ```
/// use entrys::json::JsonObject;
/// use entrys::Entry;
/// use serde_json::json;
///
/// let json = json!({"user": {"name": "zarif"}});
/// let user = JsonObject::from_object(json.as_object().unwrap().clone(), "user");
/// assert_eq!(user.value().unwrap()["name"], "zarif");
/// ```
#[derive(Debug, Clone)]
pub struct JsonObject<E> {
    json: E,
    attr: String,
}

impl<E> JsonObject<E> {
    /// Extract `attr` from the object produced by `json`.
    pub fn new(json: E, attr: impl Into<String>) -> Self {
        Self {
            json,
            attr: attr.into(),
        }
    }
}

impl JsonObject<Constant<Object>> {
    /// Extract `attr` from a literal object.
    pub fn from_object(json: Object, attr: impl Into<String>) -> Self {
        Self::new(Constant::new(json), attr)
    }
}

impl<E: Entry<Object>> Entry<Object> for JsonObject<E> {
    fn value(&self) -> Result<Object> {
        attribute(&self.json, &self.attr, "JsonObject", |value| match value {
            Value::Object(object) => Some(object),
            _ => None,
        })
    }
}

/// The array held by an attribute of a JSON object.
///
/// Fails if the attribute is absent, `null` or not an array.
///
/// # Examples
///
/// ```
/// use entrys::json::JsonArray;
/// use entrys::Entry;
/// use serde_json::json;
///
/// let json = json!({"ports": [8080, 9090]});
/// let ports = JsonArray::from_object(json.as_object().unwrap().clone(), "ports");
/// assert_eq!(ports.value().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct JsonArray<E> {
    json: E,
    attr: String,
}

impl<E> JsonArray<E> {
    /// Extract `attr` from the object produced by `json`.
    pub fn new(json: E, attr: impl Into<String>) -> Self {
        Self {
            json,
            attr: attr.into(),
        }
    }
}

impl JsonArray<Constant<Object>> {
    /// Extract `attr` from a literal object.
    pub fn from_object(json: Object, attr: impl Into<String>) -> Self {
        Self::new(Constant::new(json), attr)
    }
}

impl<E: Entry<Object>> Entry<Vec<Value>> for JsonArray<E> {
    fn value(&self) -> Result<Vec<Value>> {
        attribute(&self.json, &self.attr, "JsonArray", |value| match value {
            Value::Array(items) => Some(items),
            _ => None,
        })
    }
}

fn attribute<E, T>(
    json: &E,
    attr: &str,
    kind: &str,
    extract: impl Fn(Value) -> Option<T>,
) -> Result<T>
where
    E: Entry<Object>,
{
    SafeEntry::with_message(
        || -> Result<Option<T>> {
            match json.value()?.remove(attr) {
                None | Some(Value::Null) => Ok(None),
                Some(value) => extract(value).map(Some).ok_or_else(|| {
                    EntryError::malformed(format!("attribute {attr} couldn't be mapped to {kind}"))
                }),
            }
        },
        format!("{kind} attribute '{attr}' is null"),
    )
    .value()
}
