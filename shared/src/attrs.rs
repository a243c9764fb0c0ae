use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::PropsError;

/// A single misc attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// The attribute value as it should appear in the DOM. `None` means the
    /// attribute must not be present on the element.
    pub fn dom_value(&self) -> Option<String> {
        match self {
            AttrValue::Null | AttrValue::Bool(false) => None,
            AttrValue::Bool(true) => Some(String::new()),
            AttrValue::Number(number) => Some(number.to_string()),
            AttrValue::Text(text) => Some(text.clone()),
        }
    }

    pub(crate) fn expect_bool(&self, key: &str) -> Result<bool, PropsError> {
        match self {
            AttrValue::Bool(value) => Ok(*value),
            _ => Err(PropsError::InvalidAttr {
                key: key.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// Text content override. `null` empties the content.
    pub(crate) fn expect_children(&self, key: &str) -> Result<String, PropsError> {
        match self {
            AttrValue::Null => Ok(String::new()),
            AttrValue::Text(value) => Ok(value.clone()),
            _ => Err(PropsError::InvalidAttr {
                key: key.to_string(),
                expected: "string or null",
            }),
        }
    }

    /// Click handlers cannot travel as attribute values; only their removal can.
    pub(crate) fn expect_handler_removal(&self, key: &str) -> Result<(), PropsError> {
        match self {
            AttrValue::Null | AttrValue::Bool(false) => Ok(()),
            _ => Err(PropsError::InvalidAttr {
                key: key.to_string(),
                expected: "null",
            }),
        }
    }

    pub(crate) fn expect_text(&self, key: &str) -> Result<&str, PropsError> {
        match self {
            AttrValue::Text(value) => Ok(value.as_str()),
            _ => Err(PropsError::InvalidAttr {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// An arbitrary, ordered set of attributes merged onto a component after its
/// named props. Keys the component knows override the matching prop; the rest
/// are written to the rendered element verbatim.
///
/// Inserting a key that is already present replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiscAttrs(IndexMap<String, AttrValue>);

impl MiscAttrs {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Add a key-value pair attribute, rendered as `<div key="value">`.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, AttrValue::Text(value.into()));
    }

    /// Add a boolean attribute, rendered as `<div key>`.
    pub fn add_boolean_attribute(&mut self, key: impl Into<String>) {
        self.insert(key, AttrValue::Bool(true));
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttrValue> {
        self.0.iter()
    }

    /// Parse a flat JSON object such as `{"alert": false, "data-id": "x"}`.
    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| PropsError::MalformedAttrs(e.to_string()))?;

        if !value.is_object() {
            return Err(PropsError::MalformedAttrs(format!(
                "expected an object, got {value}"
            )));
        }

        serde_json::from_value(value).map_err(|e| PropsError::MalformedAttrs(e.to_string()))
    }
}

impl From<IndexMap<String, AttrValue>> for MiscAttrs {
    fn from(map: IndexMap<String, AttrValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for MiscAttrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = MiscAttrs::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

impl<'a> IntoIterator for &'a MiscAttrs {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
