//! Named key-value field containers for object-graph serialization.
//!
//! A value object writes its canonical primitive into a [`SerializationInfo`]
//! and reads it back. Containers nest, so a record holding several value
//! objects serializes each of them under its own key.

use super::traits::SingleValueObject;
use crate::error::{SvoError, SvoResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which value objects store their canonical representation.
pub const VALUE_KEY: &str = "Value";

/// A single field of a [`SerializationInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    String(String),
    Int64(i64),
    Float(f64),
    Nested(SerializationInfo),
}

/// A named key-value container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerializationInfo {
    #[serde(rename = "type")]
    type_name: String,
    fields: BTreeMap<String, FieldValue>,
}

impl SerializationInfo {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn add_value(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn add_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.add_value(key, FieldValue::String(value.into()));
    }

    pub fn add_i64(&mut self, key: impl Into<String>, value: i64) {
        self.add_value(key, FieldValue::Int64(value));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// A string field, failing with a malformed container error otherwise.
    pub fn require_string(&self, key: &str, type_name: &'static str) -> SvoResult<&str> {
        match self.fields.get(key) {
            Some(FieldValue::String(text)) => Ok(text),
            _ => Err(malformed(type_name, key)),
        }
    }

    /// An integer field, failing with a malformed container error otherwise.
    pub fn require_i64(&self, key: &str, type_name: &'static str) -> SvoResult<i64> {
        match self.fields.get(key) {
            Some(FieldValue::Int64(number)) => Ok(*number),
            _ => Err(malformed(type_name, key)),
        }
    }

    /// Serialize a value object into a nested container under `key`.
    pub fn add_nested<T: GraphSerializable>(&mut self, key: impl Into<String>, value: &T) -> SvoResult<()> {
        let mut nested = SerializationInfo::new(T::TYPE_NAME);
        value.write_fields(Some(&mut nested))?;
        self.add_value(key, FieldValue::Nested(nested));
        Ok(())
    }

    /// Deserialize a value object from the nested container under `key`.
    pub fn get_nested<T: GraphSerializable>(&self, key: &str) -> SvoResult<T> {
        match self.fields.get(key) {
            Some(FieldValue::Nested(nested)) => T::read_fields(Some(nested)),
            _ => Err(malformed(T::TYPE_NAME, key)),
        }
    }
}

fn malformed(type_name: &'static str, key: &str) -> SvoError {
    SvoError::MalformedContainer {
        type_name,
        key: key.to_string(),
    }
}

/// Object-graph serialization through a [`SerializationInfo`].
///
/// An absent container is a null argument error; a container without the
/// expected field is a malformed container error.
pub trait GraphSerializable: SingleValueObject {
    /// Write the canonical representation into the container.
    fn write_canonical(&self, info: &mut SerializationInfo);

    /// Read the canonical representation from the container.
    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self>;

    fn write_fields(&self, info: Option<&mut SerializationInfo>) -> SvoResult<()> {
        let info = info.ok_or(SvoError::NullArgument { parameter: "info" })?;
        self.write_canonical(info);
        Ok(())
    }

    fn read_fields(info: Option<&SerializationInfo>) -> SvoResult<Self> {
        let info = info.ok_or(SvoError::NullArgument { parameter: "info" })?;
        Self::read_canonical(info)
    }
}
