//! JSON-like wire protocol.
//!
//! A wire value is one of absent/null, string, integer, floating point number
//! or native date-time. Every value object accepts strings (through the
//! parsing pipeline, invariant culture) and declares which other kinds it
//! accepts by overriding the corresponding `from_wire_*` hook.

use super::traits::Parsable;
use crate::culture::Culture;
use crate::error::{SvoError, SvoResult, WireKind};
use chrono::NaiveDateTime;
use log::debug;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A value as it travels over a JSON-like wire.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    DateTime(NaiveDateTime),
}

impl WireValue {
    pub fn kind(&self) -> WireKind {
        match self {
            WireValue::Null => WireKind::Null,
            WireValue::String(_) => WireKind::String,
            WireValue::Integer(_) => WireKind::Integer,
            WireValue::Float(_) => WireKind::Float,
            WireValue::DateTime(_) => WireKind::DateTime,
        }
    }

    /// Convert to a JSON value; date-times become ISO 8601 strings.
    pub fn to_json(&self) -> Value {
        match self {
            WireValue::Null => Value::Null,
            WireValue::String(text) => Value::String(text.clone()),
            WireValue::Integer(number) => Value::from(*number),
            WireValue::Float(number) => Value::from(*number),
            WireValue::DateTime(value) => {
                Value::String(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
        }
    }

    /// Convert from a JSON value. Booleans, arrays and objects have no wire form.
    pub fn from_json(value: &Value, type_name: &'static str) -> SvoResult<Self> {
        match value {
            Value::Null => Ok(WireValue::Null),
            Value::String(text) => Ok(WireValue::String(text.clone())),
            Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    Ok(WireValue::Integer(integer))
                } else if let Some(unsigned) = number.as_u64() {
                    Err(SvoError::out_of_range(type_name, unsigned))
                } else {
                    Ok(WireValue::Float(number.as_f64().unwrap_or(f64::NAN)))
                }
            }
            other => Err(SvoError::parse(type_name, other.to_string())),
        }
    }
}

/// Conversion between a value object and its wire representation.
pub trait WireConvertible: Parsable {
    fn from_wire_null() -> SvoResult<Self> {
        Ok(Self::empty())
    }

    fn from_wire_string(text: &str) -> SvoResult<Self> {
        Self::parse_with(text, Culture::invariant())
    }

    fn from_wire_integer(_value: i64) -> SvoResult<Self> {
        Err(SvoError::unsupported(Self::TYPE_NAME, WireKind::Integer))
    }

    fn from_wire_float(_value: f64) -> SvoResult<Self> {
        Err(SvoError::unsupported(Self::TYPE_NAME, WireKind::Float))
    }

    fn from_wire_datetime(_value: NaiveDateTime) -> SvoResult<Self> {
        Err(SvoError::unsupported(Self::TYPE_NAME, WireKind::DateTime))
    }

    /// The value as it goes out on the wire.
    fn to_wire(&self) -> WireValue;

    fn from_wire(value: WireValue) -> SvoResult<Self> {
        let kind = value.kind();
        let result = match value {
            WireValue::Null => Self::from_wire_null(),
            WireValue::String(text) => Self::from_wire_string(&text),
            WireValue::Integer(number) => Self::from_wire_integer(number),
            WireValue::Float(number) => Self::from_wire_float(number),
            WireValue::DateTime(value) => Self::from_wire_datetime(value),
        };
        if let Err(SvoError::UnsupportedWireKind { .. }) = &result {
            debug!("{} rejected a wire value of kind {:?}", Self::TYPE_NAME, kind);
        }
        result
    }

    fn to_json(&self) -> Value {
        self.to_wire().to_json()
    }

    fn from_json(value: &Value) -> SvoResult<Self> {
        Self::from_wire(WireValue::from_json(value, Self::TYPE_NAME)?)
    }
}

/// Serialize a wire value with any serde serializer.
pub fn serialize_wire<S: Serializer>(value: &WireValue, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        WireValue::Null => serializer.serialize_none(),
        WireValue::String(text) => serializer.serialize_str(text),
        WireValue::Integer(number) => serializer.serialize_i64(*number),
        WireValue::Float(number) => serializer.serialize_f64(*number),
        WireValue::DateTime(value) => {
            serializer.collect_str(&value.format("%Y-%m-%dT%H:%M:%S%.f"))
        }
    }
}

/// Deserialize any value object from a self-describing serde format.
pub fn deserialize_wire<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: WireConvertible,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WireVisitor(PhantomData))
}

struct WireVisitor<T>(PhantomData<T>);

impl<T: WireConvertible> WireVisitor<T> {
    fn finish<E: de::Error>(value: WireValue) -> Result<T, E> {
        T::from_wire(value).map_err(E::custom)
    }
}

impl<'de, T: WireConvertible> Visitor<'de> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a {}", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        Self::finish(WireValue::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<T, E> {
        Self::finish(WireValue::String(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        Self::finish(WireValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        let value = i64::try_from(value)
            .map_err(|_| E::custom(SvoError::out_of_range(T::TYPE_NAME, value)))?;
        Self::finish(WireValue::Integer(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
        Self::finish(WireValue::Float(value))
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Self::finish(WireValue::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Self::finish(WireValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserialize_wire(deserializer)
    }
}
