//! The typed value union

use serde_json::Value;
use tracing::debug;

use super::record::{GenericMap, Record, is_record_key};

/// Typed representation of a converted JSON tree.
///
/// The record-or-map decision is made once per object node at conversion
/// time; consumers branch on the union tag, never on the concrete
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Immutable field-named aggregate from an identifier-keyed object.
    Record(Record),
    /// Ordered fallback mapping for any other object.
    Map(GenericMap),
    /// Array, elements converted recursively in order.
    Array(Vec<TypedValue>),
    /// Null, boolean, number, or string, unchanged.
    Scalar(Value),
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                TypedValue::Array(items.into_iter().map(TypedValue::from).collect())
            }
            Value::Object(object) => {
                let record_safe = object.keys().all(|key| is_record_key(key));
                let fields: Vec<(String, TypedValue)> = object
                    .into_iter()
                    .map(|(key, value)| (key, TypedValue::from(value)))
                    .collect();
                if record_safe {
                    TypedValue::Record(Record::new(fields))
                } else {
                    debug!("object keys are not record-safe, using generic map");
                    TypedValue::Map(GenericMap::new(fields))
                }
            }
            scalar => TypedValue::Scalar(scalar),
        }
    }
}

impl TypedValue {
    /// Child value by key on either mapping variant.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        match self {
            TypedValue::Record(record) => record.field(key),
            TypedValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// The underlying scalar, when this is a scalar node.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            TypedValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// String form used by filter-expression equality: scalars only,
    /// numbers and booleans in their JSON text form, strings without
    /// quotes, null as `null`. Composite values have no string form and
    /// never match a filter literal.
    #[must_use]
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            TypedValue::Scalar(Value::Null) => Some("null".to_owned()),
            TypedValue::Scalar(Value::Bool(b)) => Some(b.to_string()),
            TypedValue::Scalar(Value::Number(n)) => Some(n.to_string()),
            TypedValue::Scalar(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Convert back into a plain `serde_json::Value`, preserving order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            TypedValue::Record(record) => Value::Object(
                record
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            TypedValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            TypedValue::Array(items) => {
                Value::Array(items.iter().map(TypedValue::to_json).collect())
            }
            TypedValue::Scalar(value) => value.clone(),
        }
    }
}
