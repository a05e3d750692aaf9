//! Capability tags and member values
//!
//! A capability tag marks how one named member of a type participates in
//! serialization. Accessors never build JSON text themselves; they yield
//! an [`Emitted`] value and the encoder does the lowering.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use super::encoder::Encodable;
use crate::error::{EncodeError, EncodeResult};

/// How a tagged member participates in the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// One named value stored under the member's own name.
    Scalar,
    /// A mapping of name/value pairs merged flatly into the parent output.
    Collection,
}

/// Value yielded by a member accessor before JSON lowering.
pub enum Emitted<'a> {
    /// Plain JSON data, passed through unchanged.
    Json(Value),
    /// Timestamp, lowered to its ISO-8601 string form.
    Timestamp(DateTime<Utc>),
    /// Calendar date, lowered to its ISO-8601 string form.
    Date(NaiveDate),
    /// Nested tagged object, encoded recursively with the same options.
    Nested(&'a dyn Encodable),
    /// Ordered mapping of nested tagged objects.
    NestedMap(Vec<(String, &'a dyn Encodable)>),
}

impl std::fmt::Debug for Emitted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Emitted::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Emitted::Timestamp(ts) => f.debug_tuple("Timestamp").field(ts).finish(),
            Emitted::Date(date) => f.debug_tuple("Date").field(date).finish(),
            Emitted::Nested(_) => f.debug_tuple("Nested").finish_non_exhaustive(),
            Emitted::NestedMap(entries) => f
                .debug_tuple("NestedMap")
                .field(&entries.iter().map(|(k, _)| k).collect::<Vec<_>>())
                .finish(),
        }
    }
}

impl Emitted<'_> {
    /// Bridge an arbitrary [`Serialize`] value into the encoder.
    ///
    /// Fails with [`EncodeError::UnsupportedType`] when the value has no
    /// JSON representation (non-finite floats, non-string map keys, ...).
    pub fn from_serialize<T: Serialize>(value: &T) -> EncodeResult<Self> {
        serde_json::to_value(value)
            .map(Emitted::Json)
            .map_err(|e| EncodeError::UnsupportedType(e.to_string()))
    }
}

impl From<Value> for Emitted<'_> {
    fn from(value: Value) -> Self {
        Emitted::Json(value)
    }
}

impl From<&str> for Emitted<'_> {
    fn from(value: &str) -> Self {
        Emitted::Json(Value::String(value.to_owned()))
    }
}

impl From<String> for Emitted<'_> {
    fn from(value: String) -> Self {
        Emitted::Json(Value::String(value))
    }
}

impl From<bool> for Emitted<'_> {
    fn from(value: bool) -> Self {
        Emitted::Json(Value::Bool(value))
    }
}

impl From<i32> for Emitted<'_> {
    fn from(value: i32) -> Self {
        Emitted::Json(Value::from(value))
    }
}

impl From<i64> for Emitted<'_> {
    fn from(value: i64) -> Self {
        Emitted::Json(Value::from(value))
    }
}

impl From<u32> for Emitted<'_> {
    fn from(value: u32) -> Self {
        Emitted::Json(Value::from(value))
    }
}

impl From<u64> for Emitted<'_> {
    fn from(value: u64) -> Self {
        Emitted::Json(Value::from(value))
    }
}

impl From<DateTime<Utc>> for Emitted<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Emitted::Timestamp(value)
    }
}

impl From<NaiveDate> for Emitted<'_> {
    fn from(value: NaiveDate) -> Self {
        Emitted::Date(value)
    }
}

/// `None` lowers to JSON null, which the encoder omits for scalar members
/// unless nulls are explicitly included.
impl<'a, T> From<Option<T>> for Emitted<'a>
where
    Emitted<'a>: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Emitted::from(inner),
            None => Emitted::Json(Value::Null),
        }
    }
}

/// Finite floats only; NaN and the infinities have no JSON form.
impl TryFrom<f64> for Emitted<'_> {
    type Error = EncodeError;

    fn try_from(value: f64) -> EncodeResult<Self> {
        serde_json::Number::from_f64(value)
            .map(|n| Emitted::Json(Value::Number(n)))
            .ok_or_else(|| {
                EncodeError::UnsupportedType(format!("non-finite float {value} has no JSON form"))
            })
    }
}
