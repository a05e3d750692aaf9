//! Generic structure conversion
//!
//! Converts a parsed JSON value tree into a typed internal representation:
//! objects whose keys all qualify as record fields become immutable
//! [`Record`]s, every other object stays a [`GenericMap`], arrays convert
//! element-wise preserving order, and scalars pass through unchanged.
//! Both mapping variants expose get-by-name, so the path evaluator
//! branches only on the union tag.
//!
//! Converted trees are transient — built per call, discarded after use,
//! never cached or shared.

pub mod record;
pub mod typed;

pub use self::{
    record::{GenericMap, Record},
    typed::TypedValue,
};

use crate::error::QueryResult;

/// Parse JSON text and convert it into the typed representation.
pub fn from_str(json: &str) -> QueryResult<TypedValue> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(TypedValue::from(value))
}
