//! The reflective encoder and JSON text writer

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use tracing::{debug, trace};

use super::capability::Emitted;
use super::table::{Access, Describe, MemberTable};
use crate::error::EncodeResult;

/// Ordered JSON object produced by the encoder. Key order is insertion
/// order.
pub type JsonObject = Map<String, Value>;

/// Object-safe encoding surface.
///
/// Blanket-implemented for every [`Describe`] type so nested tagged
/// objects recurse through `&dyn Encodable` without knowing each other's
/// concrete types.
pub trait Encodable {
    /// Resolve this value's tagged members into an ordered JSON object.
    fn encode_with(&self, encoder: &Encoder) -> EncodeResult<JsonObject>;
}

impl<T: Describe> Encodable for T {
    fn encode_with(&self, encoder: &Encoder) -> EncodeResult<JsonObject> {
        encoder.encode_table(T::table(), self)
    }
}

/// Reflective JSON encoder.
///
/// Walks a tagged object's resolved member table: collection members are
/// merged flatly into the output first (first key wins, so an entry from a
/// more derived collection blocks a same-named entry from a less derived
/// one), then scalar members follow under their own names, overwriting a
/// same-named collection entry. Null-valued scalars are omitted unless
/// [`include_nulls`](Encoder::include_nulls) is set. Timestamps and dates
/// are substituted by their ISO-8601 string forms.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    include_nulls: bool,
    indent: Option<usize>,
}

impl Encoder {
    /// Encoder with default options: nulls omitted, compact output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emit scalar members whose value is JSON null.
    #[must_use]
    pub fn include_nulls(mut self, include: bool) -> Self {
        self.include_nulls = include;
        self
    }

    /// Pretty-print with the given indent width instead of compact output.
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    /// Resolve a tagged object into an ordered JSON object.
    pub fn encode(&self, value: &dyn Encodable) -> EncodeResult<JsonObject> {
        value.encode_with(self)
    }

    /// Encode a tagged object to UTF-8 JSON text.
    ///
    /// No partial text is ever returned: the first member failure aborts
    /// the whole call.
    pub fn to_string(&self, value: &dyn Encodable) -> EncodeResult<String> {
        debug!(include_nulls = self.include_nulls, indent = ?self.indent, "encoding to JSON text");
        let object = self.encode(value)?;
        self.write(&Value::Object(object))
    }

    pub(crate) fn encode_table<T: 'static>(
        &self,
        table: &MemberTable<T>,
        value: &T,
    ) -> EncodeResult<JsonObject> {
        trace!(members = table.members().len(), "resolving member table");
        let mut output = JsonObject::new();

        // Collection members first, in table order. A key an earlier
        // collection already produced blocks the same key from a later
        // one.
        for member in table.members() {
            if let Access::Collection(accessor) = &member.access {
                for (key, emitted) in accessor(value) {
                    if output.contains_key(&key) {
                        continue;
                    }
                    let lowered = self.lower(emitted)?;
                    output.insert(key, lowered);
                }
            }
        }

        // Scalar members next. A scalar claims its name even when a
        // collection already produced it.
        for member in table.members() {
            if let Access::Scalar(accessor) = &member.access {
                let lowered = self.lower(accessor(value))?;
                if lowered.is_null() && !self.include_nulls {
                    continue;
                }
                output.insert(member.name().to_owned(), lowered);
            }
        }

        Ok(output)
    }

    fn lower(&self, emitted: Emitted<'_>) -> EncodeResult<Value> {
        match emitted {
            Emitted::Json(value) => Ok(value),
            Emitted::Timestamp(timestamp) => Ok(Value::String(timestamp.to_rfc3339())),
            Emitted::Date(date) => Ok(Value::String(date.format("%Y-%m-%d").to_string())),
            Emitted::Nested(nested) => Ok(Value::Object(self.encode(nested)?)),
            Emitted::NestedMap(entries) => {
                let mut object = JsonObject::new();
                for (name, nested) in entries {
                    object.insert(name, Value::Object(self.encode(nested)?));
                }
                Ok(Value::Object(object))
            }
        }
    }

    fn write(&self, value: &Value) -> EncodeResult<String> {
        match self.indent {
            None => Ok(serde_json::to_string(value)?),
            Some(width) => {
                let indent = " ".repeat(width);
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut buffer = Vec::new();
                let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
                value.serialize(&mut serializer)?;
                Ok(String::from_utf8(buffer)?)
            }
        }
    }
}
