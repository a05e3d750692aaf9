//! HAL document model

use once_cell::sync::Lazy;
use serde_json::Value;

use super::link::Link;
use crate::encode::{CollectionEntries, Describe, Emitted, Encodable, Encoder, MemberTable};
use crate::error::EncodeResult;

/// A HAL document: named links, embedded documents, and plain properties.
///
/// The reserved `_links` and `_embedded` output members come from scalar
/// accessors; the properties mapping is merged flatly into the top level
/// through a collection accessor. `_links` is always present (possibly
/// empty); `_embedded` is omitted entirely while no documents are
/// embedded.
///
/// Each mutator is last-write-wins by key and preserves insertion order;
/// there is no removal operation. A document under construction is not
/// safe for concurrent mutation — confine it to one thread of control or
/// serialize access externally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalDocument {
    links: Vec<(String, Link)>,
    embedded: Vec<(String, HalDocument)>,
    properties: Vec<(String, Value)>,
}

impl HalDocument {
    /// New document with no links, embedded documents, or properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New document whose `self` link points at the given target.
    #[must_use]
    pub fn with_self_link(link: impl Into<Link>) -> Self {
        let mut document = Self::new();
        document.set_self_link(link);
        document
    }

    /// The `self` link, when one has been set.
    #[must_use]
    pub fn self_link(&self) -> Option<&Link> {
        self.links
            .iter()
            .find(|(name, _)| name == "self")
            .map(|(_, link)| link)
    }

    /// Point the `self` link at a new target.
    pub fn set_self_link(&mut self, link: impl Into<Link>) -> &mut Self {
        self.add_link("self", link)
    }

    /// Add or replace a named link. A bare string becomes a link with
    /// that `href`.
    pub fn add_link(&mut self, name: impl Into<String>, link: impl Into<Link>) -> &mut Self {
        upsert(&mut self.links, name.into(), link.into());
        self
    }

    /// Add or replace an embedded document under `name`.
    pub fn add_embedded(&mut self, name: impl Into<String>, document: HalDocument) -> &mut Self {
        upsert(&mut self.embedded, name.into(), document);
        self
    }

    /// Add or replace a plain property.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        upsert(&mut self.properties, name.into(), value.into());
        self
    }

    /// Named links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.links.iter().map(|(name, link)| (name.as_str(), link))
    }

    /// Embedded documents in insertion order.
    pub fn embedded(&self) -> impl Iterator<Item = (&str, &HalDocument)> {
        self.embedded
            .iter()
            .map(|(name, document)| (name.as_str(), document))
    }

    /// Plain properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Compact JSON text with default options (nulls omitted).
    pub fn to_json(&self) -> EncodeResult<String> {
        Encoder::new().to_string(self)
    }

    /// Pretty JSON text indented by `width` spaces.
    pub fn to_json_pretty(&self, width: usize) -> EncodeResult<String> {
        Encoder::new().indent(width).to_string(self)
    }
}

fn upsert<V>(entries: &mut Vec<(String, V)>, name: String, value: V) {
    if let Some(entry) = entries.iter_mut().find(|(existing, _)| *existing == name) {
        entry.1 = value;
    } else {
        entries.push((name, value));
    }
}

fn emit_links(document: &HalDocument) -> Emitted<'_> {
    Emitted::NestedMap(
        document
            .links
            .iter()
            .map(|(name, link)| (name.clone(), link as &dyn Encodable))
            .collect(),
    )
}

fn emit_embedded(document: &HalDocument) -> Emitted<'_> {
    if document.embedded.is_empty() {
        // Lowers to null, which the default options omit entirely.
        return Emitted::Json(Value::Null);
    }
    Emitted::NestedMap(
        document
            .embedded
            .iter()
            .map(|(name, nested)| (name.clone(), nested as &dyn Encodable))
            .collect(),
    )
}

fn emit_properties(document: &HalDocument) -> CollectionEntries<'_> {
    document
        .properties
        .iter()
        .map(|(name, value)| (name.clone(), Emitted::Json(value.clone())))
        .collect()
}

impl Describe for HalDocument {
    fn table() -> &'static MemberTable<Self> {
        static TABLE: Lazy<MemberTable<HalDocument>> = Lazy::new(|| {
            MemberTable::builder()
                .collection("properties", emit_properties)
                .scalar("_links", emit_links)
                .scalar("_embedded", emit_embedded)
                .build()
        });
        &TABLE
    }
}
