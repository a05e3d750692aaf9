//! # halo
//!
//! Reflective JSON encoding with a HAL hypermedia document model and a
//! dotted-bracket path-query language for navigating parsed JSON.
//!
//! Domain types opt into JSON serialization by publishing a
//! capability-tagged member table ([`Describe`]) instead of implementing a
//! shared serialization interface; the [`Encoder`] resolves the table
//! reflectively, merging collection members flatly into the output and
//! recursing through nested tagged objects. On the inbound side, parsed
//! JSON converts into a typed tree ([`TypedValue`]) that path expressions
//! like `items[@id=3].name` navigate.
//!
//! ## Encoding a HAL resource
//!
//! ```rust
//! use halo::Hal;
//!
//! let mut order = Hal::resource("/orders/1");
//! order.add_property("total", 42);
//! order.add_link("cancel", "/orders/1/cancel");
//!
//! let json = order.to_json().expect("order serializes");
//! assert!(json.contains("\"_links\""));
//! assert!(json.contains("\"total\":42"));
//! ```
//!
//! ## Querying a document
//!
//! ```rust
//! use halo::read_json;
//!
//! let resolved = read_json(
//!     r#"{"items":[{"id":1,"name":"x"},{"id":3,"name":"y"}]}"#,
//!     Some("items[@id=3].name"),
//! )
//! .expect("path resolves");
//! assert_eq!(resolved.scalar_string().as_deref(), Some("y"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Re-export the public surface of the core implementation
pub use halo_core::{
    convert::{GenericMap, Record, TypedValue, from_str},
    encode::{
        Capability, CollectionEntries, Describe, Emitted, Encodable, Encoder, JsonObject,
        MemberDescriptor, MemberTable, MemberTableBuilder,
    },
    error::{EncodeError, EncodeResult, QueryError, QueryResult},
    hal::{HalDocument, Link},
    path::{FilterToken, Token, evaluate, tokenize},
};
use tracing::debug;

/// Encode a tagged object to compact JSON text with the default options
/// (nulls omitted).
pub fn to_json(value: &dyn Encodable) -> EncodeResult<String> {
    Encoder::new().to_string(value)
}

/// Encode a tagged object with explicit encoder options.
pub fn to_json_with(value: &dyn Encodable, encoder: &Encoder) -> EncodeResult<String> {
    encoder.to_string(value)
}

/// Parse JSON text and resolve an optional path against it.
///
/// With no path the whole converted tree is returned; with a path, the
/// value the path lands on.
pub fn read_json(json: &str, path: Option<&str>) -> QueryResult<TypedValue> {
    debug!(has_path = path.is_some(), "reading JSON document");
    let tree = from_str(json)?;
    match path {
        None => Ok(tree),
        Some(path) => evaluate(&tree, path).map(|value| value.clone()),
    }
}

/// Resolve a path against an already-converted tree.
pub fn query_value<'v>(root: &'v TypedValue, path: &str) -> QueryResult<&'v TypedValue> {
    evaluate(root, path)
}

/// Shorthand constructors for HAL building blocks.
pub struct Hal;

impl Hal {
    /// Empty document with no `self` link.
    #[must_use]
    pub fn document() -> HalDocument {
        HalDocument::new()
    }

    /// Document whose `self` link points at `href`.
    #[must_use]
    pub fn resource(href: &str) -> HalDocument {
        HalDocument::with_self_link(href)
    }

    /// Link pointing at `href`.
    #[must_use]
    pub fn link(href: &str) -> Link {
        Link::new(href)
    }
}
