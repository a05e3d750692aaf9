//! # halo core
//!
//! Reflective JSON encoding, dotted-bracket path queries, and the HAL
//! hypermedia document model.
//!
//! ## Components
//!
//! - **Capability tagging** — domain types opt into JSON serialization by
//!   publishing a member table of scalar and collection accessors, built
//!   once per type, instead of implementing a shared serialization
//!   interface ([`encode`]).
//! - **Reflective encoder** — resolves a tagged object's member table into
//!   an ordered JSON object and UTF-8 text, recursing through nested
//!   tagged objects ([`encode::Encoder`]).
//! - **Structure conversion** — turns parsed JSON into a typed tree where
//!   identifier-keyed objects become immutable records ([`convert`]).
//! - **Path engine** — tokenizer, filter-expression parser, and evaluator
//!   for expressions like `items[@id=3].name` ([`path`]).
//! - **HAL documents** — `_links`/`_embedded` hypermedia documents encoded
//!   through the reflective encoder ([`hal`]).
//!
//! All computation is synchronous and side-effect-free over in-memory
//! data. Member tables are immutable after first resolution, so distinct
//! object graphs may be encoded or queried concurrently without
//! coordination; a single document under construction is not safe for
//! concurrent mutation.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod convert;
pub mod encode;
pub mod error;
pub mod hal;
pub mod path;

pub use self::{
    convert::{GenericMap, Record, TypedValue, from_str},
    encode::{
        Capability, CollectionEntries, Describe, Emitted, Encodable, Encoder, JsonObject,
        MemberDescriptor, MemberTable, MemberTableBuilder,
    },
    error::{EncodeError, EncodeResult, QueryError, QueryResult},
    hal::{HalDocument, Link},
    path::{FilterToken, Token, evaluate, tokenize},
};
