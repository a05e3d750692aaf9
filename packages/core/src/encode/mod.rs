//! Reflective JSON encoding
//!
//! Declarative capability tagging lets arbitrary domain types opt into
//! JSON serialization without a shared serialization interface: each type
//! publishes a member table describing which accessors contribute scalar
//! properties and which contribute collections merged flatly into the
//! parent's output. The table is the resolved, definition-time view of the
//! type — built once, immutable, never invoking an accessor.
//!
//! [`Encoder`] walks the table at encode time, lowers member values to
//! `serde_json` data (timestamps become ISO-8601 strings), and recurses
//! through nested tagged objects.

pub mod capability;
pub mod encoder;
pub mod table;

pub use self::{
    capability::{Capability, Emitted},
    encoder::{Encodable, Encoder, JsonObject},
    table::{CollectionEntries, Describe, MemberDescriptor, MemberTable, MemberTableBuilder},
};
