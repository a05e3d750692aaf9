//! HAL hypermedia documents
//!
//! The JSON Hypertext Application Language convention
//! (draft-kelly-json-hal-08): a document carries named [`Link`]s under the
//! reserved `_links` member, nested documents under `_embedded`, and its
//! own properties merged into the top level. Both types serialize through
//! the reflective encoder.

pub mod document;
pub mod link;

pub use self::{document::HalDocument, link::Link};
