//! Path queries over converted JSON trees
//!
//! A small dotted-bracket language for navigating nested data: `.`, `[`
//! and `]` separate segments; a segment is a key lookup, a non-negative
//! array index, or an attribute filter over array elements:
//!
//! ```text
//! adr.street            key lookups
//! items[2]              positional index
//! items[@id]            first element carrying an `id` attribute
//! items[@id=3].name     first element whose `id` stringifies to "3"
//! ```
//!
//! This is deliberately not JSONPath: no root symbol, wildcards, slices,
//! unions, or recursive descent — just the subset above.

pub mod evaluator;
pub mod tokenizer;
pub mod tokens;

pub use self::{
    evaluator::evaluate,
    tokenizer::tokenize,
    tokens::{FilterToken, Token},
};
