//! Token definitions for path expressions

/// One navigation step of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Positional index into an array segment.
    Index(usize),
    /// Key or field lookup on a map or record.
    Key(String),
    /// Attribute filter over array elements.
    Filter(FilterToken),
}

/// Parsed `@name[=value]` filter segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToken {
    /// Attribute path resolved against each candidate array element; a
    /// path expression in its own right, re-tokenized at evaluation time.
    pub path: String,
    /// Literal the resolved value's string form must equal, or `None` for
    /// a bare existence test.
    pub value: Option<String>,
}
