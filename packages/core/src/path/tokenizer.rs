//! Path tokenizer and filter-expression parser
//!
//! Splits a path string on `.`, `[` and `]`, discards empty segments, and
//! classifies each remaining segment: all digits → positional index,
//! leading `@` → filter expression, anything else → key lookup. Parser
//! failures abort the whole query with no partial result.

use tracing::trace;

use super::tokens::{FilterToken, Token};
use crate::error::{QueryError, QueryResult};

/// Split a path into navigation tokens.
pub fn tokenize(path: &str) -> QueryResult<Vec<Token>> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> QueryResult<Token> {
    if let Some(expression) = segment.strip_prefix('@') {
        return parse_filter(segment, expression);
    }
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        let index = segment.parse::<usize>().map_err(|_| {
            QueryError::invalid_expression(format!("index literal `{segment}` is out of range"))
        })?;
        return Ok(Token::Index(index));
    }
    Ok(Token::Key(segment.to_owned()))
}

/// Parse the fixed `@<name>[=<value>]` filter shape. There is no quoting
/// or escaping; an empty value after `=` degrades to an existence test.
fn parse_filter(segment: &str, expression: &str) -> QueryResult<Token> {
    let (path, value) = match expression.split_once('=') {
        None => (expression, None),
        Some((path, value)) => (path, (!value.is_empty()).then(|| value.to_owned())),
    };
    if path.is_empty() {
        return Err(QueryError::invalid_expression(format!(
            "filter segment `{segment}` must match `@name` or `@name=value`"
        )));
    }
    trace!(path, ?value, "parsed filter segment");
    Ok(Token::Filter(FilterToken {
        path: path.to_owned(),
        value,
    }))
}
