//! Path evaluation state machine
//!
//! Walks tokens against a converted tree. The state is the current value
//! plus the remaining tokens; the machine is terminal when the tokens are
//! exhausted and the current value is returned. Filter resolution
//! re-enters the evaluator against individual array elements, each
//! invocation carrying its own local state — nothing is shared or cached
//! across calls.

use tracing::{debug, trace};

use super::tokenizer::tokenize;
use super::tokens::{FilterToken, Token};
use crate::convert::TypedValue;
use crate::error::{QueryError, QueryResult};

/// Resolve `path` against `root`, returning the value the final token
/// lands on.
pub fn evaluate<'v>(root: &'v TypedValue, path: &str) -> QueryResult<&'v TypedValue> {
    debug!(path, "evaluating path");
    let tokens = tokenize(path)?;
    walk(root, &tokens)
}

fn walk<'v>(root: &'v TypedValue, tokens: &[Token]) -> QueryResult<&'v TypedValue> {
    let mut current = root;
    for token in tokens {
        current = step(current, token)?;
    }
    Ok(current)
}

fn step<'v>(current: &'v TypedValue, token: &Token) -> QueryResult<&'v TypedValue> {
    match (current, token) {
        (TypedValue::Array(items), Token::Index(index)) => items.get(*index).ok_or_else(|| {
            QueryError::index(format!(
                "{index} out of bounds for array of length {}",
                items.len()
            ))
        }),
        (TypedValue::Array(items), Token::Filter(filter)) => select_match(items, filter),
        (TypedValue::Array(_), Token::Key(key)) => Err(QueryError::invalid_expression(format!(
            "array segment `{key}` must be an index or an `@` filter"
        ))),
        // A numeric segment against a mapping is a key lookup by its
        // decimal form.
        (TypedValue::Record(_) | TypedValue::Map(_), Token::Index(index)) => {
            lookup(current, &index.to_string())
        }
        (TypedValue::Record(_) | TypedValue::Map(_), Token::Key(key)) => lookup(current, key),
        (TypedValue::Record(_) | TypedValue::Map(_), Token::Filter(filter)) => Err(
            QueryError::key(format!("filter `@{}` applied to a non-array value", filter.path)),
        ),
        (_, Token::Key(key)) => Err(QueryError::key(format!(
            "`{key}` cannot index into a scalar value"
        ))),
        (_, Token::Index(index)) => Err(QueryError::key(format!(
            "index {index} cannot be applied to a scalar value"
        ))),
        (_, Token::Filter(filter)) => Err(QueryError::key(format!(
            "filter `@{}` cannot be applied to a scalar value",
            filter.path
        ))),
    }
}

fn lookup<'v>(current: &'v TypedValue, key: &str) -> QueryResult<&'v TypedValue> {
    current
        .get(key)
        .ok_or_else(|| QueryError::key(format!("`{key}` not found")))
}

/// Select the first array element whose filter path resolves and, when a
/// literal is given, whose resolved value's string form equals it.
///
/// Resolution failures against one candidate are caught locally and mean
/// "try the next element"; only the aggregate miss surfaces to the
/// caller. Comparison is string-only: the resolved scalar is stringified
/// and compared to the literal, so `3` and `"3"` are indistinguishable.
fn select_match<'v>(items: &'v [TypedValue], filter: &FilterToken) -> QueryResult<&'v TypedValue> {
    let tokens = tokenize(&filter.path)?;
    for item in items {
        let Ok(resolved) = walk(item, &tokens) else {
            continue;
        };
        let matched = match &filter.value {
            None => true,
            Some(literal) => resolved.scalar_string().is_some_and(|s| s == *literal),
        };
        if matched {
            trace!(path = filter.path.as_str(), "filter matched element");
            return Ok(item);
        }
    }
    Err(QueryError::index(format!(
        "no matching element for expression `@{}`",
        filter.path
    )))
}
