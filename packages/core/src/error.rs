//! Error taxonomy for encoding and path queries
//!
//! Two deterministic error families: [`QueryError`] for the inbound
//! parse/convert/evaluate side and [`EncodeError`] for the outbound
//! reflective encoder. Every failure is a pure function of the input;
//! there are no transient conditions and therefore no retry policy.

/// Inbound failures: malformed documents, malformed path expressions, and
/// navigation misses.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A path segment starting with `@` does not match the fixed
    /// `@name[=value]` shape, or a segment cannot be applied to the
    /// current value's shape.
    #[error("invalid expression in path segment: {0}")]
    InvalidExpression(String),

    /// Array index out of bounds, or no array element matched a filter.
    #[error("invalid array index: {0}")]
    Index(String),

    /// Missing map key or record field, or navigation attempted past a
    /// scalar.
    #[error("invalid key: {0}")]
    Key(String),

    /// The document text was not valid JSON.
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for inbound operations.
pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    pub(crate) fn invalid_expression(msg: impl Into<String>) -> Self {
        QueryError::InvalidExpression(msg.into())
    }

    pub(crate) fn index(msg: impl Into<String>) -> Self {
        QueryError::Index(msg.into())
    }

    pub(crate) fn key(msg: impl Into<String>) -> Self {
        QueryError::Key(msg.into())
    }
}

/// Outbound failures raised while encoding a tagged object.
///
/// The encoder never returns partial text: the first failure aborts the
/// whole serialization call.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A member value has no JSON representation.
    #[error("unsupported value: {0}")]
    UnsupportedType(String),

    /// The JSON text writer failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The writer produced bytes that were not valid UTF-8.
    #[error("encoded document was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias for outbound operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
