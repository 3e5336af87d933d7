use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    /// Params were not a JSON object (e.g. `null`, an array, a bare string).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The shaped message could not be turned back into JSON.
    #[error("failed to encode message: {0}")]
    Encode(serde_json::Error),
}

/// Human-readable JSON kind, used in error messages.
pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
