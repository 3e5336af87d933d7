use crate::error::{json_kind, ShapeError};
use crate::types::{UserOperationMessage, UserOperationRequest};
use serde_json::Value;

/// Rename snake_case request params into a camelCase UserOperation message.
///
/// Pure and total: values are moved across verbatim, absent stays absent.
pub fn shape(req: UserOperationRequest) -> UserOperationMessage {
    UserOperationMessage::from(req)
}

/// Shape loosely typed params.
///
/// Only a JSON object is accepted; anything else (including `null`) is an
/// `InvalidArgument` rather than an all-absent message.
pub fn shape_value(params: Value) -> Result<UserOperationMessage, ShapeError> {
    // serde would happily read a JSON array positionally into the struct
    let obj = match params {
        Value::Object(obj) => obj,
        other => {
            return Err(ShapeError::InvalidArgument(format!(
                "expected params object, got {}",
                json_kind(&other)
            )))
        }
    };

    let req: UserOperationRequest = serde_json::from_value(Value::Object(obj))
        .map_err(|e| ShapeError::InvalidArgument(e.to_string()))?;
    Ok(shape(req))
}
