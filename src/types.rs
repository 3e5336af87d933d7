use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ERC-4337 UserOperation request params, as handed to us by the caller.
///
/// Field names are snake_case. Every field is optional and opaque: values are
/// whatever JSON the caller sent (usually hex or decimal strings), and are never
/// parsed here. Unknown keys are ignored on deserialization. An explicit
/// `null` is indistinguishable from an absent key.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserOperationRequest {
    pub sender: Option<Value>,
    pub nonce: Option<Value>,
    pub init_code: Option<Value>,
    pub call_data: Option<Value>,
    pub call_gas_limit: Option<Value>,
    pub verification_gas_limit: Option<Value>,
    pub pre_verification_gas: Option<Value>,
    pub max_fee_per_gas: Option<Value>,
    pub max_priority_fee_per_gas: Option<Value>,
    pub paymaster_and_data: Option<Value>,
    pub signature: Option<Value>,
}

/// ERC-4337 UserOperation message in bundler JSON-RPC naming (EntryPoint v0.6 layout).
///
/// Always serializes all eleven keys; absent values go out as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOperationMessage {
    pub sender: Option<Value>,
    pub nonce: Option<Value>,
    pub init_code: Option<Value>,
    pub call_data: Option<Value>,
    pub call_gas_limit: Option<Value>,
    pub verification_gas_limit: Option<Value>,
    pub pre_verification_gas: Option<Value>,
    pub max_fee_per_gas: Option<Value>,
    pub max_priority_fee_per_gas: Option<Value>,
    pub paymaster_and_data: Option<Value>,
    pub signature: Option<Value>,
}

impl From<UserOperationRequest> for UserOperationMessage {
    fn from(req: UserOperationRequest) -> Self {
        Self {
            sender: req.sender,
            nonce: req.nonce,
            init_code: req.init_code,
            call_data: req.call_data,
            call_gas_limit: req.call_gas_limit,
            verification_gas_limit: req.verification_gas_limit,
            pre_verification_gas: req.pre_verification_gas,
            max_fee_per_gas: req.max_fee_per_gas,
            max_priority_fee_per_gas: req.max_priority_fee_per_gas,
            paymaster_and_data: req.paymaster_and_data,
            signature: req.signature,
        }
    }
}
