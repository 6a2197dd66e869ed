//! Serialized-value codec
//!
//! Turns cache values into the opaque payloads a remote store holds and
//! back. Payloads are plain JSON with no version header.

use cachet_domain::error::Result;
use serde_json::Value;

/// Serialize a value into a store payload
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Deserialize a store payload
pub fn decode(payload: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(payload)?)
}
