//! Call codec: interface tag plus strict bincode body.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::CallError;

/// Maximum encoded call body in bytes.
pub const MAX_CALL_SIZE: u64 = 1024 * 1024; // 1 MiB

/// Four bytes identifying which contract interface a payload targets.
pub type InterfaceTag = [u8; 4];

/// A call that can be carried in an action payload.
pub trait Call: Serialize + DeserializeOwned {
    /// Tag written in front of every encoded call of this family.
    const INTERFACE: InterfaceTag;

    fn encode(&self) -> Result<Vec<u8>, CallError> {
        encode_call(&Self::INTERFACE, self)
    }

    fn decode(data: &[u8]) -> Result<Self, CallError> {
        decode_call(&Self::INTERFACE, data)
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_CALL_SIZE)
        .reject_trailing_bytes()
}

/// Encode `call` behind `interface`.
pub fn encode_call<T: Serialize + ?Sized>(
    interface: &InterfaceTag,
    call: &T,
) -> Result<Vec<u8>, CallError> {
    let body = options()
        .serialize(call)
        .map_err(|e| CallError::Encode(e.to_string()))?;
    let mut out = Vec::with_capacity(interface.len() + body.len());
    out.extend_from_slice(interface);
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decode a payload that must start with `interface` and contain exactly one call.
pub fn decode_call<T: DeserializeOwned>(
    interface: &InterfaceTag,
    data: &[u8],
) -> Result<T, CallError> {
    if data.len() < interface.len() {
        return Err(CallError::Truncated(data.len()));
    }
    let (tag, body) = data.split_at(interface.len());
    if tag != interface {
        return Err(CallError::UnknownInterface(hex::encode(tag)));
    }
    options()
        .deserialize(body)
        .map_err(|e| CallError::Malformed(e.to_string()))
}
