//! A single (target, value, payload) call inside a batch.

use serde::{Deserialize, Serialize};
use warden_types::Address;

use crate::{Call, CallError};

/// One action the host runs as part of a batched `execute`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Contract the payload is delivered to.
    pub to: Address,
    /// Native value attached to the call.
    pub value: u128,
    /// Encoded call (see [`Call`]).
    pub data: Vec<u8>,
}

impl Action {
    pub fn new(to: Address, value: u128, data: Vec<u8>) -> Self {
        Self { to, value, data }
    }

    /// A zero-value action carrying `call` encoded for `to`.
    pub fn call(to: Address, call: &impl Call) -> Result<Self, CallError> {
        Ok(Self {
            to,
            value: 0,
            data: call.encode()?,
        })
    }
}
