use thiserror::Error;
use warden_calls::CallError;
use warden_types::{Address, PermissionId};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("{who} is not authorized to use {permission} on {on}")]
    Unauthorized {
        on: Address,
        who: Address,
        permission: PermissionId,
    },

    #[error("action {index} failed: {reason}")]
    ActionFailed { index: usize, reason: String },

    #[error("no contract at {0}")]
    UnknownTarget(Address),

    #[error("unsupported call {call} on {target}")]
    UnsupportedCall { target: Address, call: String },

    #[error("{target} reverted: {reason}")]
    Reverted { target: Address, reason: String },

    #[error("call codec error: {0}")]
    Call(#[from] CallError),
}
