//! Entry points of the host DAO.

use serde::{Deserialize, Serialize};
use warden_types::{Address, BatchId, PermissionId};

use crate::{Action, Call, InterfaceTag};

/// A call addressed to the DAO contract itself.
///
/// In `Grant`/`Revoke`, `on` is the contract the permission applies to
/// (the registry's "where"), `who` the address receiving or losing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaoCall {
    /// Run a batch of actions atomically.
    Execute {
        call_id: BatchId,
        actions: Vec<Action>,
        /// Bit `i` set means action `i` may fail without reverting the batch.
        allow_failure_map: u128,
    },
    Grant {
        on: Address,
        who: Address,
        permission: PermissionId,
    },
    Revoke {
        on: Address,
        who: Address,
        permission: PermissionId,
    },
    SetMetadata {
        metadata: Vec<u8>,
    },
    SetDaoUri {
        uri: String,
    },
    SetSignatureValidator {
        validator: Address,
    },
}

impl Call for DaoCall {
    const INTERFACE: InterfaceTag = *b"DAO\x01";
}

impl DaoCall {
    pub fn execute(call_id: BatchId, actions: Vec<Action>, allow_failure_map: u128) -> Self {
        Self::Execute {
            call_id,
            actions,
            allow_failure_map,
        }
    }

    pub fn grant(on: Address, who: Address, permission: PermissionId) -> Self {
        Self::Grant {
            on,
            who,
            permission,
        }
    }

    pub fn revoke(on: Address, who: Address, permission: PermissionId) -> Self {
        Self::Revoke {
            on,
            who,
            permission,
        }
    }

    /// Short name of the entry point, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Execute { .. } => "execute",
            Self::Grant { .. } => "grant",
            Self::Revoke { .. } => "revoke",
            Self::SetMetadata { .. } => "setMetadata",
            Self::SetDaoUri { .. } => "setDaoURI",
            Self::SetSignatureValidator { .. } => "setSignatureValidator",
        }
    }
}
