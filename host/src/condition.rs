//! Permission conditions consulted by the host's permission registry.

use warden_types::{Address, PermissionId};

/// A guard attached to a conditional grant.
///
/// The host calls it whenever `who` tries to exercise `permission` on `on`,
/// passing the exact payload of the call being authorized. Returning `false`
/// denies the call; conditions never explain why.
pub trait PermissionCondition {
    fn is_granted(&self, on: &Address, who: &Address, permission: &PermissionId, data: &[u8])
        -> bool;
}
