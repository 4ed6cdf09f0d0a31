//! The host DAO runtime.

use warden_calls::Action;
use warden_types::{Address, BatchId, BlockHeight, PermissionId, Timestamp};

use crate::{EditorRoster, HostError};

/// Outcome of a successful batched execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Execution {
    /// Return data of each action, in order (empty for failed allowed actions).
    pub results: Vec<Vec<u8>>,
    /// Bit `i` set means action `i` failed and was allowed to.
    pub failure_map: u128,
}

/// The DAO runtime a plugin is installed on.
///
/// Calls are serialized: each method runs to completion before the next one
/// starts, and `execute` is all-or-nothing unless a failure is allowed by
/// `allow_failure_map`.
pub trait Host {
    /// Address of the DAO contract.
    fn address(&self) -> Address;

    /// Logical time of the call being processed.
    fn now(&self) -> Timestamp;

    /// Block the call being processed belongs to.
    fn block_height(&self) -> BlockHeight;

    /// Whether `who` may exercise `permission` on `on` for a call carrying `data`.
    ///
    /// Conditional grants consult their [`PermissionCondition`](crate::PermissionCondition)
    /// with `data`.
    fn has_permission(
        &self,
        on: &Address,
        who: &Address,
        permission: &PermissionId,
        data: &[u8],
    ) -> bool;

    /// Run `actions` on behalf of `caller`, who must hold EXECUTE on the DAO
    /// for exactly this batch.
    fn execute(
        &mut self,
        caller: &Address,
        call_id: BatchId,
        actions: &[Action],
        allow_failure_map: u128,
    ) -> Result<Execution, HostError>;

    /// The roster deployed at `at`, if any.
    fn roster(&self, at: &Address) -> Option<&dyn EditorRoster>;
}
