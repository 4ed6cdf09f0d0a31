//! Nullable host DAO: permission registry plus batched executor, in memory.

use std::collections::HashMap;
use std::rc::Rc;

use warden_calls::{Action, Call, DaoCall, RosterCall};
use warden_host::{EditorRoster, Execution, Host, HostError, PermissionCondition};
use warden_types::{
    Address, BatchId, BlockHeight, PermissionId, Timestamp, EXECUTE_PERMISSION_ID,
    ROOT_PERMISSION_ID, UPDATE_ADDRESSES_PERMISSION_ID,
};

use crate::{NullClock, NullRoster};

/// Start time of every fresh [`NullDao`] clock.
pub const GENESIS_SECS: u64 = 1_700_000_000;

/// Events the host records, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DaoEvent {
    Granted {
        on: Address,
        who: Address,
        permission: PermissionId,
        conditional: bool,
    },
    Revoked {
        on: Address,
        who: Address,
        permission: PermissionId,
    },
    Executed {
        actor: Address,
        call_id: BatchId,
        actions: Vec<Action>,
        allow_failure_map: u128,
        failure_map: u128,
    },
    MetadataSet {
        metadata: Vec<u8>,
    },
    DaoUriSet {
        uri: String,
    },
    SignatureValidatorSet {
        validator: Address,
    },
    EditorsAdded {
        roster: Address,
        addresses: Vec<Address>,
    },
    EditorsRemoved {
        roster: Address,
        addresses: Vec<Address>,
    },
}

#[derive(Clone)]
enum Grant {
    Unconditional,
    Conditional(Rc<dyn PermissionCondition>),
}

/// (on, who, permission)
type GrantKey = (Address, Address, PermissionId);

/// Everything a failed batch must leave untouched.
#[derive(Clone, Default)]
struct State {
    grants: HashMap<GrantKey, Grant>,
    rosters: HashMap<Address, NullRoster>,
    metadata: Vec<u8>,
    dao_uri: String,
    signature_validator: Address,
}

/// An in-memory host DAO.
///
/// The DAO holds ROOT on itself from construction, so actions it executes may
/// grant and revoke. Direct `grant`/`revoke` calls on this type stand in for
/// deployment tooling and are not permission-checked.
pub struct NullDao {
    address: Address,
    clock: NullClock,
    state: State,
    events: Vec<DaoEvent>,
}

impl NullDao {
    pub fn new(address: Address) -> Self {
        let mut dao = Self {
            address,
            clock: NullClock::new(GENESIS_SECS),
            state: State::default(),
            events: Vec::new(),
        };
        dao.grant(address, address, ROOT_PERMISSION_ID);
        dao.events.clear();
        dao
    }

    pub fn clock(&self) -> &NullClock {
        &self.clock
    }

    /// Move to the next block.
    pub fn mine(&self) {
        self.clock.mine();
    }

    /// Advance time by `secs` without changing the block.
    pub fn advance(&self, secs: u64) {
        self.clock.advance(secs);
    }

    pub fn grant(&mut self, on: Address, who: Address, permission: PermissionId) {
        self.state
            .grants
            .insert((on, who, permission), Grant::Unconditional);
        self.events.push(DaoEvent::Granted {
            on,
            who,
            permission,
            conditional: false,
        });
    }

    /// Grant `permission` subject to `condition`, consulted on every use.
    pub fn grant_with_condition(
        &mut self,
        on: Address,
        who: Address,
        permission: PermissionId,
        condition: impl PermissionCondition + 'static,
    ) {
        self.state.grants.insert(
            (on, who, permission),
            Grant::Conditional(Rc::new(condition)),
        );
        self.events.push(DaoEvent::Granted {
            on,
            who,
            permission,
            conditional: true,
        });
    }

    pub fn revoke(&mut self, on: Address, who: Address, permission: PermissionId) {
        self.state.grants.remove(&(on, who, permission));
        self.events.push(DaoEvent::Revoked {
            on,
            who,
            permission,
        });
    }

    /// Deploy `roster` at its own address.
    pub fn install_roster(&mut self, roster: NullRoster) {
        self.state.rosters.insert(roster.address(), roster);
    }

    pub fn metadata(&self) -> &[u8] {
        &self.state.metadata
    }

    pub fn dao_uri(&self) -> &str {
        &self.state.dao_uri
    }

    pub fn events(&self) -> &[DaoEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<DaoEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of batches executed so far.
    pub fn executed_batches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DaoEvent::Executed { .. }))
            .count()
    }

    fn require(
        &self,
        on: Address,
        permission: PermissionId,
        data: &[u8],
    ) -> Result<(), HostError> {
        if self.has_permission(&on, &self.address, &permission, data) {
            Ok(())
        } else {
            Err(HostError::Unauthorized {
                on,
                who: self.address,
                permission,
            })
        }
    }

    /// Run one action with the DAO as the caller.
    fn dispatch(&mut self, action: &Action) -> Result<Vec<u8>, HostError> {
        if action.to == self.address {
            self.dispatch_dao(&action.data)
        } else if self.state.rosters.contains_key(&action.to) {
            self.dispatch_roster(action.to, &action.data)
        } else {
            Err(HostError::UnknownTarget(action.to))
        }
    }

    fn dispatch_dao(&mut self, data: &[u8]) -> Result<Vec<u8>, HostError> {
        let call = DaoCall::decode(data)?;
        self.require(self.address, ROOT_PERMISSION_ID, data)?;
        match call {
            DaoCall::Grant {
                on,
                who,
                permission,
            } => self.grant(on, who, permission),
            DaoCall::Revoke {
                on,
                who,
                permission,
            } => self.revoke(on, who, permission),
            DaoCall::SetMetadata { metadata } => {
                self.state.metadata = metadata.clone();
                self.events.push(DaoEvent::MetadataSet { metadata });
            }
            DaoCall::SetDaoUri { uri } => {
                self.state.dao_uri = uri.clone();
                self.events.push(DaoEvent::DaoUriSet { uri });
            }
            DaoCall::SetSignatureValidator { validator } => {
                self.state.signature_validator = validator;
                self.events
                    .push(DaoEvent::SignatureValidatorSet { validator });
            }
            call @ DaoCall::Execute { .. } => {
                return Err(HostError::UnsupportedCall {
                    target: self.address,
                    call: call.name().to_string(),
                })
            }
        }
        Ok(Vec::new())
    }

    fn dispatch_roster(&mut self, at: Address, data: &[u8]) -> Result<Vec<u8>, HostError> {
        let call = RosterCall::decode(data)?;
        self.require(at, UPDATE_ADDRESSES_PERMISSION_ID, data)?;
        let roster = self
            .state
            .rosters
            .get_mut(&at)
            .ok_or(HostError::UnknownTarget(at))?;
        let reverted = |e: crate::RosterError| HostError::Reverted {
            target: at,
            reason: e.to_string(),
        };
        match call {
            RosterCall::AddAddresses { addresses } => {
                roster.add_addresses(&addresses).map_err(reverted)?;
                self.events.push(DaoEvent::EditorsAdded {
                    roster: at,
                    addresses,
                });
            }
            RosterCall::RemoveAddresses { addresses } => {
                roster.remove_addresses(&addresses).map_err(reverted)?;
                self.events.push(DaoEvent::EditorsRemoved {
                    roster: at,
                    addresses,
                });
            }
        }
        Ok(Vec::new())
    }
}

impl Host for NullDao {
    fn address(&self) -> Address {
        self.address
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn block_height(&self) -> BlockHeight {
        self.clock.block_height()
    }

    fn has_permission(
        &self,
        on: &Address,
        who: &Address,
        permission: &PermissionId,
        data: &[u8],
    ) -> bool {
        match self.state.grants.get(&(*on, *who, *permission)) {
            Some(Grant::Unconditional) => true,
            Some(Grant::Conditional(condition)) => condition.is_granted(on, who, permission, data),
            None => false,
        }
    }

    fn execute(
        &mut self,
        caller: &Address,
        call_id: BatchId,
        actions: &[Action],
        allow_failure_map: u128,
    ) -> Result<Execution, HostError> {
        let payload = DaoCall::execute(call_id, actions.to_vec(), allow_failure_map).encode()?;
        if !self.has_permission(&self.address, caller, &EXECUTE_PERMISSION_ID, &payload) {
            tracing::debug!(%caller, %call_id, "execute denied");
            return Err(HostError::Unauthorized {
                on: self.address,
                who: *caller,
                permission: EXECUTE_PERMISSION_ID,
            });
        }

        let checkpoint = (self.state.clone(), self.events.len());
        let mut execution = Execution::default();
        for (index, action) in actions.iter().enumerate() {
            match self.dispatch(action) {
                Ok(result) => execution.results.push(result),
                Err(e) if index < 128 && allow_failure_map & (1u128 << index) != 0 => {
                    tracing::debug!(index, error = %e, "allowed action failure");
                    execution.failure_map |= 1u128 << index;
                    execution.results.push(Vec::new());
                }
                Err(e) => {
                    let (state, events) = checkpoint;
                    self.state = state;
                    self.events.truncate(events);
                    return Err(HostError::ActionFailed {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        self.events.push(DaoEvent::Executed {
            actor: *caller,
            call_id,
            actions: actions.to_vec(),
            allow_failure_map,
            failure_map: execution.failure_map,
        });
        Ok(execution)
    }

    fn roster(&self, at: &Address) -> Option<&dyn EditorRoster> {
        self.state
            .rosters
            .get(at)
            .map(|roster| roster as &dyn EditorRoster)
    }
}
