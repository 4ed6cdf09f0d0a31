//! Multisig settings: voting window and editor roster.

use serde::{Deserialize, Serialize};
use warden_host::{Host, EDITOR_ROSTER_INTERFACE_ID};
use warden_types::Address;

use crate::GovernanceError;

/// Default voting window: 5 days.
pub const DEFAULT_PROPOSAL_DURATION_SECS: u64 = 5 * 24 * 60 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigSettings {
    /// Seconds after creation during which a proposal accepts votes.
    pub proposal_duration: u64,
    /// Address of the editor roster.
    pub roster: Address,
}

impl MultisigSettings {
    pub fn new(proposal_duration: u64, roster: Address) -> Self {
        Self {
            proposal_duration,
            roster,
        }
    }

    /// The roster must be deployed on `host` and advertise the roster interface.
    pub fn validate<H: Host + ?Sized>(&self, host: &H) -> Result<(), GovernanceError> {
        match host.roster(&self.roster) {
            Some(roster) if roster.supports_interface(EDITOR_ROSTER_INTERFACE_ID) => Ok(()),
            _ => Err(GovernanceError::IncompatibleRoster(self.roster)),
        }
    }
}
