//! Events emitted by the plugin, drained by the embedding runtime.

use serde::{Deserialize, Serialize};
use warden_calls::Action;
use warden_types::{Address, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberAccessEvent {
    /// Settings were installed, at initialization or by an update.
    MultisigSettingsUpdated {
        proposal_duration: u64,
        roster: Address,
    },
    ProposalCreated {
        proposal_id: u64,
        creator: Address,
        start_date: Timestamp,
        end_date: Timestamp,
        metadata: Vec<u8>,
        actions: Vec<Action>,
        allow_failure_map: u128,
    },
    Approved {
        proposal_id: u64,
        editor: Address,
    },
    Rejected {
        proposal_id: u64,
        editor: Address,
    },
    ProposalExecuted {
        proposal_id: u64,
    },
}
