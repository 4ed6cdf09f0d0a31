//! Membership proposals and their vote bookkeeping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use warden_calls::Action;
use warden_types::{Address, BlockHeight, Timestamp};

/// A final vote. Votes cannot be changed or retracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vote {
    Approve,
    Reject,
}

/// Parameters fixed when the proposal is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalParameters {
    pub min_approvals: u64,
    /// Block before the one the proposal was created in.
    pub snapshot_block: BlockHeight,
    pub start_date: Timestamp,
    /// Last instant (inclusive) at which votes are accepted.
    pub end_date: Timestamp,
}

#[derive(Clone, Debug)]
pub(crate) struct Proposal {
    pub creator: Address,
    pub metadata: Vec<u8>,
    pub actions: Vec<Action>,
    pub allow_failure_map: u128,
    pub parameters: ProposalParameters,
    pub approvals: u64,
    pub rejections: u64,
    pub voters: BTreeMap<Address, Vote>,
    pub executed: bool,
}

impl Proposal {
    pub fn new(
        creator: Address,
        metadata: Vec<u8>,
        actions: Vec<Action>,
        parameters: ProposalParameters,
    ) -> Self {
        Self {
            creator,
            metadata,
            actions,
            allow_failure_map: 0,
            parameters,
            approvals: 0,
            rejections: 0,
            voters: BTreeMap::new(),
            executed: false,
        }
    }

    /// Record `who`'s vote. The caller has already checked they have not voted.
    pub fn record_vote(&mut self, who: Address, vote: Vote) {
        match vote {
            Vote::Approve => self.approvals += 1,
            Vote::Reject => self.rejections += 1,
        }
        self.voters.insert(who, vote);
    }

    pub fn has_voted(&self, who: &Address) -> bool {
        self.voters.contains_key(who)
    }

    pub fn has_approved(&self, who: &Address) -> bool {
        self.voters.get(who) == Some(&Vote::Approve)
    }

    pub fn quorum_met(&self) -> bool {
        self.approvals >= self.parameters.min_approvals
    }

    pub fn is_open(&self, now: Timestamp) -> bool {
        now <= self.parameters.end_date
    }

    pub fn view(&self) -> ProposalView {
        ProposalView {
            executed: self.executed,
            approvals: self.approvals,
            rejections: self.rejections,
            parameters: self.parameters,
            creator: self.creator,
            metadata: self.metadata.clone(),
            actions: self.actions.clone(),
            allow_failure_map: self.allow_failure_map,
        }
    }
}

/// Read-only snapshot of a proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    pub executed: bool,
    pub approvals: u64,
    pub rejections: u64,
    pub parameters: ProposalParameters,
    pub creator: Address,
    pub metadata: Vec<u8>,
    pub actions: Vec<Action>,
    pub allow_failure_map: u128,
}
