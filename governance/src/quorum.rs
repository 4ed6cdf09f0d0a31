//! Quorum seeding for new proposals.
//!
//! Creation never special-cases the sole-editor path: it seeds the vote
//! counts from the proposer's status, then runs the same quorum check every
//! later approval runs.

/// Starting vote state of a proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuorumSeed {
    pub min_approvals: u64,
    pub approvals: u64,
    /// Whether the proposer is recorded as an approving voter.
    pub proposer_approves: bool,
}

impl QuorumSeed {
    pub fn quorum_met(&self) -> bool {
        self.approvals >= self.min_approvals
    }
}

pub fn seed(proposer_is_editor: bool, editor_count: u64) -> QuorumSeed {
    if !proposer_is_editor {
        return QuorumSeed {
            min_approvals: 1,
            approvals: 0,
            proposer_approves: false,
        };
    }
    QuorumSeed {
        min_approvals: if editor_count == 1 { 1 } else { 2 },
        approvals: 1,
        proposer_approves: true,
    }
}
