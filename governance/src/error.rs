use thiserror::Error;
use warden_calls::CallError;
use warden_host::HostError;
use warden_types::{Address, PermissionId};

/// Why a vote on a proposal was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum VoteDenial {
    #[error("proposal not found")]
    ProposalNotFound,
    #[error("proposal already executed")]
    ProposalAlreadyExecuted,
    #[error("proposal expired")]
    ProposalExpired,
    #[error("voter is not an editor")]
    NotAnEditor,
    #[error("voter has already voted")]
    AlreadyVoted,
}

/// Why a proposal could not be executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ExecutionDenial {
    #[error("proposal not found")]
    ProposalNotFound,
    #[error("proposal already executed")]
    ProposalAlreadyExecuted,
    #[error("proposal expired")]
    ProposalExpired,
    #[error("quorum not met")]
    QuorumNotMet,
}

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("{who} cannot vote on proposal {id}: {reason}")]
    ApprovalCastForbidden {
        id: u64,
        who: Address,
        reason: VoteDenial,
    },

    #[error("proposal {id} cannot be executed: {reason}")]
    ProposalExecutionForbidden { id: u64, reason: ExecutionDenial },

    #[error("proposal {0} not found")]
    ProposalNotFound(u64),

    #[error("{0} is already a member")]
    MembershipAlreadyGranted(Address),

    #[error("{0} is not a member")]
    NotAMember(Address),

    #[error("{0} cannot create a proposal in the block the settings changed")]
    ProposalCreationForbidden(Address),

    #[error("{0} is not a compatible editor roster")]
    IncompatibleRoster(Address),

    #[error("{who} lacks {permission} on {on}")]
    Unauthorized {
        on: Address,
        who: Address,
        permission: PermissionId,
    },

    #[error("host execution failed: {0}")]
    Host(#[from] HostError),

    #[error("call encoding failed: {0}")]
    Call(#[from] CallError),

    #[error("configuration error: {0}")]
    Config(String),
}
