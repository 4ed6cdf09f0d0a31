//! Membership governance for a host DAO.
//!
//! Editors (listed on an external roster) vote on proposals that admit or
//! remove members. Each proposal carries exactly one action, a grant or
//! revoke of MEMBER on the roster, which the host DAO runs once enough
//! editors approve.
//!
//! Quorum depends on who proposes:
//! - a non-editor needs one editor approval;
//! - an editor counts as the first approval and needs one more, unless they
//!   are the only editor, in which case the proposal executes on creation.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod membership;
pub mod proposal;
pub mod quorum;
pub mod settings;

pub use config::PluginConfig;
pub use engine::MemberAccessPlugin;
pub use error::{ExecutionDenial, GovernanceError, VoteDenial};
pub use events::MemberAccessEvent;
pub use proposal::{ProposalParameters, ProposalView, Vote};
pub use quorum::QuorumSeed;
pub use settings::{MultisigSettings, DEFAULT_PROPOSAL_DURATION_SECS};
