//! Membership proposal engine: proposal records, editor votes and execution
//! through the host DAO.

use warden_calls::Action;
use warden_host::Host;
use warden_types::{
    Address, BatchId, BlockHeight, UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
};

use crate::error::{ExecutionDenial, GovernanceError, VoteDenial};
use crate::events::MemberAccessEvent;
use crate::membership;
use crate::proposal::{Proposal, ProposalParameters, ProposalView, Vote};
use crate::quorum;
use crate::settings::MultisigSettings;

/// State to restore when an operation fails half-way.
struct Checkpoint {
    proposals: usize,
    events: usize,
    touched: Option<(usize, Proposal)>,
}

/// A membership plugin installed on one host DAO.
///
/// Every operation takes the host explicitly. The host never holds a
/// reference back to the plugin, so it cannot re-enter it while executing.
pub struct MemberAccessPlugin {
    address: Address,
    dao: Address,
    settings: MultisigSettings,
    /// Block of the last settings change; no proposals may be created in it.
    last_settings_change: BlockHeight,
    proposals: Vec<Proposal>,
    /// Pending events for the runtime to process.
    pending_events: Vec<MemberAccessEvent>,
}

impl MemberAccessPlugin {
    /// Create the plugin at `address`, bound to `host`.
    ///
    /// This is the only way to obtain a plugin, so it cannot be initialized twice.
    pub fn initialize<H: Host + ?Sized>(
        address: Address,
        host: &H,
        settings: MultisigSettings,
    ) -> Result<Self, GovernanceError> {
        settings.validate(host)?;
        let mut plugin = Self {
            address,
            dao: host.address(),
            settings,
            last_settings_change: host.block_height(),
            proposals: Vec::new(),
            pending_events: Vec::new(),
        };
        plugin.settings_updated();
        tracing::info!(plugin = %address, dao = %plugin.dao, roster = %settings.roster, "member access plugin initialized");
        Ok(plugin)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn dao(&self) -> Address {
        self.dao
    }

    pub fn settings(&self) -> &MultisigSettings {
        &self.settings
    }

    pub fn proposal_count(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn get_proposal(&self, id: u64) -> Result<ProposalView, GovernanceError> {
        self.proposal(id)
            .map(Proposal::view)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn is_editor<H: Host + ?Sized>(&self, host: &H, who: &Address) -> bool {
        membership::is_editor(host, &self.settings.roster, who)
    }

    pub fn is_member<H: Host + ?Sized>(&self, host: &H, who: &Address) -> bool {
        membership::is_member(host, &self.settings.roster, who)
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MemberAccessEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Proposals ──────────────────────────────────────────────────────

    /// Propose granting MEMBER to `candidate`. Returns the proposal id.
    pub fn propose_new_member<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        caller: &Address,
        metadata: Vec<u8>,
        candidate: Address,
    ) -> Result<u64, GovernanceError> {
        if self.is_member(&*host, &candidate) {
            return Err(GovernanceError::MembershipAlreadyGranted(candidate));
        }
        let action = membership::grant_member_action(self.dao, self.settings.roster, candidate)?;
        self.create_proposal(host, caller, metadata, action)
    }

    /// Propose revoking MEMBER from `member`. Returns the proposal id.
    pub fn propose_remove_member<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        caller: &Address,
        metadata: Vec<u8>,
        member: Address,
    ) -> Result<u64, GovernanceError> {
        if !self.is_member(&*host, &member) {
            return Err(GovernanceError::NotAMember(member));
        }
        let action = membership::revoke_member_action(self.dao, self.settings.roster, member)?;
        self.create_proposal(host, caller, metadata, action)
    }

    fn create_proposal<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        caller: &Address,
        metadata: Vec<u8>,
        action: Action,
    ) -> Result<u64, GovernanceError> {
        let block = host.block_height();
        if self.last_settings_change >= block {
            return Err(GovernanceError::ProposalCreationForbidden(*caller));
        }

        let roster = self.settings.roster;
        let seed = quorum::seed(
            membership::is_editor(&*host, &roster, caller),
            membership::editor_count(&*host, &roster),
        );
        let start_date = host.now();
        let parameters = ProposalParameters {
            min_approvals: seed.min_approvals,
            snapshot_block: block.previous(),
            start_date,
            end_date: start_date.saturating_add(self.settings.proposal_duration),
        };
        let mut proposal = Proposal::new(*caller, metadata, vec![action], parameters);
        if seed.proposer_approves {
            proposal.record_vote(*caller, Vote::Approve);
        }
        debug_assert_eq!(proposal.approvals, seed.approvals);

        self.atomically(None, |this| {
            let id = this.proposal_count();
            this.pending_events.push(MemberAccessEvent::ProposalCreated {
                proposal_id: id,
                creator: *caller,
                start_date,
                end_date: parameters.end_date,
                metadata: proposal.metadata.clone(),
                actions: proposal.actions.clone(),
                allow_failure_map: proposal.allow_failure_map,
            });
            let quorum_met = proposal.quorum_met();
            this.proposals.push(proposal);
            tracing::info!(
                proposal_id = id,
                creator = %caller,
                min_approvals = seed.min_approvals,
                approvals = seed.approvals,
                "membership proposal created"
            );

            if quorum_met {
                this.execute_unchecked(host, id)?;
            }
            Ok(id)
        })
    }

    // ── Votes ──────────────────────────────────────────────────────────

    /// Approve proposal `id` as `caller`, executing it if `try_execute` is set
    /// and the approval reaches quorum.
    pub fn approve<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        caller: &Address,
        id: u64,
        try_execute: bool,
    ) -> Result<(), GovernanceError> {
        self.cast(&*host, caller, id, Vote::Approve)?;
        self.atomically(Some(id), |this| {
            this.record(caller, id, Vote::Approve)?;
            if try_execute && this.execution_gate(&*host, id).is_ok() {
                this.execute_unchecked(host, id)?;
            }
            Ok(())
        })
    }

    /// Reject proposal `id` as `caller`.
    ///
    /// A rejection never executes anything; `_try_execute` exists only so
    /// both vote entry points take the same arguments.
    pub fn reject<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        caller: &Address,
        id: u64,
        _try_execute: bool,
    ) -> Result<(), GovernanceError> {
        self.cast(&*host, caller, id, Vote::Reject)?;
        self.record(caller, id, Vote::Reject)
    }

    pub fn can_approve<H: Host + ?Sized>(&self, host: &H, id: u64, who: &Address) -> bool {
        self.vote_gate(host, id, who).is_ok()
    }

    pub fn can_execute<H: Host + ?Sized>(&self, host: &H, id: u64) -> bool {
        self.execution_gate(host, id).is_ok()
    }

    /// Whether `who` approved proposal `id`. Rejections do not count.
    pub fn has_approved(&self, id: u64, who: &Address) -> bool {
        self.proposal(id).is_some_and(|p| p.has_approved(who))
    }

    fn cast<H: Host + ?Sized>(
        &self,
        host: &H,
        caller: &Address,
        id: u64,
        vote: Vote,
    ) -> Result<(), GovernanceError> {
        self.vote_gate(host, id, caller).map_err(|reason| {
            tracing::debug!(proposal_id = id, who = %caller, ?vote, %reason, "vote refused");
            GovernanceError::ApprovalCastForbidden {
                id,
                who: *caller,
                reason,
            }
        })
    }

    fn record(&mut self, caller: &Address, id: u64, vote: Vote) -> Result<(), GovernanceError> {
        let proposal = self
            .proposal_mut(id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        proposal.record_vote(*caller, vote);
        let (approvals, rejections) = (proposal.approvals, proposal.rejections);
        let event = match vote {
            Vote::Approve => MemberAccessEvent::Approved {
                proposal_id: id,
                editor: *caller,
            },
            Vote::Reject => MemberAccessEvent::Rejected {
                proposal_id: id,
                editor: *caller,
            },
        };
        self.pending_events.push(event);
        tracing::info!(proposal_id = id, editor = %caller, ?vote, approvals, rejections, "vote cast");
        Ok(())
    }

    fn vote_gate<H: Host + ?Sized>(
        &self,
        host: &H,
        id: u64,
        who: &Address,
    ) -> Result<(), VoteDenial> {
        let proposal = self.proposal(id).ok_or(VoteDenial::ProposalNotFound)?;
        if proposal.executed {
            return Err(VoteDenial::ProposalAlreadyExecuted);
        }
        if !proposal.is_open(host.now()) {
            return Err(VoteDenial::ProposalExpired);
        }
        if !self.is_editor(host, who) {
            return Err(VoteDenial::NotAnEditor);
        }
        if proposal.has_voted(who) {
            return Err(VoteDenial::AlreadyVoted);
        }
        Ok(())
    }

    // ── Execution ──────────────────────────────────────────────────────

    /// Execute proposal `id` once it has reached quorum. Anyone may call this.
    pub fn execute<H: Host + ?Sized>(&mut self, host: &mut H, id: u64) -> Result<(), GovernanceError> {
        self.execution_gate(&*host, id).map_err(|reason| {
            tracing::debug!(proposal_id = id, %reason, "execution refused");
            GovernanceError::ProposalExecutionForbidden { id, reason }
        })?;
        self.atomically(Some(id), |this| this.execute_unchecked(host, id))
    }

    fn execution_gate<H: Host + ?Sized>(&self, host: &H, id: u64) -> Result<(), ExecutionDenial> {
        let proposal = self.proposal(id).ok_or(ExecutionDenial::ProposalNotFound)?;
        if proposal.executed {
            return Err(ExecutionDenial::ProposalAlreadyExecuted);
        }
        if !proposal.is_open(host.now()) {
            return Err(ExecutionDenial::ProposalExpired);
        }
        if !proposal.quorum_met() {
            return Err(ExecutionDenial::QuorumNotMet);
        }
        Ok(())
    }

    /// Mark the proposal executed, then hand its actions to the host.
    fn execute_unchecked<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        id: u64,
    ) -> Result<(), GovernanceError> {
        let proposal = self
            .proposal_mut(id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        proposal.executed = true;
        let actions = proposal.actions.clone();
        let allow_failure_map = proposal.allow_failure_map;

        let execution = host.execute(
            &self.address,
            BatchId::from_proposal_id(id),
            &actions,
            allow_failure_map,
        )?;
        self.pending_events
            .push(MemberAccessEvent::ProposalExecuted { proposal_id: id });
        tracing::info!(proposal_id = id, failure_map = execution.failure_map, "proposal executed");
        Ok(())
    }

    // ── Settings ───────────────────────────────────────────────────────

    /// Replace the settings. `caller` must hold UPDATE_MULTISIG_SETTINGS on
    /// the plugin, which in practice only the DAO does.
    pub fn update_multisig_settings<H: Host + ?Sized>(
        &mut self,
        host: &H,
        caller: &Address,
        settings: MultisigSettings,
    ) -> Result<(), GovernanceError> {
        if !host.has_permission(
            &self.address,
            caller,
            &UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
            &[],
        ) {
            return Err(GovernanceError::Unauthorized {
                on: self.address,
                who: *caller,
                permission: UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
            });
        }
        settings.validate(host)?;
        self.settings = settings;
        self.last_settings_change = host.block_height();
        self.settings_updated();
        tracing::info!(
            plugin = %self.address,
            roster = %settings.roster,
            proposal_duration = settings.proposal_duration,
            "multisig settings updated"
        );
        Ok(())
    }

    fn settings_updated(&mut self) {
        self.pending_events
            .push(MemberAccessEvent::MultisigSettingsUpdated {
                proposal_duration: self.settings.proposal_duration,
                roster: self.settings.roster,
            });
    }

    // ── Helpers ────────────────────────────────────────────────────────

    fn proposal(&self, id: u64) -> Option<&Proposal> {
        let index = usize::try_from(id).ok()?;
        self.proposals.get(index)
    }

    fn proposal_mut(&mut self, id: u64) -> Option<&mut Proposal> {
        let index = usize::try_from(id).ok()?;
        self.proposals.get_mut(index)
    }

    /// Run `op`, undoing every change it made to the plugin if it fails.
    fn atomically<T>(
        &mut self,
        touched: Option<u64>,
        op: impl FnOnce(&mut Self) -> Result<T, GovernanceError>,
    ) -> Result<T, GovernanceError> {
        let checkpoint = Checkpoint {
            proposals: self.proposals.len(),
            events: self.pending_events.len(),
            touched: touched.and_then(|id| {
                let index = usize::try_from(id).ok()?;
                self.proposal(id).map(|p| (index, p.clone()))
            }),
        };
        let result = op(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.proposals.truncate(checkpoint.proposals);
        self.pending_events.truncate(checkpoint.events);
        if let Some((index, proposal)) = checkpoint.touched {
            if let Some(slot) = self.proposals.get_mut(index) {
                *slot = proposal;
            }
        }
    }
}
