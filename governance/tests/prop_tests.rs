//! Property tests for quorum seeding, vote uniqueness and finality.

mod common;

use common::*;
use proptest::prelude::*;
use warden_governance::{GovernanceError, VoteDenial};
use warden_types::Address;

fn editors(n: usize) -> Vec<Address> {
    (0..n).map(|i| Address::derive(&format!("editor-{i}"))).collect()
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Approve { voter: usize, try_execute: bool },
    Reject { voter: usize },
    Execute,
}

fn op(voters: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..voters, any::<bool>()).prop_map(|(voter, try_execute)| Op::Approve { voter, try_execute }),
        (0..voters).prop_map(|voter| Op::Reject { voter }),
        Just(Op::Execute),
    ]
}

proptest! {
    /// min_approvals/approvals depend only on proposer status and editor count,
    /// and only a sole editor's proposal executes on creation.
    #[test]
    fn quorum_seed_follows_proposer_and_roster(n in 1usize..7, by_editor in any::<bool>()) {
        let editors = editors(n);
        let Fixture { mut dao, mut plugin } = setup(&editors);
        let proposer = if by_editor { editors[0] } else { Address::derive("outsider") };

        let id = plugin
            .propose_new_member(&mut dao, &proposer, metadata(), Address::derive("candidate"))
            .unwrap();
        let proposal = plugin.get_proposal(id).unwrap();

        let (min, approvals) = match (by_editor, n) {
            (false, _) => (1, 0),
            (true, 1) => (1, 1),
            (true, _) => (2, 1),
        };
        prop_assert_eq!(proposal.parameters.min_approvals, min);
        prop_assert_eq!(proposal.approvals, approvals);
        prop_assert_eq!(proposal.executed, by_editor && n == 1);
        prop_assert_eq!(plugin.has_approved(id, &proposer), by_editor);
        prop_assert_eq!(
            plugin.is_member(&dao, &Address::derive("candidate")),
            by_editor && n == 1
        );
    }

    /// Every address votes successfully at most once, nothing succeeds after
    /// execution, and `executed` never reverts.
    #[test]
    fn votes_are_unique_and_execution_is_final(
        n in 2usize..6,
        ops in prop::collection::vec(op(7), 1..24),
    ) {
        let editors = editors(n);
        let mut voters = editors.clone();
        voters.push(Address::derive("outsider"));
        voters.push(Address::derive("candidate"));
        let Fixture { mut dao, mut plugin } = setup(&editors);

        let id = plugin
            .propose_new_member(&mut dao, &voters[n], metadata(), Address::derive("candidate"))
            .unwrap();

        let mut voted = std::collections::BTreeSet::new();
        let mut executed = false;
        for op in ops {
            match op {
                Op::Approve { voter, try_execute } => {
                    let who = voters[voter % voters.len()];
                    let expected_ok = !executed && voter % voters.len() < n && !voted.contains(&who);
                    let result = plugin.approve(&mut dao, &who, id, try_execute);
                    prop_assert_eq!(result.is_ok(), expected_ok);
                    if let Err(GovernanceError::ApprovalCastForbidden { reason, .. }) = &result {
                        if executed {
                            prop_assert_eq!(*reason, VoteDenial::ProposalAlreadyExecuted);
                        }
                    }
                    if expected_ok {
                        voted.insert(who);
                        executed |= try_execute;
                    }
                }
                Op::Reject { voter } => {
                    let who = voters[voter % voters.len()];
                    let expected_ok = !executed && voter % voters.len() < n && !voted.contains(&who);
                    prop_assert_eq!(plugin.reject(&mut dao, &who, id, true).is_ok(), expected_ok);
                    if expected_ok {
                        voted.insert(who);
                    }
                }
                Op::Execute => {
                    let quorum = plugin.get_proposal(id).unwrap().approvals >= 1;
                    let expected_ok = !executed && quorum;
                    prop_assert_eq!(plugin.execute(&mut dao, id).is_ok(), expected_ok);
                    executed |= expected_ok;
                }
            }
            let proposal = plugin.get_proposal(id).unwrap();
            prop_assert_eq!(proposal.executed, executed);
            prop_assert_eq!(proposal.approvals + proposal.rejections, voted.len() as u64);
        }
    }
}
