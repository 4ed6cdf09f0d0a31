use warden_calls::{Action, Call, DaoCall};
use warden_host::PermissionCondition;
use warden_types::{Address, PermissionId, MEMBER_PERMISSION_ID};

/// Why a payload was denied. Only ever logged; callers see a plain `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Denial {
    /// The payload is not a well-formed batched `execute` call.
    NotABatch,
    /// The batch carries no actions.
    EmptyBatch,
    /// An action payload is not a well-formed DAO call.
    UndecodableAction { index: usize },
    /// An action calls a DAO entry point other than grant/revoke.
    ForbiddenCall { index: usize, call: &'static str },
    /// A grant/revoke targets a contract other than the configured one.
    WrongContract { index: usize, on: Address },
    /// A grant/revoke concerns a permission other than MEMBER.
    WrongPermission { index: usize, permission: PermissionId },
}

/// Allows a batched `execute` only when every action grants or revokes
/// MEMBER on `target_contract`, to any address.
#[derive(Clone, Debug)]
pub struct MemberAccessCondition {
    target_contract: Address,
}

impl MemberAccessCondition {
    pub fn new(target_contract: Address) -> Self {
        Self { target_contract }
    }

    pub fn target_contract(&self) -> Address {
        self.target_contract
    }

    /// Decide on a call payload. Whitelist only: every shape not matched
    /// below is a denial.
    pub fn check(&self, data: &[u8]) -> Result<(), Denial> {
        let actions = match DaoCall::decode(data) {
            Ok(DaoCall::Execute { actions, .. }) => actions,
            _ => return Err(Denial::NotABatch),
        };
        if actions.is_empty() {
            return Err(Denial::EmptyBatch);
        }
        actions
            .iter()
            .enumerate()
            .try_for_each(|(index, action)| self.check_action(index, action))
    }

    fn check_action(&self, index: usize, action: &Action) -> Result<(), Denial> {
        let call =
            DaoCall::decode(&action.data).map_err(|_| Denial::UndecodableAction { index })?;
        match call {
            DaoCall::Grant { on, permission, .. } | DaoCall::Revoke { on, permission, .. } => {
                if on != self.target_contract {
                    return Err(Denial::WrongContract { index, on });
                }
                if permission != MEMBER_PERMISSION_ID {
                    return Err(Denial::WrongPermission { index, permission });
                }
                Ok(())
            }
            other => Err(Denial::ForbiddenCall {
                index,
                call: other.name(),
            }),
        }
    }
}

impl PermissionCondition for MemberAccessCondition {
    fn is_granted(
        &self,
        on: &Address,
        who: &Address,
        permission: &PermissionId,
        data: &[u8],
    ) -> bool {
        match self.check(data) {
            Ok(()) => true,
            Err(denial) => {
                tracing::debug!(
                    %on,
                    %who,
                    %permission,
                    target = %self.target_contract,
                    ?denial,
                    "member access condition denied call"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_calls::RosterCall;
    use warden_types::{
        BatchId, EDITOR_PERMISSION_ID, EXECUTE_PERMISSION_ID, ROOT_PERMISSION_ID,
    };

    const ADDRESS_ONE: Address = Address::from_low_u64(1);
    const ADDRESS_TWO: Address = Address::from_low_u64(2);

    fn target() -> Address {
        Address::derive("some-contract")
    }

    fn dao() -> Address {
        Address::derive("dao")
    }

    fn condition() -> MemberAccessCondition {
        MemberAccessCondition::new(target())
    }

    fn batch(calls: &[DaoCall]) -> Vec<u8> {
        let actions = calls
            .iter()
            .map(|call| Action::call(dao(), call).unwrap())
            .collect();
        DaoCall::execute(BatchId::from_proposal_id(1), actions, 0)
            .encode()
            .unwrap()
    }

    fn granted(data: &[u8]) -> bool {
        condition().is_granted(&ADDRESS_ONE, &ADDRESS_TWO, &EXECUTE_PERMISSION_ID, data)
    }

    #[test]
    fn allows_member_grant_and_revoke_on_target() {
        let carol = Address::derive("carol");
        assert!(granted(&batch(&[DaoCall::grant(target(), carol, MEMBER_PERMISSION_ID)])));
        assert!(granted(&batch(&[DaoCall::revoke(target(), carol, MEMBER_PERMISSION_ID)])));
    }

    #[test]
    fn only_grant_and_revoke_are_allowed() {
        let others = [
            DaoCall::SetDaoUri {
                uri: "ipfs://".into(),
            },
            DaoCall::SetMetadata {
                metadata: b"ipfs://".to_vec(),
            },
            DaoCall::SetSignatureValidator {
                validator: ADDRESS_ONE,
            },
        ];
        for call in others {
            let name = call.name();
            assert_eq!(
                condition().check(&batch(&[call])),
                Err(Denial::ForbiddenCall { index: 0, call: name })
            );
        }
    }

    #[test]
    fn only_member_permission_is_allowed() {
        let carol = Address::derive("carol");
        for permission in [
            EDITOR_PERMISSION_ID,
            ROOT_PERMISSION_ID,
            EXECUTE_PERMISSION_ID,
            PermissionId::from_label("DEPLOYER"),
        ] {
            assert!(!granted(&batch(&[DaoCall::grant(target(), carol, permission)])));
            assert!(!granted(&batch(&[DaoCall::revoke(target(), carol, permission)])));
        }
    }

    #[test]
    fn only_the_target_contract_is_allowed() {
        let carol = Address::derive("carol");
        for on in [ADDRESS_TWO, dao(), Address::ZERO] {
            assert_eq!(
                condition().check(&batch(&[DaoCall::grant(on, carol, MEMBER_PERMISSION_ID)])),
                Err(Denial::WrongContract { index: 0, on })
            );
            assert!(!granted(&batch(&[DaoCall::revoke(on, carol, MEMBER_PERMISSION_ID)])));
        }
    }

    #[test]
    fn any_grantee_is_allowed() {
        for who in [target(), Address::derive("bob"), dao(), ADDRESS_ONE] {
            assert!(granted(&batch(&[DaoCall::grant(target(), who, MEMBER_PERMISSION_ID)])));
            assert!(granted(&batch(&[DaoCall::revoke(target(), who, MEMBER_PERMISSION_ID)])));
        }
    }

    #[test]
    fn direct_grant_and_revoke_are_rejected() {
        let carol = Address::derive("carol");
        let grant = DaoCall::grant(target(), carol, MEMBER_PERMISSION_ID);
        let revoke = DaoCall::revoke(target(), carol, MEMBER_PERMISSION_ID);
        assert_eq!(condition().check(&grant.encode().unwrap()), Err(Denial::NotABatch));
        assert!(!granted(&revoke.encode().unwrap()));
    }

    #[test]
    fn one_bad_action_voids_the_batch() {
        let carol = Address::derive("carol");
        let data = batch(&[
            DaoCall::grant(target(), carol, MEMBER_PERMISSION_ID),
            DaoCall::SetMetadata {
                metadata: b"ipfs://".to_vec(),
            },
        ]);
        assert_eq!(
            condition().check(&data),
            Err(Denial::ForbiddenCall {
                index: 1,
                call: "setMetadata"
            })
        );
    }

    #[test]
    fn several_valid_actions_are_allowed() {
        let data = batch(&[
            DaoCall::grant(target(), Address::derive("carol"), MEMBER_PERMISSION_ID),
            DaoCall::revoke(target(), Address::derive("dave"), MEMBER_PERMISSION_ID),
        ]);
        assert!(granted(&data));
    }

    #[test]
    fn empty_batch_is_denied() {
        assert_eq!(condition().check(&batch(&[])), Err(Denial::EmptyBatch));
    }

    #[test]
    fn nested_execute_is_denied() {
        let inner = DaoCall::execute(BatchId::ZERO, Vec::new(), 0);
        assert!(!granted(&batch(&[inner])));
    }

    #[test]
    fn non_dao_action_payload_is_denied() {
        let roster_call = RosterCall::AddAddresses {
            addresses: vec![ADDRESS_ONE],
        };
        let action = Action::call(target(), &roster_call).unwrap();
        let data = DaoCall::execute(BatchId::ZERO, vec![action], 0)
            .encode()
            .unwrap();
        assert_eq!(
            condition().check(&data),
            Err(Denial::UndecodableAction { index: 0 })
        );
    }

    #[test]
    fn malformed_payloads_are_denied() {
        let mut trailing = batch(&[DaoCall::grant(
            target(),
            ADDRESS_ONE,
            MEMBER_PERMISSION_ID,
        )]);
        trailing.push(0);
        assert!(!granted(&trailing));
        assert!(!granted(&[]));
        assert!(!granted(b"DAO"));
        assert!(!granted(b"\xde\xad\xbe\xef\x00\x01"));
    }
}
