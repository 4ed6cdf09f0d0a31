//! Shared fixture: an in-memory DAO with an editor roster and an installed
//! member access plugin whose EXECUTE grant is guarded by the condition.

#![allow(dead_code)]

use warden_condition::MemberAccessCondition;
use warden_governance::{MemberAccessPlugin, MultisigSettings};
use warden_nullables::{NullDao, NullRoster};
use warden_types::{
    Address, EXECUTE_PERMISSION_ID, UPDATE_ADDRESSES_PERMISSION_ID,
    UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
};
use warden_utils::LogFormat;

/// Voting window used by every fixture.
pub const DURATION: u64 = 3600;

pub fn dao_address() -> Address {
    Address::derive("dao")
}

pub fn roster_address() -> Address {
    Address::derive("roster")
}

pub fn plugin_address() -> Address {
    Address::derive("member-access-plugin")
}

pub fn alice() -> Address {
    Address::derive("alice")
}

pub fn bob() -> Address {
    Address::derive("bob")
}

pub fn carol() -> Address {
    Address::derive("carol")
}

pub fn dave() -> Address {
    Address::derive("dave")
}

pub fn metadata() -> Vec<u8> {
    b"ipfs://1234".to_vec()
}

pub struct Fixture {
    pub dao: NullDao,
    pub plugin: MemberAccessPlugin,
}

/// A DAO with a roster listing `editors` and no MEMBER grants, mined one
/// block past plugin initialization so proposals can be created.
pub fn setup(editors: &[Address]) -> Fixture {
    // Several tests share the process; only the first install succeeds.
    let _ = warden_utils::try_init_logging(LogFormat::Human, "warn");

    let mut dao = NullDao::new(dao_address());
    dao.install_roster(NullRoster::new(roster_address(), editors.iter().copied()));
    dao.grant(roster_address(), dao_address(), UPDATE_ADDRESSES_PERMISSION_ID);
    dao.grant(
        plugin_address(),
        dao_address(),
        UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
    );
    install_guarded_execute(&mut dao, roster_address());

    let plugin = MemberAccessPlugin::initialize(
        plugin_address(),
        &dao,
        MultisigSettings::new(DURATION, roster_address()),
    )
    .expect("roster is compatible");
    dao.mine();
    dao.drain_events();

    let mut fixture = Fixture { dao, plugin };
    fixture.plugin.drain_events();
    fixture
}

/// Give the plugin EXECUTE on the DAO, guarded by a condition scoped to `target`.
pub fn install_guarded_execute(dao: &mut NullDao, target: Address) {
    dao.grant_with_condition(
        dao_address(),
        plugin_address(),
        EXECUTE_PERMISSION_ID,
        MemberAccessCondition::new(target),
    );
}
