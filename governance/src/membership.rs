//! Editor and member predicates over the roster, and the actions that change
//! membership.

use warden_calls::{Action, CallError, DaoCall};
use warden_host::Host;
use warden_types::{Address, MEMBER_PERMISSION_ID};

pub fn is_editor<H: Host + ?Sized>(host: &H, roster: &Address, who: &Address) -> bool {
    host.roster(roster).is_some_and(|r| r.is_editor(who))
}

/// Editors are members whether or not they hold MEMBER.
pub fn is_member<H: Host + ?Sized>(host: &H, roster: &Address, who: &Address) -> bool {
    is_editor(host, roster, who) || host.has_permission(roster, who, &MEMBER_PERMISSION_ID, &[])
}

pub fn editor_count<H: Host + ?Sized>(host: &H, roster: &Address) -> u64 {
    host.roster(roster).map_or(0, |r| r.editor_count())
}

/// The DAO call granting MEMBER on `roster` to `who`.
pub fn grant_member_action(dao: Address, roster: Address, who: Address) -> Result<Action, CallError> {
    Action::call(dao, &DaoCall::grant(roster, who, MEMBER_PERMISSION_ID))
}

/// The DAO call revoking MEMBER on `roster` from `who`.
pub fn revoke_member_action(
    dao: Address,
    roster: Address,
    who: Address,
) -> Result<Action, CallError> {
    Action::call(dao, &DaoCall::revoke(roster, who, MEMBER_PERMISSION_ID))
}
