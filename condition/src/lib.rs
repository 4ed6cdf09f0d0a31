//! Member access execute condition.
//!
//! Attached to the EXECUTE grant a membership plugin holds on its DAO, so the
//! plugin can only ever make the DAO grant or revoke MEMBER on one roster.
//! Anything else the plugin could try to run through the DAO is denied.

mod member_access;

pub use member_access::{Denial, MemberAccessCondition};
