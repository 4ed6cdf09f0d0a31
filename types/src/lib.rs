//! Fundamental types for the Warden governance workspace.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! addresses, logical time, permission identifiers and batch ids.

pub mod address;
pub mod error;
pub mod hash;
pub mod permission;
pub mod time;

pub use address::Address;
pub use error::TypesError;
pub use hash::BatchId;
pub use permission::{
    PermissionId, EDITOR_PERMISSION_ID, EXECUTE_PERMISSION_ID, MEMBER_PERMISSION_ID,
    ROOT_PERMISSION_ID, UPDATE_ADDRESSES_PERMISSION_ID, UPDATE_MULTISIG_SETTINGS_PERMISSION_ID,
};
pub use time::{BlockHeight, Timestamp};
