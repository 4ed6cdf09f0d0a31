//! Address-list mutators of the editor roster.

use serde::{Deserialize, Serialize};
use warden_types::Address;

use crate::{Call, InterfaceTag};

/// A call addressed to the editor roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterCall {
    /// Add editors.
    AddAddresses { addresses: Vec<Address> },
    /// Remove editors.
    RemoveAddresses { addresses: Vec<Address> },
}

impl Call for RosterCall {
    const INTERFACE: InterfaceTag = *b"RST\x01";
}
