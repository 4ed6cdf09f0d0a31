//! Nullable editor roster: an in-memory address list.

use std::collections::BTreeSet;

use thiserror::Error;
use warden_host::{EditorRoster, InterfaceId, EDITOR_ROSTER_INTERFACE_ID};
use warden_types::Address;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("{0} is already an editor")]
    AlreadyListed(Address),

    #[error("{0} is not an editor")]
    NotListed(Address),

    #[error("the roster cannot be left without editors")]
    WouldBeEmpty,
}

/// An in-memory editor roster.
///
/// Updates are all-or-nothing: a list containing one bad address changes
/// nothing.
#[derive(Clone, Debug)]
pub struct NullRoster {
    address: Address,
    editors: BTreeSet<Address>,
    compatible: bool,
}

impl NullRoster {
    pub fn new(address: Address, editors: impl IntoIterator<Item = Address>) -> Self {
        Self {
            address,
            editors: editors.into_iter().collect(),
            compatible: true,
        }
    }

    /// A contract at `address` that does not advertise the roster interface.
    pub fn incompatible(address: Address) -> Self {
        Self {
            address,
            editors: BTreeSet::new(),
            compatible: false,
        }
    }

    pub fn editors(&self) -> impl Iterator<Item = &Address> {
        self.editors.iter()
    }

    pub fn add_addresses(&mut self, addresses: &[Address]) -> Result<(), RosterError> {
        let mut next = self.editors.clone();
        for address in addresses {
            if !next.insert(*address) {
                return Err(RosterError::AlreadyListed(*address));
            }
        }
        self.editors = next;
        Ok(())
    }

    pub fn remove_addresses(&mut self, addresses: &[Address]) -> Result<(), RosterError> {
        let mut next = self.editors.clone();
        for address in addresses {
            if !next.remove(address) {
                return Err(RosterError::NotListed(*address));
            }
        }
        if next.is_empty() {
            return Err(RosterError::WouldBeEmpty);
        }
        self.editors = next;
        Ok(())
    }
}

impl EditorRoster for NullRoster {
    fn address(&self) -> Address {
        self.address
    }

    fn supports_interface(&self, interface: InterfaceId) -> bool {
        self.compatible && interface == EDITOR_ROSTER_INTERFACE_ID
    }

    fn is_editor(&self, who: &Address) -> bool {
        self.editors.contains(who)
    }

    fn editor_count(&self) -> u64 {
        self.editors.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> NullRoster {
        NullRoster::new(
            Address::derive("roster"),
            [Address::derive("alice"), Address::derive("bob")],
        )
    }

    #[test]
    fn advertises_the_roster_interface_only() {
        let roster = roster();
        assert!(roster.supports_interface(EDITOR_ROSTER_INTERFACE_ID));
        assert!(!roster.supports_interface(*b"XYZ\x01"));
        assert!(!NullRoster::incompatible(Address::derive("x"))
            .supports_interface(EDITOR_ROSTER_INTERFACE_ID));
    }

    #[test]
    fn add_is_all_or_nothing() {
        let mut roster = roster();
        let carol = Address::derive("carol");
        let err = roster
            .add_addresses(&[carol, Address::derive("alice")])
            .unwrap_err();
        assert_eq!(err, RosterError::AlreadyListed(Address::derive("alice")));
        assert!(!roster.is_editor(&carol));

        roster.add_addresses(&[carol]).unwrap();
        assert_eq!(roster.editor_count(), 3);
    }

    #[test]
    fn remove_refuses_to_empty_the_roster() {
        let mut roster = roster();
        assert_eq!(
            roster.remove_addresses(&[Address::derive("alice"), Address::derive("bob")]),
            Err(RosterError::WouldBeEmpty)
        );
        assert_eq!(roster.editor_count(), 2);

        roster.remove_addresses(&[Address::derive("bob")]).unwrap();
        assert!(!roster.is_editor(&Address::derive("bob")));
        assert_eq!(
            roster.remove_addresses(&[Address::derive("bob")]),
            Err(RosterError::NotListed(Address::derive("bob")))
        );
    }
}
