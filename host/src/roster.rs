//! Read interface of the editor roster.

use warden_types::Address;

/// Four-byte interface identifier answered by `supports_interface`.
pub type InterfaceId = [u8; 4];

/// Marker a roster must advertise to be accepted in multisig settings.
pub const EDITOR_ROSTER_INTERFACE_ID: InterfaceId = *b"EDR\x01";

/// The collaborator that tracks which addresses are editors.
///
/// Mutations (`RosterCall::AddAddresses` / `RemoveAddresses`) are not part of
/// this trait: they only ever happen through actions executed by the host.
pub trait EditorRoster {
    /// Where the roster lives; MEMBER grants are scoped to this address.
    fn address(&self) -> Address;

    /// Capability probe used to reject incompatible rosters.
    fn supports_interface(&self, interface: InterfaceId) -> bool;

    fn is_editor(&self, who: &Address) -> bool;

    /// Number of addresses currently listed as editors.
    fn editor_count(&self) -> u64;
}
