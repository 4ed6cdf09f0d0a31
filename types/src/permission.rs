//! Permission identifiers understood by the host's permission registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte permission identifier.
///
/// Well-known ids are built from an ASCII label, zero-padded to 32 bytes, so
/// they can be compared in `const` context and printed back as their label.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PermissionId([u8; 32]);

/// Right to call `grant`/`revoke` on the DAO itself.
pub const ROOT_PERMISSION_ID: PermissionId = PermissionId::from_label("ROOT");
/// Right to make the DAO run a batch of actions.
pub const EXECUTE_PERMISSION_ID: PermissionId = PermissionId::from_label("EXECUTE");
/// Base participation capability, held on the editor roster.
pub const MEMBER_PERMISSION_ID: PermissionId = PermissionId::from_label("MEMBER");
/// Administrative voting capability, held on the editor roster.
pub const EDITOR_PERMISSION_ID: PermissionId = PermissionId::from_label("EDITOR");
/// Right to add/remove addresses on the editor roster.
pub const UPDATE_ADDRESSES_PERMISSION_ID: PermissionId =
    PermissionId::from_label("UPDATE_ADDRESSES");
/// Right to change a plugin's multisig settings.
pub const UPDATE_MULTISIG_SETTINGS_PERMISSION_ID: PermissionId =
    PermissionId::from_label("UPDATE_MULTISIG_SETTINGS");

impl PermissionId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Build an id from an ASCII label of at most 32 bytes.
    ///
    /// # Panics
    /// Panics (at compile time when used in `const`) if the label is longer than 32 bytes.
    pub const fn from_label(label: &str) -> Self {
        let src = label.as_bytes();
        assert!(src.len() <= 32, "permission label longer than 32 bytes");
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The label this id was built from, if it is printable ASCII.
    pub fn label(&self) -> Option<&str> {
        let end = self.0.iter().position(|b| *b == 0).unwrap_or(32);
        if self.0[end..].iter().any(|b| *b != 0) {
            return None;
        }
        let text = std::str::from_utf8(&self.0[..end]).ok()?;
        (!text.is_empty() && text.bytes().all(|b| b.is_ascii_graphic())).then_some(text)
    }
}

impl fmt::Debug for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "PermissionId({label})"),
            None => write!(f, "PermissionId(0x{})", hex::encode(&self.0[..4])),
        }
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "0x{}", hex::encode(self.0)),
        }
    }
}
