//! Abstract interfaces of the collaborators Warden runs against.
//!
//! The host DAO runtime (permission registry + batched executor), the editor
//! roster and permission conditions are external to the governance engine.
//! The rest of the workspace depends only on these traits; in-memory
//! implementations for tests live in `warden-nullables`.

pub mod condition;
pub mod error;
pub mod host;
pub mod roster;

pub use condition::PermissionCondition;
pub use error::HostError;
pub use host::{Execution, Host};
pub use roster::{EditorRoster, InterfaceId, EDITOR_ROSTER_INTERFACE_ID};
