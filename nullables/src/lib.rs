//! Nullable infrastructure for deterministic testing.
//!
//! The host DAO, the editor roster and the passage of time are external to
//! the governance engine and reached only through the `warden-host` traits.
//! This crate provides in-memory implementations of them that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: build a [`NullDao`], install a [`NullRoster`] on it, and hand the
//! DAO to the engine wherever it expects a `Host`.

pub mod clock;
pub mod dao;
pub mod roster;

pub use clock::NullClock;
pub use dao::{DaoEvent, NullDao};
pub use roster::{NullRoster, RosterError};
