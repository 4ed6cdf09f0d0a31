//! Call payloads for Warden.
//!
//! Every action the governance engine hands to the host carries an opaque
//! `data` payload. This crate defines what those payloads can be and how they
//! are encoded:
//!
//! - [`DaoCall`]: the host DAO's own entry points (batched `execute`,
//!   permission `grant`/`revoke`, metadata setters).
//! - [`RosterCall`]: the editor roster's address-list mutators.
//!
//! Payloads are `interface tag (4 bytes) ‖ bincode(call)`; decoding is strict
//! (wrong tag, truncation and trailing bytes are all errors).

pub mod action;
pub mod codec;
pub mod dao;
pub mod error;
pub mod roster;

pub use action::Action;
pub use codec::{Call, InterfaceTag, MAX_CALL_SIZE};
pub use dao::DaoCall;
pub use error::CallError;
pub use roster::RosterCall;
