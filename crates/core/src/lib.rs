//! `ripple-core` — primitives shared by the event bus.
//!
//! This crate holds **pure** building blocks (no registry state): event name
//! rules, the error model and bus identifiers.

pub mod error;
pub mod id;
pub mod name;

pub use error::{BusError, BusResult};
pub use id::BusId;
pub use name::{Ancestors, ancestors, is_qualifying_descendant};
