//! Build context: what kind of binary is currently being produced.
//!
//! A [`BuildContext`] is the only input the resolver consults besides the
//! module table. It is immutable for the duration of a resolution.
//!
//! Contexts usually arrive untyped (command line flags, JSON written by an
//! orchestrator). Those are carried as a [`ContextSpec`] and validated into a
//! [`BuildContext`] against the closed enums before any resolution happens.

mod target;
mod types;

pub use target::*;
pub use types::*;
