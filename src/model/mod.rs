//! Core data structures flowing through the junction pipeline.
//!
//! - [`site`] – Binding sites and their `(chain, position)` keys.
//! - [`snapshot`] – One time step of a simulation: binding sites plus chain length.
//! - [`junction`] – Junctions, their backbone links and the flat output record.
//!
//! Raw geometry ([`Snapshot`]) is kept apart from the derived network
//! ([`Junction`]), which the [`crate::network`] pipeline builds from it.
//!
//! [`Snapshot`]: snapshot::Snapshot
//! [`Junction`]: junction::Junction

pub mod junction;
pub mod site;
pub mod snapshot;
