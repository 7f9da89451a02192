//! Adapters - implementations of the ports.
//!
//! Real deployments plug a UI adapter into the `AffirmationGate` port and a
//! backend feed into the `SeedSource` port; the adapters here cover tests
//! and demos.

pub mod gate;
pub mod seed;
