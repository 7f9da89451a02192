//! Ports - interfaces between the core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and its collaborators. Adapters implement these ports: a UI adapter
//! in real deployments, scripted stubs in tests.
//!
//! The core is single-threaded and synchronous (one user event at a time),
//! so the ports are plain blocking traits.

mod affirmation_gate;
mod seed_source;

pub use affirmation_gate::AffirmationGate;
pub use seed_source::SeedSource;
