//! Domain layer - pure business logic.
//!
//! No I/O happens here. Handlers in the application layer orchestrate these
//! types together with the ports.

pub mod appointment;
pub mod foundation;
pub mod session;
pub mod validation;
