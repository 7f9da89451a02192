//! HemoLink HSJ - Patient Appointment Portal Core
//!
//! This crate implements the appointment lifecycle for the HemoLink patient
//! portal: validating identity/contact data at login, the per-session active
//! appointment list, and the availability pool that cancelled appointments
//! release their slots back into. Rendering is out of scope; an external
//! presenter drives the application handlers and displays their results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
