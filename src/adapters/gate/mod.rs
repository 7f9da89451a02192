//! Affirmation gate adapters.

mod scripted;

pub use scripted::ScriptedGate;
