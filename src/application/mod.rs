//! Application layer - one command handler per presenter callback.

pub mod handlers;
