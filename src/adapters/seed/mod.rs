//! Seed source adapters.

mod fixture;

pub use fixture::FixtureSeed;
