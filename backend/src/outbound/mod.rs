//! Driven adapters: PostgreSQL persistence and in-memory fallbacks.

pub mod memory;
pub mod persistence;
