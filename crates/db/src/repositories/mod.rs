//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept any Postgres executor (a connection or a pool) as the first
//! argument.

pub mod election_repo;

pub use election_repo::ElectionRepo;
