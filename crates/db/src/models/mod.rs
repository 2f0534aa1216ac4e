//! Row structs read from the database.

pub mod election;
