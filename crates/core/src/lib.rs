pub mod error;
pub mod lifecycle;
pub mod types;
