//! Application services layer scaffolding.

pub mod cafes;
pub mod error;
pub mod repos;
