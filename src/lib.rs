//! A small, self-hosted directory API for laptop-friendly cafes.
//!
//! The crate is split into three layers. [`domain`] holds the record types
//! the rest of the system agrees on. [`application`] owns the use cases and
//! the repository traits they depend on. [`infra`] supplies the concrete
//! edges: the SQLite store, the HTTP surface, and telemetry. [`config`]
//! gathers settings from files, environment, and CLI flags before any of
//! the above starts.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
