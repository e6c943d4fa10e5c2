//! Core domain types shared by every layer.

pub mod entities;
