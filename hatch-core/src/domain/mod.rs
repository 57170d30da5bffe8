//! Core domain types
//!
//! This module contains the platform entities returned by the API.
//! They are shared between the client (for deserialization) and the CLI
//! (for display).

pub mod project;
pub mod user;
