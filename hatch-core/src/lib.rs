//! Hatch Core
//!
//! Core types and policies shared by the Hatch client and CLI.
//!
//! This crate contains:
//! - Domain types: platform entities (Project, User)
//! - DTOs: request bodies sent to the platform API
//! - Readiness: the polling policy that decides when a project is ready

pub mod domain;
pub mod dto;
pub mod readiness;
