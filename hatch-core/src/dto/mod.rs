//! Data Transfer Objects sent to the platform API

pub mod auth;
