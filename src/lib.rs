//! Employee Directory Backend Library
//!
//! Exposes the application modules so the binary and the integration tests
//! can assemble the service with their own configuration and storage.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod employees;
pub mod validation;
