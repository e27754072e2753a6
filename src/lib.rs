//! Two-team button scoreboard firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod pins;

// The adapters and drivers compile on the host with simulation stubs; the
// real peripheral access is guarded by cfg attributes inside.
pub mod adapters;
pub mod drivers;
